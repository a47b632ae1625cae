use super::repository;
use crate::shared::error::ApiError;
use contracts::domain::a002_general_settings::aggregate::{
    GeneralSettings, GeneralSettingsUpdateForm,
};
use uuid::Uuid;

const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

/// Carrega as configuracoes gerais, criando o default se nao existir
pub async fn get_or_create() -> anyhow::Result<GeneralSettings> {
    if let Some(existing) = repository::find_first().await? {
        return Ok(existing);
    }

    tracing::info!("Seeding default general settings record");
    let aggregate = GeneralSettings::new_for_insert(String::new(), DEFAULT_TIMEZONE.to_string());
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

/// Atualizacao das configuracoes gerais
pub async fn update(
    id: Uuid,
    form: &GeneralSettingsUpdateForm,
) -> Result<GeneralSettings, ApiError> {
    let mut aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    aggregate.apply_update(form);
    aggregate.validate().map_err(ApiError::Validation)?;

    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    repository::update(&aggregate).await?;
    Ok(aggregate)
}
