use super::repository;
use crate::shared::error::ApiError;
use chrono::Utc;
use contracts::domain::a001_whatsapp_integration::aggregate::{
    ConnectionTestResult, WhatsappIntegration, WhatsappIntegrationUpdateForm,
};
use uuid::Uuid;

/// Carrega o registro da integracao, criando o default vazio se nao existir
pub async fn get_or_create() -> anyhow::Result<WhatsappIntegration> {
    if let Some(existing) = repository::find_first().await? {
        return Ok(existing);
    }

    tracing::info!("Seeding default whatsapp integration record");
    let aggregate = WhatsappIntegration::new_for_insert(String::new(), String::new());
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

/// Atualizacao das credenciais da integracao
pub async fn update(
    id: Uuid,
    form: &WhatsappIntegrationUpdateForm,
) -> Result<WhatsappIntegration, ApiError> {
    let mut aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    aggregate.apply_update(form);
    aggregate.validate().map_err(ApiError::Validation)?;

    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Teste de conexao com a Evolution API
///
/// Stub: confere apenas o preenchimento das credenciais, nenhuma chamada
/// externa e feita.
pub async fn test_connection(
    form: &WhatsappIntegrationUpdateForm,
) -> anyhow::Result<ConnectionTestResult> {
    let start = std::time::Instant::now();

    let candidate =
        WhatsappIntegration::new_for_insert(form.base_url.clone(), form.token.clone());
    if let Err(errors) = candidate.validate() {
        return Ok(ConnectionTestResult {
            success: false,
            message: errors.to_string(),
            duration_ms: 0,
            tested_at: Utc::now(),
        });
    }

    let duration = start.elapsed();

    Ok(ConnectionTestResult {
        success: true,
        message: "Credenciais preenchidas; a chamada de teste ainda não foi implementada".into(),
        duration_ms: duration.as_millis() as u64,
        tested_at: Utc::now(),
    })
}
