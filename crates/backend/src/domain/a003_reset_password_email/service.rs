use super::repository;
use crate::shared::error::ApiError;
use contracts::domain::a003_reset_password_email::aggregate::{
    ResetPasswordEmail, ResetPasswordEmailUpdateForm,
};
use uuid::Uuid;

const DEFAULT_SUBJECT: &str = "Redefinição de senha";

const DEFAULT_BODY: &str = "Olá!\n\n\
Recebemos um pedido para redefinir a sua senha. Use o link abaixo para continuar:\n\n\
{{link}}\n\n\
Se você não fez esse pedido, ignore este e-mail.";

/// Carrega o template do e-mail, criando o default se nao existir
pub async fn get_or_create() -> anyhow::Result<ResetPasswordEmail> {
    if let Some(existing) = repository::find_first().await? {
        return Ok(existing);
    }

    tracing::info!("Seeding default reset password e-mail template");
    let aggregate =
        ResetPasswordEmail::new_for_insert(DEFAULT_SUBJECT.to_string(), DEFAULT_BODY.to_string());
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

/// Atualizacao do template do e-mail
pub async fn update(
    id: Uuid,
    form: &ResetPasswordEmailUpdateForm,
) -> Result<ResetPasswordEmail, ApiError> {
    let mut aggregate = repository::get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    aggregate.apply_update(form);
    aggregate.validate().map_err(ApiError::Validation)?;

    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    repository::update(&aggregate).await?;
    Ok(aggregate)
}
