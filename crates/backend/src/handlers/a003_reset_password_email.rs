use axum::extract::Path;
use axum::http::Method;
use axum::{Form, Json};

use crate::domain::a003_reset_password_email;
use crate::shared::error::ApiError;
use crate::system::antiforgery;

/// GET /api/configuration/reset-password-email
pub async fn get_settings(
) -> Result<Json<contracts::domain::a003_reset_password_email::aggregate::ResetPasswordEmail>, ApiError>
{
    let aggregate = a003_reset_password_email::service::get_or_create().await?;
    Ok(Json(aggregate))
}

/// PUT /api/configuration/reset-password-email/:id
/// (ou POST com o campo `_method=PUT`)
pub async fn update_settings(
    method: Method,
    Path(id): Path<String>,
    Form(form): Form<
        contracts::domain::a003_reset_password_email::aggregate::ResetPasswordEmailUpdateForm,
    >,
) -> Result<Json<contracts::domain::a003_reset_password_email::aggregate::ResetPasswordEmail>, ApiError>
{
    super::ensure_update_method(&method, form.method.as_deref())?;

    if !antiforgery::verify_token(&form.antiforgery_token).await? {
        return Err(ApiError::InvalidAntiforgeryToken);
    }

    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| ApiError::InvalidId(format!("ID inválido: {}", id)))?;

    let updated = a003_reset_password_email::service::update(uuid, &form).await?;
    Ok(Json(updated))
}
