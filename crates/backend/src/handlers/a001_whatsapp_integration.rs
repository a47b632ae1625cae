use axum::extract::Path;
use axum::http::Method;
use axum::{Form, Json};

use crate::domain::a001_whatsapp_integration;
use crate::shared::error::ApiError;
use crate::system::antiforgery;

/// GET /api/configuration/evolution
pub async fn get_settings(
) -> Result<Json<contracts::domain::a001_whatsapp_integration::aggregate::WhatsappIntegration>, ApiError>
{
    let aggregate = a001_whatsapp_integration::service::get_or_create().await?;
    Ok(Json(aggregate))
}

/// PUT /api/configuration/evolution/:id
/// (ou POST com o campo `_method=PUT`, como num form HTML)
pub async fn update_settings(
    method: Method,
    Path(id): Path<String>,
    Form(form): Form<
        contracts::domain::a001_whatsapp_integration::aggregate::WhatsappIntegrationUpdateForm,
    >,
) -> Result<Json<contracts::domain::a001_whatsapp_integration::aggregate::WhatsappIntegration>, ApiError>
{
    super::ensure_update_method(&method, form.method.as_deref())?;

    if !antiforgery::verify_token(&form.antiforgery_token).await? {
        return Err(ApiError::InvalidAntiforgeryToken);
    }

    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| ApiError::InvalidId(format!("ID inválido: {}", id)))?;

    let updated = a001_whatsapp_integration::service::update(uuid, &form).await?;
    Ok(Json(updated))
}

/// POST /api/configuration/evolution/test
pub async fn test_connection(
    Form(form): Form<
        contracts::domain::a001_whatsapp_integration::aggregate::WhatsappIntegrationUpdateForm,
    >,
) -> Result<Json<contracts::domain::a001_whatsapp_integration::aggregate::ConnectionTestResult>, ApiError>
{
    let result = a001_whatsapp_integration::service::test_connection(&form).await?;
    Ok(Json(result))
}
