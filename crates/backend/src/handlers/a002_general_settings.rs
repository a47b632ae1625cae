use axum::extract::Path;
use axum::http::Method;
use axum::{Form, Json};

use crate::domain::a002_general_settings;
use crate::shared::error::ApiError;
use crate::system::antiforgery;

/// GET /api/configuration/general
pub async fn get_settings(
) -> Result<Json<contracts::domain::a002_general_settings::aggregate::GeneralSettings>, ApiError> {
    let aggregate = a002_general_settings::service::get_or_create().await?;
    Ok(Json(aggregate))
}

/// PUT /api/configuration/general/:id
/// (ou POST com o campo `_method=PUT`)
pub async fn update_settings(
    method: Method,
    Path(id): Path<String>,
    Form(form): Form<contracts::domain::a002_general_settings::aggregate::GeneralSettingsUpdateForm>,
) -> Result<Json<contracts::domain::a002_general_settings::aggregate::GeneralSettings>, ApiError> {
    super::ensure_update_method(&method, form.method.as_deref())?;

    if !antiforgery::verify_token(&form.antiforgery_token).await? {
        return Err(ApiError::InvalidAntiforgeryToken);
    }

    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|_| ApiError::InvalidId(format!("ID inválido: {}", id)))?;

    let updated = a002_general_settings::service::update(uuid, &form).await?;
    Ok(Json(updated))
}
