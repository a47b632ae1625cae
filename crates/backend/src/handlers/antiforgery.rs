use axum::Json;

use crate::shared::error::ApiError;
use crate::system::antiforgery;

/// GET /api/system/antiforgery
///
/// O form busca um token aqui antes de cada envio.
pub async fn issue_token(
) -> Result<Json<contracts::system::antiforgery::AntiforgeryTokenResponse>, ApiError> {
    let token = antiforgery::issue_token().await?;
    Ok(Json(contracts::system::antiforgery::AntiforgeryTokenResponse { token }))
}
