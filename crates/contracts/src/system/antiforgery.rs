use serde::{Deserialize, Serialize};

/// Resposta do endpoint que emite o token anti-forgery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AntiforgeryTokenResponse {
    pub token: String,
}
