use crate::domain::common::{AggregateId, BaseAggregate, EntityMetadata};
use crate::shared::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Identificador unico da integracao de WhatsApp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WhatsappIntegrationId(pub Uuid);

impl WhatsappIntegrationId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for WhatsappIntegrationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(WhatsappIntegrationId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Credenciais da integracao de WhatsApp (Evolution API)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsappIntegration {
    #[serde(flatten)]
    pub base: BaseAggregate<WhatsappIntegrationId>,

    // Campos especificos do agregado
    pub base_url: String,
    pub token: String,
}

impl WhatsappIntegration {
    /// Criar a integracao inicial para gravar no banco
    pub fn new_for_insert(base_url: String, token: String) -> Self {
        Self {
            base: BaseAggregate::new(WhatsappIntegrationId::new_v4()),
            base_url,
            token,
        }
    }

    /// Reconstruir a partir de dados persistidos
    pub fn from_parts(
        id: WhatsappIntegrationId,
        metadata: EntityMetadata,
        base_url: String,
        token: String,
    ) -> Self {
        Self {
            base: BaseAggregate::with_metadata(id, metadata),
            base_url,
            token,
        }
    }

    /// Obter o ID como string
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Aplicar os dados do form de edicao
    pub fn apply_update(&mut self, form: &WhatsappIntegrationUpdateForm) {
        self.base_url = form.base_url.clone();
        self.token = form.token.clone();
    }

    /// Validacao dos dados
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.base_url.trim().is_empty() {
            errors.add("base_url", "A URL da API não pode ficar vazia");
        } else if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            errors.add("base_url", "A URL da API deve começar com http:// ou https://");
        }
        if self.token.trim().is_empty() {
            errors.add("token", "O token global não pode ficar vazio");
        }
        errors.into_result()
    }

    /// Hook antes da gravacao
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Payload do form de atualizacao, enviado como application/x-www-form-urlencoded
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WhatsappIntegrationUpdateForm {
    /// Override de metodo ("PUT") quando o envio chega como POST
    #[serde(rename = "_method", default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Token anti-forgery emitido pelo servidor
    #[serde(rename = "_token", default)]
    pub antiforgery_token: String,

    pub base_url: String,
    pub token: String,
}

/// Resultado do teste de conexao com a Evolution API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionTestResult {
    pub success: bool,
    pub message: String,
    pub duration_ms: u64,
    pub tested_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn integration(base_url: &str, token: &str) -> WhatsappIntegration {
        WhatsappIntegration::new_for_insert(base_url.to_string(), token.to_string())
    }

    #[test]
    fn test_validate_accepts_http_and_https() {
        assert!(integration("http://localhost:8080", "abc123").validate().is_ok());
        assert!(integration("https://evo.example.com", "abc123").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_and_bad_scheme() {
        let err = integration("", "").validate().unwrap_err();
        assert_eq!(err.get("base_url"), Some("A URL da API não pode ficar vazia"));
        assert_eq!(err.get("token"), Some("O token global não pode ficar vazio"));

        let err = integration("ftp://evo.example.com", "abc123").validate().unwrap_err();
        assert_eq!(
            err.get("base_url"),
            Some("A URL da API deve começar com http:// ou https://")
        );
        assert!(err.get("token").is_none());
    }

    #[test]
    fn test_apply_update_keeps_id() {
        let mut agg = integration("http://old.example.com", "old-token");
        let id_before = agg.base.id;

        agg.apply_update(&WhatsappIntegrationUpdateForm {
            method: Some("PUT".to_string()),
            antiforgery_token: "tok".to_string(),
            base_url: "https://new.example.com".to_string(),
            token: "new-token".to_string(),
        });

        assert_eq!(agg.base.id, id_before);
        assert_eq!(agg.base_url, "https://new.example.com");
        assert_eq!(agg.token, "new-token");
    }
}
