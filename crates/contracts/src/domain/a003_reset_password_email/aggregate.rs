use crate::domain::common::{AggregateId, BaseAggregate, EntityMetadata};
use crate::shared::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Identificador unico do template de e-mail de redefinicao de senha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResetPasswordEmailId(pub Uuid);

impl ResetPasswordEmailId {
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

impl AggregateId for ResetPasswordEmailId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ResetPasswordEmailId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Template do e-mail de redefinicao de senha
///
/// O corpo precisa conter o placeholder `{{link}}`, substituido pelo link
/// de redefinicao na hora do envio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordEmail {
    #[serde(flatten)]
    pub base: BaseAggregate<ResetPasswordEmailId>,

    pub subject: String,
    pub body: String,
}

impl ResetPasswordEmail {
    pub fn new_for_insert(subject: String, body: String) -> Self {
        Self {
            base: BaseAggregate::new(ResetPasswordEmailId::new_v4()),
            subject,
            body,
        }
    }

    /// Reconstruir a partir de dados persistidos
    pub fn from_parts(
        id: ResetPasswordEmailId,
        metadata: EntityMetadata,
        subject: String,
        body: String,
    ) -> Self {
        Self {
            base: BaseAggregate::with_metadata(id, metadata),
            subject,
            body,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn apply_update(&mut self, form: &ResetPasswordEmailUpdateForm) {
        self.subject = form.subject.clone();
        self.body = form.body.clone();
    }

    /// Validacao dos dados
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.subject.trim().is_empty() {
            errors.add("subject", "O assunto não pode ficar vazio");
        }
        if self.body.trim().is_empty() {
            errors.add("body", "O corpo do e-mail não pode ficar vazio");
        } else if !self.body.contains("{{link}}") {
            errors.add("body", "O corpo do e-mail deve conter o placeholder {{link}}");
        }
        errors.into_result()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Payload do form do template de e-mail
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ResetPasswordEmailUpdateForm {
    #[serde(rename = "_method", default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(rename = "_token", default)]
    pub antiforgery_token: String,

    pub subject: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_link_placeholder() {
        let email = ResetPasswordEmail::new_for_insert(
            "Redefinição de senha".to_string(),
            "Clique aqui para redefinir.".to_string(),
        );
        let err = email.validate().unwrap_err();
        assert_eq!(
            err.get("body"),
            Some("O corpo do e-mail deve conter o placeholder {{link}}")
        );

        let email = ResetPasswordEmail::new_for_insert(
            "Redefinição de senha".to_string(),
            "Clique em {{link}} para redefinir.".to_string(),
        );
        assert!(email.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let email = ResetPasswordEmail::new_for_insert(String::new(), String::new());
        let err = email.validate().unwrap_err();
        assert_eq!(err.get("subject"), Some("O assunto não pode ficar vazio"));
        assert_eq!(err.get("body"), Some("O corpo do e-mail não pode ficar vazio"));
    }
}
