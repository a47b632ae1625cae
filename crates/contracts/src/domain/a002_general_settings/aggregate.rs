use crate::domain::common::{AggregateId, BaseAggregate, EntityMetadata};
use crate::shared::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Identificador unico das configuracoes gerais
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneralSettingsId(pub Uuid);

impl GeneralSettingsId {
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

impl AggregateId for GeneralSettingsId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(GeneralSettingsId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Configuracoes gerais do workspace (aba Principal)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    #[serde(flatten)]
    pub base: BaseAggregate<GeneralSettingsId>,

    pub company_name: String,
    pub timezone: String,
}

impl GeneralSettings {
    pub fn new_for_insert(company_name: String, timezone: String) -> Self {
        Self {
            base: BaseAggregate::new(GeneralSettingsId::new_v4()),
            company_name,
            timezone,
        }
    }

    /// Reconstruir a partir de dados persistidos
    pub fn from_parts(
        id: GeneralSettingsId,
        metadata: EntityMetadata,
        company_name: String,
        timezone: String,
    ) -> Self {
        Self {
            base: BaseAggregate::with_metadata(id, metadata),
            company_name,
            timezone,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn apply_update(&mut self, form: &GeneralSettingsUpdateForm) {
        self.company_name = form.company_name.clone();
        self.timezone = form.timezone.clone();
    }

    /// Validacao dos dados
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.company_name.trim().is_empty() {
            errors.add("company_name", "O nome da empresa não pode ficar vazio");
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

/// Payload do form da aba Principal
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GeneralSettingsUpdateForm {
    #[serde(rename = "_method", default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(rename = "_token", default)]
    pub antiforgery_token: String,

    pub company_name: String,
    pub timezone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_company_name() {
        let settings =
            GeneralSettings::new_for_insert("".to_string(), "America/Sao_Paulo".to_string());
        let err = settings.validate().unwrap_err();
        assert_eq!(
            err.get("company_name"),
            Some("O nome da empresa não pode ficar vazio")
        );

        let settings =
            GeneralSettings::new_for_insert("Acme Ltda".to_string(), String::new());
        assert!(settings.validate().is_ok());
    }
}
