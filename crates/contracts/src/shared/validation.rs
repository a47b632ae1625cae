use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Erros de validacao por campo, no formato devolvido nas respostas 422
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ValidationErrors {
    pub errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Registrar a mensagem de um campo (a primeira mensagem prevalece)
    pub fn add(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|s| s.as_str())
    }

    /// Ok quando nenhum campo acumulou erro
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .errors
            .values()
            .cloned()
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("base_url", "primeira");
        errors.add("base_url", "segunda");
        assert_eq!(errors.get("base_url"), Some("primeira"));
        assert_eq!(errors.errors.len(), 1);
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.add("token", "obrigatorio");
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.get("token"), Some("obrigatorio"));
    }
}
