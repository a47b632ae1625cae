use serde::{Deserialize, Serialize};

/// Metadados de ciclo de vida de um agregado
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Data de criacao do registro
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Data da ultima atualizacao
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Versao para optimistic locking
    pub version: i32,
}

impl EntityMetadata {
    /// Metadados novos para um agregado recem-criado
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    /// Atualizar o timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }

    /// Incrementar a versao
    pub fn increment_version(&mut self) {
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
