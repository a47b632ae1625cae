use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Base com os campos obrigatorios de todos os agregados
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Identificador unico do registro
    pub id: Id,
    /// Metadados de ciclo de vida
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    /// Criar um agregado novo
    pub fn new(id: Id) -> Self {
        Self {
            id,
            metadata: EntityMetadata::new(),
        }
    }

    /// Criar com metadados existentes (carga a partir do banco)
    pub fn with_metadata(id: Id, metadata: EntityMetadata) -> Self {
        Self { id, metadata }
    }

    /// Atualizar o timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}
