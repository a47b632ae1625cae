use chrono::Utc;
use contracts::domain::a001_whatsapp_integration::aggregate::{
    WhatsappIntegration, WhatsappIntegrationId,
};
use contracts::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_whatsapp_integration")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub base_url: String,
    pub token: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for WhatsappIntegration {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        WhatsappIntegration::from_parts(
            WhatsappIntegrationId(uuid),
            metadata,
            m.base_url,
            m.token,
        )
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// O registro e um singleton: a tela edita sempre a primeira (e unica) linha
pub async fn find_first() -> anyhow::Result<Option<WhatsappIntegration>> {
    let result = Entity::find().one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<WhatsappIntegration>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &WhatsappIntegration) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        base_url: Set(aggregate.base_url.clone()),
        token: Set(aggregate.token.clone()),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &WhatsappIntegration) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        base_url: Set(aggregate.base_url.clone()),
        token: Set(aggregate.token.clone()),
        created_at: sea_orm::ActiveValue::NotSet,
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.update(conn()).await?;
    Ok(())
}
