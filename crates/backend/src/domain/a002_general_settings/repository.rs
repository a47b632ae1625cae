use chrono::Utc;
use contracts::domain::a002_general_settings::aggregate::{GeneralSettings, GeneralSettingsId};
use contracts::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_general_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub company_name: String,
    pub timezone: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for GeneralSettings {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        GeneralSettings::from_parts(
            GeneralSettingsId(uuid),
            metadata,
            m.company_name,
            m.timezone,
        )
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn find_first() -> anyhow::Result<Option<GeneralSettings>> {
    let result = Entity::find().one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<GeneralSettings>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &GeneralSettings) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        company_name: Set(aggregate.company_name.clone()),
        timezone: Set(aggregate.timezone.clone()),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &GeneralSettings) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        company_name: Set(aggregate.company_name.clone()),
        timezone: Set(aggregate.timezone.clone()),
        created_at: sea_orm::ActiveValue::NotSet,
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.update(conn()).await?;
    Ok(())
}
