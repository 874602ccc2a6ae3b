use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, ToSchema)]
#[schema(as = entity::transmission::Model)]
#[sea_orm(table_name = "transmission")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub label: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vehicle_listing::Entity")]
    VehicleListing,
}

impl Related<super::vehicle_listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleListing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
