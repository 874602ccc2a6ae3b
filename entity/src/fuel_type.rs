use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, ToSchema)]
#[schema(as = entity::fuel_type::Model)]
#[sea_orm(table_name = "fuel_type")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub label: String,
    /// `false` for fuel types without a combustion engine (electric),
    /// listings referencing them get their engine volume forced to zero
    pub requires_engine_volume: bool,
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
