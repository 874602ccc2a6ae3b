use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Supplementary photo of a vehicle listing, the primary photo
/// lives on the listing itself
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, ToSchema)]
#[schema(as = entity::listing_image::Model)]
#[sea_orm(table_name = "listing_image")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub vehicle_listing_id: i32,
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle_listing::Entity",
        from = "Column::VehicleListingId",
        to = "super::vehicle_listing::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    VehicleListing,
}

impl Related<super::vehicle_listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleListing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
