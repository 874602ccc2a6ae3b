use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, ToSchema)]
#[schema(as = entity::vehicle_listing::Model)]
#[sea_orm(table_name = "vehicle_listing")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub brand_id: i32,
    pub name: String,
    pub slug: String,
    /// storage key of the main listing photo, uploads are handled externally
    pub main_image: Option<String>,
    pub year: i16,
    pub mileage: i32,
    pub transmission_id: i32,
    pub drive_type_id: i32,
    pub fuel_type_id: i32,
    /// engine displacement in liters, zero for electric vehicles
    #[sea_orm(column_type = "Decimal(Some((3, 1)))", nullable)]
    pub engine_volume: Option<Decimal>,
    pub horse_power: i32,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub price: Decimal,
}

impl Entity {
    pub async fn find_by_slug(
        slug: &str,
        db: &DatabaseConnection,
    ) -> Result<Option<Model>, DbErr> {
        Self::find().filter(Column::Slug.eq(slug)).one(db).await
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::brand::Entity",
        from = "Column::BrandId",
        to = "super::brand::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Brand,
    #[sea_orm(
        belongs_to = "super::transmission::Entity",
        from = "Column::TransmissionId",
        to = "super::transmission::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Transmission,
    #[sea_orm(
        belongs_to = "super::drive_type::Entity",
        from = "Column::DriveTypeId",
        to = "super::drive_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DriveType,
    #[sea_orm(
        belongs_to = "super::fuel_type::Entity",
        from = "Column::FuelTypeId",
        to = "super::fuel_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FuelType,
    #[sea_orm(has_many = "super::listing_image::Entity")]
    ListingImage,
}

impl Related<super::brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brand.def()
    }
}

impl Related<super::transmission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transmission.def()
    }
}

impl Related<super::drive_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DriveType.def()
    }
}

impl Related<super::fuel_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FuelType.def()
    }
}

impl Related<super::listing_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ListingImage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
