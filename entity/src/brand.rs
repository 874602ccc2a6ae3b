use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, ToSchema)]
#[schema(as = entity::brand::Model)]
#[sea_orm(table_name = "brand")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub slug: String,
    /// storage key of the brand logo, uploads are handled externally
    pub logo: Option<String>,
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
    #[sea_orm(has_many = "super::vehicle_listing::Entity")]
    VehicleListing,
}

impl Related<super::vehicle_listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleListing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
