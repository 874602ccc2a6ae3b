use crate::database::error::DbError;
use entity::{brand, drive_type, fuel_type, listing_image, transmission, vehicle_listing};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select,
};

/// Related listings shown on a detail page
const RELATED_LISTINGS_LIMIT: u64 = 4;

/// The unfiltered catalog query: every listing, newest first, with the
/// reference tables joined so filter predicates can compare against
/// brand slugs and transmission / drive type / fuel type labels
pub fn unfiltered() -> Select<vehicle_listing::Entity> {
    vehicle_listing::Entity::find()
        .join(JoinType::InnerJoin, vehicle_listing::Relation::Brand.def())
        .join(
            JoinType::InnerJoin,
            vehicle_listing::Relation::Transmission.def(),
        )
        .join(
            JoinType::InnerJoin,
            vehicle_listing::Relation::DriveType.def(),
        )
        .join(
            JoinType::InnerJoin,
            vehicle_listing::Relation::FuelType.def(),
        )
        .order_by_desc(vehicle_listing::Column::CreatedAt)
}

/// Other listings of the same brand, excluding the listing itself
pub fn related_query(listing: &vehicle_listing::Model) -> Select<vehicle_listing::Entity> {
    vehicle_listing::Entity::find()
        .filter(vehicle_listing::Column::BrandId.eq(listing.brand_id))
        .filter(vehicle_listing::Column::Id.ne(listing.id))
        .limit(RELATED_LISTINGS_LIMIT)
}

pub async fn related_listings(
    db: &DatabaseConnection,
    listing: &vehicle_listing::Model,
) -> Result<Vec<vehicle_listing::Model>, DbError> {
    Ok(related_query(listing).all(db).await?)
}

pub async fn listing_images(
    db: &DatabaseConnection,
    listing_id: i32,
) -> Result<Vec<listing_image::Model>, DbError> {
    Ok(listing_image::Entity::find()
        .filter(listing_image::Column::VehicleListingId.eq(listing_id))
        .all(db)
        .await?)
}

pub async fn brands(db: &DatabaseConnection) -> Result<Vec<brand::Model>, DbError> {
    Ok(brand::Entity::find()
        .order_by_asc(brand::Column::Name)
        .all(db)
        .await?)
}

pub async fn transmissions(db: &DatabaseConnection) -> Result<Vec<transmission::Model>, DbError> {
    Ok(transmission::Entity::find().all(db).await?)
}

pub async fn drive_types(db: &DatabaseConnection) -> Result<Vec<drive_type::Model>, DbError> {
    Ok(drive_type::Entity::find().all(db).await?)
}

pub async fn fuel_types(db: &DatabaseConnection) -> Result<Vec<fuel_type::Model>, DbError> {
    Ok(fuel_type::Entity::find().all(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use sea_orm::{DbBackend, MockDatabase, QueryTrait};

    fn listing() -> vehicle_listing::Model {
        vehicle_listing::Model {
            id: 10,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            brand_id: 5,
            name: String::from("Toyota Corolla"),
            slug: String::from("toyota-corolla"),
            main_image: None,
            year: 2015,
            mileage: 120_000,
            transmission_id: 1,
            drive_type_id: 1,
            fuel_type_id: 1,
            engine_volume: Some(Decimal::new(18, 1)),
            horse_power: 140,
            price: Decimal::new(2_000_000, 2),
        }
    }

    #[test]
    fn unfiltered_orders_newest_first_and_joins_reference_tables() {
        let sql = unfiltered().build(DbBackend::Postgres).to_string();

        assert!(sql.contains(r#"ORDER BY "vehicle_listing"."created_at" DESC"#));
        assert!(sql.contains(r#"INNER JOIN "brand""#));
        assert!(sql.contains(r#"INNER JOIN "transmission""#));
        assert!(sql.contains(r#"INNER JOIN "drive_type""#));
        assert!(sql.contains(r#"INNER JOIN "fuel_type""#));
    }

    #[test]
    fn related_query_excludes_the_listing_itself_and_limits_to_four() {
        let sql = related_query(&listing()).build(DbBackend::Postgres).to_string();

        assert!(sql.contains(r#""vehicle_listing"."brand_id" = 5"#));
        assert!(sql.contains(r#""vehicle_listing"."id" <> 10"#));
        assert!(sql.contains("LIMIT 4"));
    }

    #[tokio::test]
    async fn a_listing_alone_in_its_brand_has_no_related_listings() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([Vec::<vehicle_listing::Model>::new()])
            .into_connection();

        let related = related_listings(&db, &listing())
            .await
            .unwrap_or_else(|_| panic!("expected an empty result, not an error"));

        assert!(related.is_empty());
    }
}
