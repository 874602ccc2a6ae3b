use super::dto::{CreateListingDto, UpdateListingDto};
use crate::{
    database::{error::DbError, helpers::set_if_some},
    modules::common::responses::{bad_request_msg, SimpleError},
    utils::string::slugify,
};
use chrono::Utc;
use entity::{fuel_type, listing_image, vehicle_listing};
use http::StatusCode;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::ops::RangeInclusive;

/// Failure modes of listing writes that are the callers fault, plus
/// plain database errors
pub enum ListingWriteError {
    YearOutOfBounds(RangeInclusive<i16>),
    UnknownFuelType,
    Db(DbError),
}

impl From<sea_orm::DbErr> for ListingWriteError {
    fn from(err: sea_orm::DbErr) -> Self {
        ListingWriteError::Db(DbError(err))
    }
}

impl From<ListingWriteError> for (StatusCode, SimpleError) {
    fn from(err: ListingWriteError) -> Self {
        match err {
            ListingWriteError::YearOutOfBounds(bounds) => bad_request_msg(&format!(
                "model year must be between {} and {}",
                bounds.start(),
                bounds.end()
            )),
            ListingWriteError::UnknownFuelType => bad_request_msg("unknown fuel type"),
            ListingWriteError::Db(db_err) => db_err.into(),
        }
    }
}

/// The engine volume to persist: whatever was requested for combustion
/// vehicles, always zero for fuel types without an engine volume (electric)
fn resolve_engine_volume(fuel: &fuel_type::Model, requested: Option<Decimal>) -> Option<Decimal> {
    if fuel.requires_engine_volume {
        requested
    } else {
        Some(Decimal::ZERO)
    }
}

pub async fn create_listing(
    conn: &DatabaseConnection,
    dto: &CreateListingDto,
    model_year_bounds: RangeInclusive<i16>,
) -> Result<vehicle_listing::Model, ListingWriteError> {
    if !model_year_bounds.contains(&dto.year) {
        return Err(ListingWriteError::YearOutOfBounds(model_year_bounds));
    }

    let fuel = fuel_type::Entity::find_by_id(dto.fuel_type_id)
        .one(conn)
        .await?
        .ok_or(ListingWriteError::UnknownFuelType)?;

    let slug = dto.slug.clone().unwrap_or_else(|| slugify(&dto.name));

    let listing = vehicle_listing::ActiveModel {
        brand_id: Set(dto.brand_id),
        name: Set(dto.name.clone()),
        slug: Set(slug),
        main_image: Set(dto.main_image.clone()),
        year: Set(dto.year),
        mileage: Set(dto.mileage),
        transmission_id: Set(dto.transmission_id),
        drive_type_id: Set(dto.drive_type_id),
        fuel_type_id: Set(dto.fuel_type_id),
        engine_volume: Set(resolve_engine_volume(&fuel, dto.engine_volume)),
        horse_power: Set(dto.horse_power),
        price: Set(dto.price),
        ..Default::default()
    };

    Ok(listing.insert(conn).await?)
}

pub async fn update_listing(
    conn: &DatabaseConnection,
    listing: vehicle_listing::Model,
    dto: UpdateListingDto,
    model_year_bounds: RangeInclusive<i16>,
) -> Result<vehicle_listing::Model, ListingWriteError> {
    if let Some(year) = dto.year {
        if !model_year_bounds.contains(&year) {
            return Err(ListingWriteError::YearOutOfBounds(model_year_bounds));
        }
    }

    // the engine volume invariant depends on the fuel type the listing
    // ends up with, not the one it had
    let fuel_type_id = dto.fuel_type_id.unwrap_or(listing.fuel_type_id);

    let fuel = fuel_type::Entity::find_by_id(fuel_type_id)
        .one(conn)
        .await?
        .ok_or(ListingWriteError::UnknownFuelType)?;

    let requested_engine_volume = match dto.engine_volume {
        Some(volume) => volume,
        None => listing.engine_volume,
    };

    let mut l: vehicle_listing::ActiveModel = listing.into();

    l.brand_id = set_if_some(dto.brand_id);
    l.name = set_if_some(dto.name);
    l.main_image = set_if_some(dto.main_image);
    l.year = set_if_some(dto.year);
    l.mileage = set_if_some(dto.mileage);
    l.transmission_id = set_if_some(dto.transmission_id);
    l.drive_type_id = set_if_some(dto.drive_type_id);
    l.horse_power = set_if_some(dto.horse_power);
    l.price = set_if_some(dto.price);

    l.fuel_type_id = Set(fuel_type_id);
    l.engine_volume = Set(resolve_engine_volume(&fuel, requested_engine_volume));
    l.updated_at = Set(Utc::now());

    Ok(l.update(conn).await?)
}

pub async fn add_image(
    conn: &DatabaseConnection,
    listing_id: i32,
    image: &str,
) -> Result<listing_image::Model, DbError> {
    let image = listing_image::ActiveModel {
        vehicle_listing_id: Set(listing_id),
        image: Set(String::from(image)),
        ..Default::default()
    };

    Ok(image.insert(conn).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DbBackend, MockDatabase};

    fn fuel(requires_engine_volume: bool) -> fuel_type::Model {
        fuel_type::Model {
            id: 1,
            created_at: Utc::now(),
            label: String::from(if requires_engine_volume {
                "Бензин"
            } else {
                "Электро"
            }),
            requires_engine_volume,
        }
    }

    fn create_dto(year: i16, engine_volume: Option<Decimal>) -> CreateListingDto {
        CreateListingDto {
            brand_id: 1,
            name: String::from("Toyota Corolla"),
            slug: None,
            main_image: None,
            year,
            mileage: 0,
            transmission_id: 1,
            drive_type_id: 1,
            fuel_type_id: 1,
            engine_volume,
            horse_power: 140,
            price: Decimal::new(2_000_000, 2),
        }
    }

    #[test]
    fn electric_fuel_types_force_engine_volume_to_zero() {
        let requested = Some(Decimal::new(18, 1));

        assert_eq!(
            resolve_engine_volume(&fuel(false), requested),
            Some(Decimal::ZERO)
        );
        assert_eq!(resolve_engine_volume(&fuel(false), None), Some(Decimal::ZERO));
    }

    #[test]
    fn combustion_fuel_types_keep_the_requested_engine_volume() {
        let requested = Some(Decimal::new(18, 1));

        assert_eq!(resolve_engine_volume(&fuel(true), requested), requested);
        assert_eq!(resolve_engine_volume(&fuel(true), None), None);
    }

    #[tokio::test]
    async fn creating_a_listing_with_an_out_of_bounds_year_fails() {
        let db = MockDatabase::new(DbBackend::Postgres).into_connection();

        let result = create_listing(&db, &create_dto(1999, None), 2000..=2025).await;

        assert!(matches!(
            result,
            Err(ListingWriteError::YearOutOfBounds(_))
        ));
    }

    #[tokio::test]
    async fn creating_a_listing_with_an_unknown_fuel_type_fails() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([Vec::<fuel_type::Model>::new()])
            .into_connection();

        let result = create_listing(&db, &create_dto(2015, None), 2000..=2025).await;

        assert!(matches!(result, Err(ListingWriteError::UnknownFuelType)));
    }

    #[tokio::test]
    async fn created_electric_listings_are_stored_with_zero_engine_volume() {
        let created = vehicle_listing::Model {
            id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            brand_id: 1,
            name: String::from("Toyota Corolla"),
            slug: String::from("toyota-corolla"),
            main_image: None,
            year: 2015,
            mileage: 0,
            transmission_id: 1,
            drive_type_id: 1,
            fuel_type_id: 1,
            engine_volume: Some(Decimal::ZERO),
            horse_power: 140,
            price: Decimal::new(2_000_000, 2),
        };

        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![fuel(false)]])
            .append_query_results([vec![created]])
            .into_connection();

        // requesting a 1.8 liter engine on an electric listing
        let dto = create_dto(2015, Some(Decimal::new(18, 1)));

        create_listing(&db, &dto, 2000..=2025)
            .await
            .unwrap_or_else(|_| panic!("expected the insert to succeed"));

        let insert_statement = format!("{:?}", db.into_transaction_log());

        assert!(insert_statement.contains("engine_volume"));
        assert!(!insert_statement.contains("1.8"));
    }
}
