use crate::modules::common::validators::REGEX_IS_SLUG;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// engine displacement in liters must be within [0, 12.5]
fn is_valid_engine_volume(volume: &Decimal) -> Result<(), ValidationError> {
    if *volume < Decimal::ZERO || *volume > Decimal::new(125, 1) {
        return Err(ValidationError::new(
            "engine volume must be between 0 and 12.5 liters",
        ));
    }

    Ok(())
}

fn is_non_negative_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        return Err(ValidationError::new("price cannot be negative"));
    }

    Ok(())
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingDto {
    pub brand_id: i32,

    #[validate(length(min = 1, max = 125))]
    pub name: String,

    /// derived from the name when omitted
    #[validate(regex(
        path = "REGEX_IS_SLUG",
        message = "slug must be lowercase alphanumeric words separated by dashes"
    ))]
    pub slug: Option<String>,

    pub main_image: Option<String>,

    /// additionally checked against the configured model year bounds
    pub year: i16,

    #[validate(range(min = 0))]
    pub mileage: i32,

    pub transmission_id: i32,

    pub drive_type_id: i32,

    pub fuel_type_id: i32,

    /// forced to zero when the fuel type has no combustion engine
    #[validate(custom = "is_valid_engine_volume")]
    pub engine_volume: Option<Decimal>,

    #[validate(range(min = 0))]
    pub horse_power: i32,

    #[validate(custom = "is_non_negative_price")]
    pub price: Decimal,
}

/// The slug is deliberately not updatable, it is generated exactly once
/// at creation
#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListingDto {
    pub brand_id: Option<i32>,

    #[validate(length(min = 1, max = 125))]
    pub name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub main_image: Option<Option<String>>,

    pub year: Option<i16>,

    #[validate(range(min = 0))]
    pub mileage: Option<i32>,

    pub transmission_id: Option<i32>,

    pub drive_type_id: Option<i32>,

    pub fuel_type_id: Option<i32>,

    #[validate(custom = "is_valid_engine_volume")]
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub engine_volume: Option<Option<Decimal>>,

    #[validate(range(min = 0))]
    pub horse_power: Option<i32>,

    #[validate(custom = "is_non_negative_price")]
    pub price: Option<Decimal>,
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingImageDto {
    #[validate(length(min = 1, max = 255))]
    pub image: String,
}
