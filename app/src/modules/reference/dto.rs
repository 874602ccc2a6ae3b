use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransmissionDto {
    #[validate(length(min = 1, max = 35))]
    pub label: String,
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriveTypeDto {
    #[validate(length(min = 1, max = 35))]
    pub label: String,
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFuelTypeDto {
    #[validate(length(min = 1, max = 35))]
    pub label: String,

    /// when omitted, inferred from the label: electric fuel types
    /// default to false, everything else to true
    pub requires_engine_volume: Option<bool>,
}
