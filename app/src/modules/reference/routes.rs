use super::{
    dto::{CreateDriveTypeDto, CreateFuelTypeDto, CreateTransmissionDto},
    repository,
};
use crate::{
    database::error::DbError,
    modules::common::{
        extractors::{DbConnection, ValidatedJson},
        responses::{not_found_msg, SimpleError},
    },
    server::controller::AppState,
};
use axum::{
    extract::Path,
    routing::{delete, get},
    Json, Router,
};
use http::StatusCode;
use sea_orm::{EntityTrait, ModelTrait, QueryOrder};

pub fn transmission_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_transmissions).post(create_transmission))
        .route("/:transmission_id", delete(delete_transmission))
}

pub fn drive_type_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drive_types).post(create_drive_type))
        .route("/:drive_type_id", delete(delete_drive_type))
}

pub fn fuel_type_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_fuel_types).post(create_fuel_type))
        .route("/:fuel_type_id", delete(delete_fuel_type))
}

/// Lists every transmission
#[utoipa::path(
    get,
    tag = "reference",
    path = "/transmission",
    responses(
        (
            status = OK,
            content_type = "application/json",
            body = Vec<entity::transmission::Model>,
        ),
    ),
)]
pub async fn list_transmissions(
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<entity::transmission::Model>>, (StatusCode, SimpleError)> {
    let transmissions = entity::transmission::Entity::find()
        .order_by_asc(entity::transmission::Column::Id)
        .all(&db)
        .await
        .map_err(DbError::from)?;

    Ok(Json(transmissions))
}

/// Creates a transmission
#[utoipa::path(
    post,
    tag = "reference",
    path = "/transmission",
    request_body(content = CreateTransmissionDto, content_type = "application/json"),
    responses(
        (
            status = OK,
            content_type = "application/json",
            body = entity::transmission::Model,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message",
            body = SimpleError,
        ),
    ),
)]
pub async fn create_transmission(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<CreateTransmissionDto>,
) -> Result<Json<entity::transmission::Model>, (StatusCode, SimpleError)> {
    let created = repository::create_transmission(&db, &dto).await?;

    Ok(Json(created))
}

/// Deletes a transmission and every listing that references it
#[utoipa::path(
    delete,
    tag = "reference",
    path = "/transmission/{transmission_id}",
    params(
        ("transmission_id" = i32, Path, description = "id of the transmission to delete"),
    ),
    responses(
        (status = OK, description = "transmission deleted"),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn delete_transmission(
    Path(transmission_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<StatusCode, (StatusCode, SimpleError)> {
    let transmission = entity::transmission::Entity::find_by_id(transmission_id)
        .one(&db)
        .await
        .map_err(DbError::from)?
        .ok_or_else(|| not_found_msg("transmission not found"))?;

    transmission.delete(&db).await.map_err(DbError::from)?;

    Ok(StatusCode::OK)
}

/// Lists every drive type
#[utoipa::path(
    get,
    tag = "reference",
    path = "/drive-type",
    responses(
        (
            status = OK,
            content_type = "application/json",
            body = Vec<entity::drive_type::Model>,
        ),
    ),
)]
pub async fn list_drive_types(
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<entity::drive_type::Model>>, (StatusCode, SimpleError)> {
    let drive_types = entity::drive_type::Entity::find()
        .order_by_asc(entity::drive_type::Column::Id)
        .all(&db)
        .await
        .map_err(DbError::from)?;

    Ok(Json(drive_types))
}

/// Creates a drive type
#[utoipa::path(
    post,
    tag = "reference",
    path = "/drive-type",
    request_body(content = CreateDriveTypeDto, content_type = "application/json"),
    responses(
        (
            status = OK,
            content_type = "application/json",
            body = entity::drive_type::Model,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message",
            body = SimpleError,
        ),
    ),
)]
pub async fn create_drive_type(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<CreateDriveTypeDto>,
) -> Result<Json<entity::drive_type::Model>, (StatusCode, SimpleError)> {
    let created = repository::create_drive_type(&db, &dto).await?;

    Ok(Json(created))
}

/// Deletes a drive type and every listing that references it
#[utoipa::path(
    delete,
    tag = "reference",
    path = "/drive-type/{drive_type_id}",
    params(
        ("drive_type_id" = i32, Path, description = "id of the drive type to delete"),
    ),
    responses(
        (status = OK, description = "drive type deleted"),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn delete_drive_type(
    Path(drive_type_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<StatusCode, (StatusCode, SimpleError)> {
    let drive_type = entity::drive_type::Entity::find_by_id(drive_type_id)
        .one(&db)
        .await
        .map_err(DbError::from)?
        .ok_or_else(|| not_found_msg("drive type not found"))?;

    drive_type.delete(&db).await.map_err(DbError::from)?;

    Ok(StatusCode::OK)
}

/// Lists every fuel type
#[utoipa::path(
    get,
    tag = "reference",
    path = "/fuel-type",
    responses(
        (
            status = OK,
            content_type = "application/json",
            body = Vec<entity::fuel_type::Model>,
        ),
    ),
)]
pub async fn list_fuel_types(
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<entity::fuel_type::Model>>, (StatusCode, SimpleError)> {
    let fuel_types = entity::fuel_type::Entity::find()
        .order_by_asc(entity::fuel_type::Column::Id)
        .all(&db)
        .await
        .map_err(DbError::from)?;

    Ok(Json(fuel_types))
}

/// Creates a fuel type
///
/// `requiresEngineVolume` defaults to false for electric labels and to
/// true for everything else
#[utoipa::path(
    post,
    tag = "reference",
    path = "/fuel-type",
    request_body(content = CreateFuelTypeDto, content_type = "application/json"),
    responses(
        (
            status = OK,
            content_type = "application/json",
            body = entity::fuel_type::Model,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message",
            body = SimpleError,
        ),
    ),
)]
pub async fn create_fuel_type(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<CreateFuelTypeDto>,
) -> Result<Json<entity::fuel_type::Model>, (StatusCode, SimpleError)> {
    let created = repository::create_fuel_type(&db, &dto).await?;

    Ok(Json(created))
}

/// Deletes a fuel type and every listing that references it
#[utoipa::path(
    delete,
    tag = "reference",
    path = "/fuel-type/{fuel_type_id}",
    params(
        ("fuel_type_id" = i32, Path, description = "id of the fuel type to delete"),
    ),
    responses(
        (status = OK, description = "fuel type deleted"),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn delete_fuel_type(
    Path(fuel_type_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<StatusCode, (StatusCode, SimpleError)> {
    let fuel_type = entity::fuel_type::Entity::find_by_id(fuel_type_id)
        .one(&db)
        .await
        .map_err(DbError::from)?
        .ok_or_else(|| not_found_msg("fuel type not found"))?;

    fuel_type.delete(&db).await.map_err(DbError::from)?;

    Ok(StatusCode::OK)
}
