use super::{
    dto::{CreateListingDto, CreateListingImageDto, UpdateListingDto},
    repository,
};
use crate::{
    config::app_config,
    database::error::DbError,
    modules::common::{
        extractors::{DbConnection, ValidatedJson},
        responses::{not_found_msg, SimpleError},
    },
    server::controller::AppState,
};
use axum::{
    extract::Path,
    routing::{delete, post, put},
    Json, Router,
};
use http::StatusCode;
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_listing))
        .route("/:listing_id", put(update_listing).delete(delete_listing))
        .route("/:listing_id/images", post(add_listing_image))
        .route("/:listing_id/images/:image_id", delete(delete_listing_image))
}

/// Creates a vehicle listing
///
/// the slug is derived from the name when not provided and the model year
/// must fall within the configured bounds
#[utoipa::path(
    post,
    tag = "listing",
    path = "/listing",
    request_body(content = CreateListingDto, content_type = "application/json"),
    responses(
        (
            status = OK,
            description = "the created listing",
            content_type = "application/json",
            body = entity::vehicle_listing::Model,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message",
            body = SimpleError,
        ),
    ),
)]
pub async fn create_listing(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<CreateListingDto>,
) -> Result<Json<entity::vehicle_listing::Model>, (StatusCode, SimpleError)> {
    let bounds = app_config().model_year_bounds();

    let created_listing = repository::create_listing(&db, &dto, bounds).await?;

    Ok(Json(created_listing))
}

/// Updates a vehicle listing
///
/// the slug is never regenerated, changing the fuel type re-checks the
/// engine volume invariant
#[utoipa::path(
    put,
    tag = "listing",
    path = "/listing/{listing_id}",
    params(
        ("listing_id" = i32, Path, description = "id of the listing to update"),
    ),
    request_body(content = UpdateListingDto, content_type = "application/json"),
    responses(
        (
            status = OK,
            content_type = "application/json",
            body = entity::vehicle_listing::Model,
        ),
        (
            status = NOT_FOUND,
            body = SimpleError,
        ),
    ),
)]
pub async fn update_listing(
    Path(listing_id): Path<i32>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<UpdateListingDto>,
) -> Result<Json<entity::vehicle_listing::Model>, (StatusCode, SimpleError)> {
    let listing = entity::vehicle_listing::Entity::find_by_id(listing_id)
        .one(&db)
        .await
        .map_err(DbError::from)?
        .ok_or_else(|| not_found_msg("listing not found"))?;

    let bounds = app_config().model_year_bounds();

    let updated_listing = repository::update_listing(&db, listing, dto, bounds).await?;

    Ok(Json(updated_listing))
}

/// Deletes a vehicle listing and its images
#[utoipa::path(
    delete,
    tag = "listing",
    path = "/listing/{listing_id}",
    params(
        ("listing_id" = i32, Path, description = "id of the listing to delete"),
    ),
    responses(
        (
            status = OK,
            description = "listing deleted",
        ),
        (
            status = NOT_FOUND,
            body = SimpleError,
        ),
    ),
)]
pub async fn delete_listing(
    Path(listing_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<StatusCode, (StatusCode, SimpleError)> {
    let listing = entity::vehicle_listing::Entity::find_by_id(listing_id)
        .one(&db)
        .await
        .map_err(DbError::from)?
        .ok_or_else(|| not_found_msg("listing not found"))?;

    listing.delete(&db).await.map_err(DbError::from)?;

    Ok(StatusCode::OK)
}

/// Adds a gallery image to a listing
#[utoipa::path(
    post,
    tag = "listing",
    path = "/listing/{listing_id}/images",
    params(
        ("listing_id" = i32, Path, description = "id of the listing to add the image to"),
    ),
    request_body(content = CreateListingImageDto, content_type = "application/json"),
    responses(
        (
            status = OK,
            content_type = "application/json",
            body = entity::listing_image::Model,
        ),
        (
            status = NOT_FOUND,
            body = SimpleError,
        ),
    ),
)]
pub async fn add_listing_image(
    Path(listing_id): Path<i32>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<CreateListingImageDto>,
) -> Result<Json<entity::listing_image::Model>, (StatusCode, SimpleError)> {
    entity::vehicle_listing::Entity::find_by_id(listing_id)
        .one(&db)
        .await
        .map_err(DbError::from)?
        .ok_or_else(|| not_found_msg("listing not found"))?;

    let created_image = repository::add_image(&db, listing_id, &dto.image).await?;

    Ok(Json(created_image))
}

/// Removes a gallery image from a listing
#[utoipa::path(
    delete,
    tag = "listing",
    path = "/listing/{listing_id}/images/{image_id}",
    params(
        ("listing_id" = i32, Path, description = "id of the listing owning the image"),
        ("image_id" = i32, Path, description = "id of the image to delete"),
    ),
    responses(
        (
            status = OK,
            description = "image deleted",
        ),
        (
            status = NOT_FOUND,
            description = "no such image on this listing",
            body = SimpleError,
        ),
    ),
)]
pub async fn delete_listing_image(
    Path((listing_id, image_id)): Path<(i32, i32)>,
    DbConnection(db): DbConnection,
) -> Result<StatusCode, (StatusCode, SimpleError)> {
    let image = entity::listing_image::Entity::find_by_id(image_id)
        .filter(entity::listing_image::Column::VehicleListingId.eq(listing_id))
        .one(&db)
        .await
        .map_err(DbError::from)?
        .ok_or_else(|| not_found_msg("image not found"))?;

    image.delete(&db).await.map_err(DbError::from)?;

    Ok(StatusCode::OK)
}
