use super::{
    dto::{CreateBrandDto, UpdateBrandDto},
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
    routing::{get, put},
    Json, Router,
};
use http::StatusCode;
use sea_orm::{EntityTrait, ModelTrait, QueryOrder};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_brands).post(create_brand))
        .route("/:brand_id", put(update_brand).delete(delete_brand))
}

/// Lists every brand, ordered by name
#[utoipa::path(
    get,
    tag = "brand",
    path = "/brand",
    responses(
        (
            status = OK,
            content_type = "application/json",
            body = Vec<entity::brand::Model>,
        ),
    ),
)]
pub async fn list_brands(
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<entity::brand::Model>>, (StatusCode, SimpleError)> {
    let brands = entity::brand::Entity::find()
        .order_by_asc(entity::brand::Column::Name)
        .all(&db)
        .await
        .map_err(DbError::from)?;

    Ok(Json(brands))
}

/// Creates a new brand
///
/// the slug is derived from the name when not provided
#[utoipa::path(
    post,
    tag = "brand",
    path = "/brand",
    request_body(content = CreateBrandDto, content_type = "application/json"),
    responses(
        (
            status = OK,
            description = "the created brand",
            content_type = "application/json",
            body = entity::brand::Model,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message",
            body = SimpleError,
        ),
    ),
)]
pub async fn create_brand(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<CreateBrandDto>,
) -> Result<Json<entity::brand::Model>, (StatusCode, SimpleError)> {
    let created_brand = repository::create_brand(&db, &dto).await?;

    Ok(Json(created_brand))
}

/// Updates a brand
///
/// renames never regenerate the slug
#[utoipa::path(
    put,
    tag = "brand",
    path = "/brand/{brand_id}",
    params(
        ("brand_id" = i32, Path, description = "id of the brand to update"),
    ),
    request_body(content = UpdateBrandDto, content_type = "application/json"),
    responses(
        (
            status = OK,
            content_type = "application/json",
            body = entity::brand::Model,
        ),
        (
            status = NOT_FOUND,
            body = SimpleError,
        ),
    ),
)]
pub async fn update_brand(
    Path(brand_id): Path<i32>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<UpdateBrandDto>,
) -> Result<Json<entity::brand::Model>, (StatusCode, SimpleError)> {
    let brand = entity::brand::Entity::find_by_id(brand_id)
        .one(&db)
        .await
        .map_err(DbError::from)?
        .ok_or_else(|| not_found_msg("brand not found"))?;

    let updated_brand = repository::update_brand(&db, brand, dto).await?;

    Ok(Json(updated_brand))
}

/// Deletes a brand
///
/// deleting a brand deletes all of its listings and their images
#[utoipa::path(
    delete,
    tag = "brand",
    path = "/brand/{brand_id}",
    params(
        ("brand_id" = i32, Path, description = "id of the brand to delete"),
    ),
    responses(
        (
            status = OK,
            description = "brand deleted",
        ),
        (
            status = NOT_FOUND,
            body = SimpleError,
        ),
    ),
)]
pub async fn delete_brand(
    Path(brand_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<StatusCode, (StatusCode, SimpleError)> {
    let brand = entity::brand::Entity::find_by_id(brand_id)
        .one(&db)
        .await
        .map_err(DbError::from)?
        .ok_or_else(|| not_found_msg("brand not found"))?;

    brand.delete(&db).await.map_err(DbError::from)?;

    Ok(StatusCode::OK)
}
