use super::{
    dto::{CarDetailContext, CatalogContext, FragmentResponse, HomeContext},
    filters::CatalogFilters,
    fragment::{Fragment, FragmentFlags},
    repository,
};
use crate::{
    database::error::DbError,
    modules::common::{
        extractors::{DbConnection, HxRequest, ValidatedQuery},
        responses::{not_found_msg, SimpleError},
    },
};
use axum::{extract::Path, Json};
use http::StatusCode;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

/// Home page: the brand list with no brand selected
#[utoipa::path(
    get,
    tag = "catalog",
    path = "/",
    responses(
        (
            status = OK,
            content_type = "application/json",
            body = HomePage,
        ),
    ),
)]
pub async fn index(
    HxRequest(is_fragment): HxRequest,
    DbConnection(db): DbConnection,
) -> Result<Json<FragmentResponse<HomeContext>>, (StatusCode, SimpleError)> {
    let brands = repository::brands(&db).await?;

    Ok(Json(FragmentResponse {
        fragment: Fragment::HomeContent,
        full_page: !is_fragment,
        context: HomeContext {
            brands,
            current_brand: None,
        },
    }))
}

/// Catalog over every brand
#[utoipa::path(
    get,
    tag = "catalog",
    path = "/catalog",
    params(CatalogFilters, FragmentFlags),
    responses(
        (
            status = OK,
            content_type = "application/json",
            body = CatalogPage,
        ),
    ),
)]
pub async fn catalog_all(
    ValidatedQuery(filters): ValidatedQuery<CatalogFilters>,
    ValidatedQuery(flags): ValidatedQuery<FragmentFlags>,
    HxRequest(is_fragment): HxRequest,
    DbConnection(db): DbConnection,
) -> Result<Json<FragmentResponse<CatalogContext>>, (StatusCode, SimpleError)> {
    catalog_response(&db, is_fragment, None, filters, flags).await
}

/// Catalog narrowed to a single brand by its slug
#[utoipa::path(
    get,
    tag = "catalog",
    path = "/catalog/{brand_slug}",
    params(
        ("brand_slug" = String, Path, description = "slug of the brand to narrow the catalog to"),
        CatalogFilters,
        FragmentFlags,
    ),
    responses(
        (
            status = OK,
            content_type = "application/json",
            body = CatalogPage,
        ),
        (
            status = NOT_FOUND,
            description = "no brand with the given slug",
            body = SimpleError,
        ),
    ),
)]
pub async fn catalog_by_brand(
    Path(brand_slug): Path<String>,
    ValidatedQuery(filters): ValidatedQuery<CatalogFilters>,
    ValidatedQuery(flags): ValidatedQuery<FragmentFlags>,
    HxRequest(is_fragment): HxRequest,
    DbConnection(db): DbConnection,
) -> Result<Json<FragmentResponse<CatalogContext>>, (StatusCode, SimpleError)> {
    let current_brand = entity::brand::Entity::find_by_slug(&brand_slug, &db)
        .await
        .map_err(DbError::from)?
        .ok_or_else(|| not_found_msg("brand not found"))?;

    catalog_response(&db, is_fragment, Some(current_brand), filters, flags).await
}

async fn catalog_response(
    db: &DatabaseConnection,
    is_fragment: bool,
    current_brand: Option<entity::brand::Model>,
    filters: CatalogFilters,
    flags: FragmentFlags,
) -> Result<Json<FragmentResponse<CatalogContext>>, (StatusCode, SimpleError)> {
    let mut query = filters.apply_to(repository::unfiltered());

    if let Some(brand) = &current_brand {
        query = query.filter(entity::vehicle_listing::Column::BrandId.eq(brand.id));
    }

    let cars = query.all(db).await.map_err(DbError::from)?;

    let brands = repository::brands(db).await?;
    let transmissions = repository::transmissions(db).await?;
    let drive_types = repository::drive_types(db).await?;
    let fuel_types = repository::fuel_types(db).await?;

    let search_query = filters.q.clone().unwrap_or_default();

    Ok(Json(FragmentResponse {
        fragment: flags.catalog_fragment(),
        full_page: !is_fragment,
        context: CatalogContext {
            cars,
            brands,
            transmissions,
            drive_types,
            fuel_types,
            current_brand: current_brand.map(|b| b.slug),
            filter_state: filters.effective_state(),
            search_query,
        },
    }))
}

/// Detail page for a single listing, with its supplementary images and
/// up to 4 other listings of the same brand
#[utoipa::path(
    get,
    tag = "catalog",
    path = "/car/{slug}",
    params(
        ("slug" = String, Path, description = "slug of the listing to show"),
    ),
    responses(
        (
            status = OK,
            content_type = "application/json",
            body = CarDetailPage,
        ),
        (
            status = NOT_FOUND,
            description = "no listing with the given slug",
            body = SimpleError,
        ),
    ),
)]
pub async fn car_detail(
    Path(slug): Path<String>,
    HxRequest(is_fragment): HxRequest,
    DbConnection(db): DbConnection,
) -> Result<Json<FragmentResponse<CarDetailContext>>, (StatusCode, SimpleError)> {
    let car = entity::vehicle_listing::Entity::find_by_slug(&slug, &db)
        .await
        .map_err(DbError::from)?
        .ok_or_else(|| not_found_msg("listing not found"))?;

    let brand = entity::brand::Entity::find_by_id(car.brand_id)
        .one(&db)
        .await
        .map_err(DbError::from)?;

    let images = repository::listing_images(&db, car.id).await?;
    let related_cars = repository::related_listings(&db, &car).await?;
    let brands = repository::brands(&db).await?;

    Ok(Json(FragmentResponse {
        fragment: Fragment::CarDetail,
        full_page: !is_fragment,
        context: CarDetailContext {
            car,
            images,
            related_cars,
            brands,
            current_brand: brand.map(|b| b.slug),
        },
    }))
}
