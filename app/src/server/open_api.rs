use crate::modules::{brand, catalog, common, listing, reference};
use crate::server::controller;
use axum::Router;
use utoipa::openapi::{InfoBuilder, OpenApiBuilder};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(
        entity::brand::Model,
        entity::transmission::Model,
        entity::drive_type::Model,
        entity::fuel_type::Model,
        entity::vehicle_listing::Model,
        entity::listing_image::Model,

        common::responses::SimpleError,

        catalog::fragment::Fragment,
        catalog::dto::HomeContext,
        catalog::dto::CatalogContext,
        catalog::dto::CarDetailContext,
        catalog::dto::HomePage,
        catalog::dto::CatalogPage,
        catalog::dto::CarDetailPage,

        brand::dto::CreateBrandDto,
        brand::dto::UpdateBrandDto,

        listing::dto::CreateListingDto,
        listing::dto::UpdateListingDto,
        listing::dto::CreateListingImageDto,

        reference::dto::CreateTransmissionDto,
        reference::dto::CreateDriveTypeDto,
        reference::dto::CreateFuelTypeDto,
    )),
    paths(
        controller::healthcheck,

        catalog::routes::index,
        catalog::routes::catalog_all,
        catalog::routes::catalog_by_brand,
        catalog::routes::car_detail,

        brand::routes::list_brands,
        brand::routes::create_brand,
        brand::routes::update_brand,
        brand::routes::delete_brand,

        listing::routes::create_listing,
        listing::routes::update_listing,
        listing::routes::delete_listing,
        listing::routes::add_listing_image,
        listing::routes::delete_listing_image,

        reference::routes::list_transmissions,
        reference::routes::create_transmission,
        reference::routes::delete_transmission,
        reference::routes::list_drive_types,
        reference::routes::create_drive_type,
        reference::routes::delete_drive_type,
        reference::routes::list_fuel_types,
        reference::routes::create_fuel_type,
        reference::routes::delete_fuel_type,
    ),
)]
struct ApiDoc;

pub fn create_openapi_router() -> Router<controller::AppState> {
    let builder: OpenApiBuilder = ApiDoc::openapi().into();

    let info = InfoBuilder::new()
        .title("Vehicle catalog API")
        .description(Some("Browsable catalog of vehicle listings."))
        .version("0.0.1")
        .build();

    let api_doc = builder.info(info).build();

    Router::new()
        .merge(SwaggerUi::new("/swagger").url("/docs/openapi.json", api_doc))
        .merge(RapiDoc::new("/docs/openapi.json").path("/rapidoc"))
}
