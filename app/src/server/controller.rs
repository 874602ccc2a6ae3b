use super::open_api;
use crate::{
    config::app_config,
    modules::{brand, catalog, listing, reference},
    utils::string::StringExt,
};
use axum::{body::Body, routing::get, Router};
use http::{header, HeaderValue, Method, Request, StatusCode};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

/// The main application state, this is cloned for every HTTP
/// request and thus its fields should contain types that are cheap
/// to clone.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Creates the main axum router/controller to be served over https
pub fn new(db: DatabaseConnection) -> Router {
    let state = AppState { db };

    // URL.to_string for some reason adds a trailing slash
    // we need to remove it to avoid cors errors
    let mut frontend_origin = app_config().frontend_url.to_string();
    frontend_origin.pop_if_is('/');

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_origin(
            frontend_origin
                .parse::<HeaderValue>()
                .expect("failed to parse CORS allowed origins"),
        )
        .allow_credentials(true)
        .allow_headers([header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE]);

    let tracing_layer = TraceLayer::new_for_http()
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!("request: {} {}", request.method(), request.uri().path())
        })
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let global_middlewares = ServiceBuilder::new().layer(tracing_layer).layer(cors);

    Router::new()
        .merge(open_api::create_openapi_router())
        .route("/healthcheck", get(healthcheck))
        .route("/", get(catalog::routes::index))
        .route("/catalog", get(catalog::routes::catalog_all))
        .route("/catalog/:brand_slug", get(catalog::routes::catalog_by_brand))
        .route("/car/:slug", get(catalog::routes::car_detail))
        .nest("/brand", brand::routes::create_router())
        .nest("/listing", listing::routes::create_router())
        .nest("/transmission", reference::routes::transmission_router())
        .nest("/drive-type", reference::routes::drive_type_router())
        .nest("/fuel-type", reference::routes::fuel_type_router())
        .layer(global_middlewares)
        .with_state(state)
}

#[utoipa::path(
    get,
    tag = "meta",
    path = "/healthcheck",
    responses((status = OK)),
)]
pub async fn healthcheck() -> StatusCode {
    StatusCode::OK
}
