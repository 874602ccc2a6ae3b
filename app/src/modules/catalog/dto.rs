use super::fragment::Fragment;
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Response envelope for browser facing routes, the frontend renders
/// `context` with the template named by `fragment`, wrapping it in the
/// page shell when `full_page` is set
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[aliases(
    HomePage = FragmentResponse<HomeContext>,
    CatalogPage = FragmentResponse<CatalogContext>,
    CarDetailPage = FragmentResponse<CarDetailContext>
)]
pub struct FragmentResponse<T: for<'_s> ToSchema<'_s>> {
    pub fragment: Fragment,

    /// whether this is a full navigation rather than a partial page update
    pub full_page: bool,

    pub context: T,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeContext {
    pub brands: Vec<entity::brand::Model>,
    pub current_brand: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogContext {
    pub cars: Vec<entity::vehicle_listing::Model>,
    pub brands: Vec<entity::brand::Model>,
    pub transmissions: Vec<entity::transmission::Model>,
    pub drive_types: Vec<entity::drive_type::Model>,
    pub fuel_types: Vec<entity::fuel_type::Model>,

    /// slug of the brand the catalog is narrowed to, if any
    pub current_brand: Option<String>,

    /// value in effect for every filter key, `""` for unset ones,
    /// used to pre fill the filter controls
    pub filter_state: BTreeMap<String, String>,

    pub search_query: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarDetailContext {
    pub car: entity::vehicle_listing::Model,

    /// supplementary photos, the primary one is on the listing itself
    pub images: Vec<entity::listing_image::Model>,

    /// up to 4 other listings of the same brand
    pub related_cars: Vec<entity::vehicle_listing::Model>,

    pub brands: Vec<entity::brand::Model>,
    pub current_brand: Option<String>,
}
