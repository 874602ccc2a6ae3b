use crate::modules::common::validators::REGEX_IS_SLUG;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrandDto {
    #[validate(length(min = 1, max = 25))]
    pub name: String,

    /// derived from the name when omitted
    #[validate(regex(
        path = "REGEX_IS_SLUG",
        message = "slug must be lowercase alphanumeric words separated by dashes"
    ))]
    pub slug: Option<String>,

    pub logo: Option<String>,
}

/// Renaming a brand never regenerates its slug, so the slug is not
/// updatable here
#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandDto {
    #[validate(length(min = 1, max = 25))]
    pub name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub logo: Option<Option<String>>,
}
