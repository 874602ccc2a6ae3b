use entity::{brand, drive_type, fuel_type, transmission, vehicle_listing};
use migration::Expr;
use rust_decimal::Decimal;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{sea_query::SimpleExpr, ColumnTrait, Condition, QueryFilter, Select};
use serde::Deserialize;
use std::collections::BTreeMap;
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};
use tracing::warn;
use utoipa::IntoParams;
use validator::Validate;

/// Every filterable dimension of the vehicle catalog
///
/// variant names serialize to the query parameter they are read from
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum FilterKey {
    Brand,
    MinPrice,
    MaxPrice,
    MinYear,
    MaxYear,
    Transmission,
    DriveType,
    FuelType,
    MinHorsePower,
}

/// Raw catalog filter values as they arrive on the query string
///
/// all values are optional strings, numeric ones are coerced when the
/// filter is applied, unknown query parameters are dropped by serde
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogFilters {
    /// free text search over listing and brand names
    pub q: Option<String>,
    pub brand: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_year: Option<String>,
    pub max_year: Option<String>,
    pub transmission: Option<String>,
    pub drive_type: Option<String>,
    pub fuel_type: Option<String>,
    pub min_horse_power: Option<String>,
}

impl CatalogFilters {
    fn raw(&self, key: FilterKey) -> Option<&str> {
        let value = match key {
            FilterKey::Brand => &self.brand,
            FilterKey::MinPrice => &self.min_price,
            FilterKey::MaxPrice => &self.max_price,
            FilterKey::MinYear => &self.min_year,
            FilterKey::MaxYear => &self.max_year,
            FilterKey::Transmission => &self.transmission,
            FilterKey::DriveType => &self.drive_type,
            FilterKey::FuelType => &self.fuel_type,
            FilterKey::MinHorsePower => &self.min_horse_power,
        };

        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Narrows a listing query by ANDing one predicate per supplied filter,
    /// plus the free text search when present
    ///
    /// absent and empty values leave the query untouched, malformed numeric
    /// values are dropped rather than failing the request, the query must
    /// already join brand / transmission / drive type / fuel type
    pub fn apply_to(
        &self,
        query: Select<vehicle_listing::Entity>,
    ) -> Select<vehicle_listing::Entity> {
        let mut query = query;

        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            let pattern = format!("%{}%", q);

            query = query.filter(
                Condition::any()
                    .add(
                        Expr::col((vehicle_listing::Entity, vehicle_listing::Column::Name))
                            .ilike(pattern.clone()),
                    )
                    .add(Expr::col((brand::Entity, brand::Column::Name)).ilike(pattern)),
            );
        }

        for key in FilterKey::iter() {
            if let Some(value) = self.raw(key) {
                match predicate(key, value) {
                    Some(p) => query = query.filter(p),
                    None => {
                        let key_name: &'static str = key.into();
                        warn!("ignoring malformed catalog filter {key_name}={value}");
                    }
                }
            }
        }

        query
    }

    /// The value effectively applied for every filter key, `""` for keys
    /// that are unset or were dropped as malformed, used by the frontend
    /// to pre fill the filter controls
    pub fn effective_state(&self) -> BTreeMap<String, String> {
        let mut state: BTreeMap<String, String> = FilterKey::iter()
            .map(|key| {
                let applied = self
                    .raw(key)
                    .filter(|value| predicate(key, value).is_some())
                    .unwrap_or("");

                let key_name: &'static str = key.into();
                (String::from(key_name), String::from(applied))
            })
            .collect();

        state.insert(String::from("q"), self.q.clone().unwrap_or_default());
        state
    }
}

/// The query predicate for a single filter, `None` when the raw value
/// does not coerce to the type the dimension is compared with
fn predicate(key: FilterKey, value: &str) -> Option<SimpleExpr> {
    use vehicle_listing::Column;

    let expr = match key {
        FilterKey::Brand => Expr::col((brand::Entity, brand::Column::Slug)).eq(value),
        FilterKey::MinPrice => Column::Price.gte(value.parse::<Decimal>().ok()?),
        FilterKey::MaxPrice => Column::Price.lte(value.parse::<Decimal>().ok()?),
        FilterKey::MinYear => Column::Year.gte(value.parse::<i16>().ok()?),
        FilterKey::MaxYear => Column::Year.lte(value.parse::<i16>().ok()?),
        FilterKey::Transmission => {
            Expr::col((transmission::Entity, transmission::Column::Label)).eq(value)
        }
        FilterKey::DriveType => {
            Expr::col((drive_type::Entity, drive_type::Column::Label)).eq(value)
        }
        FilterKey::FuelType => Expr::col((fuel_type::Entity, fuel_type::Column::Label)).eq(value),
        FilterKey::MinHorsePower => Column::HorsePower.gte(value.parse::<i32>().ok()?),
    };

    Some(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::repository;
    use sea_orm::{DbBackend, QueryTrait};

    fn sql(filters: &CatalogFilters) -> String {
        filters
            .apply_to(repository::unfiltered())
            .build(DbBackend::Postgres)
            .to_string()
    }

    fn base_sql() -> String {
        repository::unfiltered().build(DbBackend::Postgres).to_string()
    }

    #[test]
    fn absent_and_empty_values_are_noops() {
        let absent = CatalogFilters::default();

        let empty = CatalogFilters {
            q: Some(String::new()),
            brand: Some(String::new()),
            min_price: Some(String::new()),
            max_year: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(sql(&absent), base_sql());
        assert_eq!(sql(&empty), base_sql());
    }

    #[test]
    fn each_supplied_filter_narrows_the_query() {
        let filters = CatalogFilters {
            brand: Some(String::from("toyota")),
            ..Default::default()
        };
        assert!(sql(&filters).contains(r#""brand"."slug" = 'toyota'"#));

        let filters = CatalogFilters {
            min_price: Some(String::from("20000")),
            ..Default::default()
        };
        assert!(sql(&filters).contains(r#""vehicle_listing"."price" >= 20000"#));

        let filters = CatalogFilters {
            max_year: Some(String::from("2015")),
            ..Default::default()
        };
        assert!(sql(&filters).contains(r#""vehicle_listing"."year" <= 2015"#));

        let filters = CatalogFilters {
            transmission: Some(String::from("Автомат")),
            ..Default::default()
        };
        assert!(sql(&filters).contains(r#""transmission"."label" = 'Автомат'"#));

        let filters = CatalogFilters {
            min_horse_power: Some(String::from("150")),
            ..Default::default()
        };
        assert!(sql(&filters).contains(r#""vehicle_listing"."horse_power" >= 150"#));
    }

    #[test]
    fn supplied_filters_compose_by_conjunction() {
        let filters = CatalogFilters {
            brand: Some(String::from("toyota")),
            min_price: Some(String::from("10000")),
            max_year: Some(String::from("2020")),
            ..Default::default()
        };

        let sql = sql(&filters);

        assert!(sql.contains(r#""brand"."slug" = 'toyota'"#));
        assert!(sql.contains(r#""vehicle_listing"."price" >= 10000"#));
        assert!(sql.contains(r#""vehicle_listing"."year" <= 2020"#));
        assert_eq!(sql.matches(" AND ").count(), 2);
    }

    #[test]
    fn query_string_parameter_order_is_irrelevant() {
        let a: CatalogFilters =
            serde_urlencoded::from_str("brand=toyota&min_price=10000&max_year=2020").unwrap();
        let b: CatalogFilters =
            serde_urlencoded::from_str("max_year=2020&brand=toyota&min_price=10000").unwrap();

        assert_eq!(sql(&a), sql(&b));
    }

    #[test]
    fn unknown_query_parameters_are_ignored() {
        let filters: CatalogFilters =
            serde_urlencoded::from_str("color=red&brand=bmw&sort=asc").unwrap();

        assert_eq!(filters.brand.as_deref(), Some("bmw"));
        assert!(sql(&filters).contains(r#""brand"."slug" = 'bmw'"#));
    }

    #[test]
    fn malformed_numeric_values_are_dropped() {
        let filters = CatalogFilters {
            min_price: Some(String::from("cheap")),
            min_year: Some(String::from("201x")),
            ..Default::default()
        };

        assert_eq!(sql(&filters), base_sql());
        assert_eq!(filters.effective_state()["min_price"], "");
        assert_eq!(filters.effective_state()["min_year"], "");
    }

    #[test]
    fn search_matches_listing_name_or_brand_name_case_insensitively() {
        let filters = CatalogFilters {
            q: Some(String::from("corolla")),
            ..Default::default()
        };

        let sql = sql(&filters);

        assert!(sql.contains(r#""vehicle_listing"."name" ILIKE '%corolla%'"#));
        assert!(sql.contains(r#""brand"."name" ILIKE '%corolla%'"#));
        assert!(sql.contains(" OR "));
    }

    #[test]
    fn effective_state_echoes_every_key() {
        let filters = CatalogFilters {
            q: Some(String::from("corolla")),
            brand: Some(String::from("toyota")),
            min_price: Some(String::from("10000")),
            ..Default::default()
        };

        let state = filters.effective_state();

        assert_eq!(state["q"], "corolla");
        assert_eq!(state["brand"], "toyota");
        assert_eq!(state["min_price"], "10000");
        assert_eq!(state["max_price"], "");
        assert_eq!(state["min_year"], "");
        assert_eq!(state["max_year"], "");
        assert_eq!(state["transmission"], "");
        assert_eq!(state["drive_type"], "");
        assert_eq!(state["fuel_type"], "");
        assert_eq!(state["min_horse_power"], "");
    }
}
