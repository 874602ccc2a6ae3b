use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// The page fragment the frontend should render for a response
///
/// rendering itself happens client side, the API only selects which
/// template the response context is meant for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Fragment {
    HomeContent,
    Catalog,
    SearchInput,
    SearchButton,
    FilterPanel,
    CarDetail,
}

/// Query flags controlling which catalog fragment is returned, each one
/// is only considered set when its value is exactly `"true"`
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FragmentFlags {
    pub show_search: Option<String>,
    pub reset_search: Option<String>,
    pub show_filters: Option<String>,
}

impl FragmentFlags {
    /// Selects the catalog fragment, flags are mutually exclusive and
    /// checked in priority order: show search, reset search, show filters,
    /// falling back to the listing fragment itself
    pub fn catalog_fragment(&self) -> Fragment {
        if is_set(&self.show_search) {
            return Fragment::SearchInput;
        }

        if is_set(&self.reset_search) {
            return Fragment::SearchButton;
        }

        if is_set(&self.show_filters) {
            return Fragment::FilterPanel;
        }

        Fragment::Catalog
    }
}

fn is_set(flag: &Option<String>) -> bool {
    flag.as_deref() == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag() -> Option<String> {
        Some(String::from("true"))
    }

    #[test]
    fn no_flags_select_the_catalog_fragment() {
        assert_eq!(FragmentFlags::default().catalog_fragment(), Fragment::Catalog);
    }

    #[test]
    fn flags_are_checked_in_priority_order() {
        let flags = FragmentFlags {
            show_search: flag(),
            reset_search: flag(),
            show_filters: flag(),
        };
        assert_eq!(flags.catalog_fragment(), Fragment::SearchInput);

        let flags = FragmentFlags {
            show_search: None,
            reset_search: flag(),
            show_filters: flag(),
        };
        assert_eq!(flags.catalog_fragment(), Fragment::SearchButton);

        let flags = FragmentFlags {
            show_search: None,
            reset_search: None,
            show_filters: flag(),
        };
        assert_eq!(flags.catalog_fragment(), Fragment::FilterPanel);
    }

    #[test]
    fn only_the_literal_true_value_sets_a_flag() {
        let flags = FragmentFlags {
            show_search: Some(String::from("1")),
            reset_search: Some(String::from("yes")),
            show_filters: Some(String::new()),
        };

        assert_eq!(flags.catalog_fragment(), Fragment::Catalog);
    }
}
