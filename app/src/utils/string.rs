//! see: https://rust-lang.github.io/rfcs/0445-extension-trait-conventions.html

use convert_case::{Case, Casing};

pub trait StringExt {
    fn pop_if_is(&mut self, c: char) -> bool;
}

impl StringExt for String {
    /// removes the last char of the string if its a specific char,
    ///
    /// returns a bool indicating if a char was removed
    fn pop_if_is(&mut self, c: char) -> bool {
        if self.ends_with(c) {
            self.pop();

            return true;
        }

        false
    }
}

/// Derives a URL safe identifier from a human readable name,
/// eg: `"Toyota Corolla"` becomes `"toyota-corolla"`
pub fn slugify(name: &str) -> String {
    name.to_case(Case::Kebab)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_single_words() {
        assert_eq!(slugify("Toyota"), "toyota");
    }

    #[test]
    fn slugify_joins_words_with_dashes() {
        assert_eq!(slugify("Toyota Corolla"), "toyota-corolla");
        assert_eq!(slugify("Land Cruiser 300"), "land-cruiser-300");
    }

    #[test]
    fn slugify_keeps_already_slugged_names() {
        assert_eq!(slugify("corolla-special-edition"), "corolla-special-edition");
    }

    #[test]
    fn pop_if_is_only_removes_matching_last_char() {
        let mut url = String::from("http://localhost:5173/");

        assert!(url.pop_if_is('/'));
        assert_eq!(url, "http://localhost:5173");
        assert!(!url.pop_if_is('/'));
    }
}
