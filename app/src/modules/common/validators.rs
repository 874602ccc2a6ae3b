use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches URL safe slugs, eg: `toyota` or `corolla-special-edition`
    pub static ref REGEX_IS_SLUG: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}
