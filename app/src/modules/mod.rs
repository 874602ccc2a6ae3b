pub mod brand;
pub mod catalog;
pub mod common;
pub mod listing;
pub mod reference;
