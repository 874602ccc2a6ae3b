pub mod brand;
pub mod drive_type;
pub mod fuel_type;
pub mod listing_image;
pub mod transmission;
pub mod vehicle_listing;
