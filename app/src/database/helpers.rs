use sea_orm::{ActiveValue, Set};

/// `Set(value)` when a value is present, `NotSet` otherwise, for building
/// partial updates from DTOs with optional fields
pub fn set_if_some<T>(value: Option<T>) -> ActiveValue<T>
where
    sea_orm::Value: From<T>,
{
    match value {
        Some(v) => Set(v),
        None => ActiveValue::NotSet,
    }
}
