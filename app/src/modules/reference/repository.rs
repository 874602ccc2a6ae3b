use super::dto::{CreateDriveTypeDto, CreateFuelTypeDto, CreateTransmissionDto};
use crate::database::error::DbError;
use entity::{drive_type, fuel_type, transmission};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Labels that name an electric powertrain, these get
/// `requires_engine_volume = false` when the dto does not say otherwise
const ELECTRIC_LABELS: &[&str] = &["электро", "electric"];

fn is_electric_label(label: &str) -> bool {
    ELECTRIC_LABELS.contains(&label.to_lowercase().as_str())
}

pub async fn create_transmission(
    conn: &DatabaseConnection,
    dto: &CreateTransmissionDto,
) -> Result<transmission::Model, DbError> {
    let transmission = transmission::ActiveModel {
        label: Set(dto.label.clone()),
        ..Default::default()
    };

    Ok(transmission.insert(conn).await?)
}

pub async fn create_drive_type(
    conn: &DatabaseConnection,
    dto: &CreateDriveTypeDto,
) -> Result<drive_type::Model, DbError> {
    let drive_type = drive_type::ActiveModel {
        label: Set(dto.label.clone()),
        ..Default::default()
    };

    Ok(drive_type.insert(conn).await?)
}

pub async fn create_fuel_type(
    conn: &DatabaseConnection,
    dto: &CreateFuelTypeDto,
) -> Result<fuel_type::Model, DbError> {
    let requires_engine_volume = dto
        .requires_engine_volume
        .unwrap_or_else(|| !is_electric_label(&dto.label));

    let fuel_type = fuel_type::ActiveModel {
        label: Set(dto.label.clone()),
        requires_engine_volume: Set(requires_engine_volume),
        ..Default::default()
    };

    Ok(fuel_type.insert(conn).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn electric_labels_are_recognized_case_insensitively() {
        assert!(is_electric_label("Электро"));
        assert!(is_electric_label("электро"));
        assert!(is_electric_label("Electric"));

        assert!(!is_electric_label("Бензин"));
        assert!(!is_electric_label("Дизель"));
        assert!(!is_electric_label("Гибрид"));
    }
}
