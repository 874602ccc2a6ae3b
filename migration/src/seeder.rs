use convert_case::{Case, Casing};
use entity::{brand, drive_type, fuel_type, transmission, vehicle_listing};
use fake::{faker, Fake};
use rand::{seq::SliceRandom, Rng};
use rust_decimal::Decimal;
use sea_orm_migration::{
    sea_orm::{ActiveModelTrait, DatabaseTransaction, Set},
    DbErr,
};

const TRANSMISSIONS: [&str; 4] = ["Автомат", "Механика", "Робот", "Вариатор"];

const DRIVE_TYPES: [&str; 3] = ["Передний", "Задний", "Полный"];

/// label and whether vehicles of this fuel type have a combustion engine
const FUEL_TYPES: [(&str, bool); 4] = [
    ("Бензин", true),
    ("Дизель", true),
    ("Гибрид", true),
    ("Электро", false),
];

const BRANDS: [&str; 6] = ["Toyota", "Honda", "BMW", "Audi", "Kia", "Lada"];

/// Reference rows every seeded listing picks from
pub struct ReferenceData {
    pub transmissions: Vec<transmission::Model>,
    pub drive_types: Vec<drive_type::Model>,
    pub fuel_types: Vec<fuel_type::Model>,
}

pub async fn reference_data(db: &DatabaseTransaction) -> Result<ReferenceData, DbErr> {
    let mut transmissions = vec![];
    let mut drive_types = vec![];
    let mut fuel_types = vec![];

    for label in TRANSMISSIONS {
        let t = transmission::ActiveModel {
            label: Set(String::from(label)),
            ..Default::default()
        }
        .insert(db)
        .await?;

        transmissions.push(t);
    }

    for label in DRIVE_TYPES {
        let d = drive_type::ActiveModel {
            label: Set(String::from(label)),
            ..Default::default()
        }
        .insert(db)
        .await?;

        drive_types.push(d);
    }

    for (label, requires_engine_volume) in FUEL_TYPES {
        let f = fuel_type::ActiveModel {
            label: Set(String::from(label)),
            requires_engine_volume: Set(requires_engine_volume),
            ..Default::default()
        }
        .insert(db)
        .await?;

        fuel_types.push(f);
    }

    Ok(ReferenceData {
        transmissions,
        drive_types,
        fuel_types,
    })
}

pub async fn brands(db: &DatabaseTransaction) -> Result<Vec<brand::Model>, DbErr> {
    let mut created = vec![];

    for name in BRANDS {
        let b = brand::ActiveModel {
            name: Set(String::from(name)),
            slug: Set(name.to_case(Case::Kebab)),
            logo: Set(Some(format!("brands-logo/{}.png", name.to_case(Case::Kebab)))),
            ..Default::default()
        }
        .insert(db)
        .await?;

        created.push(b);
    }

    Ok(created)
}

pub async fn listing(
    db: &DatabaseTransaction,
    brand: &brand::Model,
    refs: &ReferenceData,
) -> Result<vehicle_listing::Model, DbErr> {
    let active_model = {
        let mut rng = rand::thread_rng();

        let transmission = refs.transmissions.choose(&mut rng).unwrap();
        let drive_type = refs.drive_types.choose(&mut rng).unwrap();
        let fuel_type = refs.fuel_types.choose(&mut rng).unwrap();

        let model_word = faker::lorem::en::Word().fake::<String>();
        let name = format!(
            "{} {} {}",
            brand.name,
            model_word,
            rng.gen_range(100..999)
        );

        let engine_volume = if fuel_type.requires_engine_volume {
            // 1.0 to 6.0 liters, one decimal place
            Decimal::new(rng.gen_range(10..=60), 1)
        } else {
            Decimal::ZERO
        };

        vehicle_listing::ActiveModel {
            brand_id: Set(brand.id),
            slug: Set(name.to_case(Case::Kebab)),
            name: Set(name),
            main_image: Set(Some(format!(
                "vehicle-listing/main/{}.jpeg",
                rng.gen_range(1..9999)
            ))),
            year: Set(rng.gen_range(2000..=2024)),
            mileage: Set(rng.gen_range(0..300_000)),
            transmission_id: Set(transmission.id),
            drive_type_id: Set(drive_type.id),
            fuel_type_id: Set(fuel_type.id),
            engine_volume: Set(Some(engine_volume)),
            horse_power: Set(rng.gen_range(60..800)),
            // 5_000.00 to 150_000.00
            price: Set(Decimal::new(rng.gen_range(500_000..15_000_000), 2)),
            ..Default::default()
        }
    };

    let l = active_model.insert(db).await?;

    Ok(l)
}
