pub use sea_orm_migration::prelude::*;

mod m20250802_101500_init;
mod m20250803_221340_seed_dev_data;
mod seeder;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250802_101500_init::Migration),
            Box::new(m20250803_221340_seed_dev_data::Migration),
        ]
    }
}
