use sea_orm_migration::{prelude::*, sea_orm::TransactionTrait};

use crate::seeder;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let transaction = db.begin().await?;

        let refs = seeder::reference_data(&transaction).await?;

        for brand in seeder::brands(&transaction).await? {
            for _ in 0..4 {
                seeder::listing(&transaction, &brand, &refs).await?;
            }
        }

        transaction.commit().await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // brand and reference deletes cascade to listings and images
        db.execute_unprepared(
            r#"
            delete from "brand";
            delete from "fuel_type";
            delete from "drive_type";
            delete from "transmission";
            "#,
        )
        .await?;

        Ok(())
    }
}
