use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let statement = r#"
        create table "brand" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "name" varchar(25) not null,
            "slug" varchar(25) not null,
            "logo" varchar(255) null
        );

        alter table
            "brand"
        add
            constraint "brand_name_unique" unique ("name");

        alter table
            "brand"
        add
            constraint "brand_slug_unique" unique ("slug");

        create table "transmission" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "label" varchar(35) not null
        );

        create table "drive_type" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "label" varchar(35) not null
        );

        create table "fuel_type" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "label" varchar(35) not null,
            "requires_engine_volume" boolean not null default true
        );

        create table "vehicle_listing" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "updated_at" timestamptz(0) not null default now(),
            "brand_id" int not null,
            "name" varchar(125) not null,
            "slug" varchar(125) not null,
            "main_image" varchar(255) null,
            "year" smallint not null,
            "mileage" int not null default 0,
            "transmission_id" int not null,
            "drive_type_id" int not null,
            "fuel_type_id" int not null,
            "engine_volume" numeric(3, 1) null,
            "horse_power" int not null default 0,
            "price" numeric(12, 2) not null default 0
        );

        alter table
            "vehicle_listing"
        add
            constraint "vehicle_listing_name_unique" unique ("name");

        alter table
            "vehicle_listing"
        add
            constraint "vehicle_listing_slug_unique" unique ("slug");

        alter table
            "vehicle_listing"
        add
            constraint "vehicle_listing_brand_id_foreign" foreign key ("brand_id") references "brand" ("id") on update cascade on delete cascade;

        alter table
            "vehicle_listing"
        add
            constraint "vehicle_listing_transmission_id_foreign" foreign key ("transmission_id") references "transmission" ("id") on update cascade on delete cascade;

        alter table
            "vehicle_listing"
        add
            constraint "vehicle_listing_drive_type_id_foreign" foreign key ("drive_type_id") references "drive_type" ("id") on update cascade on delete cascade;

        alter table
            "vehicle_listing"
        add
            constraint "vehicle_listing_fuel_type_id_foreign" foreign key ("fuel_type_id") references "fuel_type" ("id") on update cascade on delete cascade;

        alter table
            "vehicle_listing"
        add
            constraint "vehicle_listing_mileage_non_negative" check ("mileage" >= 0);

        alter table
            "vehicle_listing"
        add
            constraint "vehicle_listing_horse_power_non_negative" check ("horse_power" >= 0);

        alter table
            "vehicle_listing"
        add
            constraint "vehicle_listing_price_non_negative" check ("price" >= 0);

        alter table
            "vehicle_listing"
        add
            constraint "vehicle_listing_engine_volume_range" check (
                "engine_volume" is null
                or ("engine_volume" >= 0 and "engine_volume" <= 12.5)
            );

        create index "vehicle_listing_year_index" on "vehicle_listing" ("year");

        create index "vehicle_listing_created_at_index" on "vehicle_listing" ("created_at" desc);

        create table "listing_image" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "vehicle_listing_id" int not null,
            "image" varchar(255) not null
        );

        alter table
            "listing_image"
        add
            constraint "listing_image_vehicle_listing_id_foreign" foreign key ("vehicle_listing_id") references "vehicle_listing" ("id") on update cascade on delete cascade;
        "#;

        db.execute_unprepared(statement).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r#"
            drop table "listing_image";
            drop table "vehicle_listing";
            drop table "fuel_type";
            drop table "drive_type";
            drop table "transmission";
            drop table "brand";
            "#,
        )
        .await?;

        Ok(())
    }
}
