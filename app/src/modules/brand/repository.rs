use super::dto::{CreateBrandDto, UpdateBrandDto};
use crate::{
    database::{error::DbError, helpers::set_if_some},
    utils::string::slugify,
};
use entity::brand;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Slug for a new brand: the explicit one when given, otherwise derived
/// from the name, this happens only at creation so later renames never
/// change an existing slug
fn resolve_slug(dto: &CreateBrandDto) -> String {
    dto.slug.clone().unwrap_or_else(|| slugify(&dto.name))
}

pub async fn create_brand(
    conn: &DatabaseConnection,
    dto: &CreateBrandDto,
) -> Result<brand::Model, DbError> {
    let brand = brand::ActiveModel {
        name: Set(dto.name.clone()),
        slug: Set(resolve_slug(dto)),
        logo: Set(dto.logo.clone()),
        ..Default::default()
    };

    Ok(brand.insert(conn).await?)
}

/// Updates a brand, its slug is kept as is even when the name changes
pub async fn update_brand(
    conn: &DatabaseConnection,
    brand: brand::Model,
    dto: UpdateBrandDto,
) -> Result<brand::Model, DbError> {
    let mut b: brand::ActiveModel = brand.into();

    b.name = set_if_some(dto.name);
    b.logo = set_if_some(dto.logo);

    Ok(b.update(conn).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DbBackend, MockDatabase};

    fn create_dto(name: &str, slug: Option<&str>) -> CreateBrandDto {
        CreateBrandDto {
            name: String::from(name),
            slug: slug.map(String::from),
            logo: None,
        }
    }

    #[test]
    fn brand_slug_is_derived_from_the_name_when_omitted() {
        assert_eq!(resolve_slug(&create_dto("Toyota", None)), "toyota");
        assert_eq!(resolve_slug(&create_dto("Great Wall", None)), "great-wall");
    }

    #[test]
    fn an_explicit_brand_slug_is_kept_as_is() {
        assert_eq!(
            resolve_slug(&create_dto("Toyota", Some("toyota-jp"))),
            "toyota-jp"
        );
    }

    #[tokio::test]
    async fn renaming_a_brand_does_not_touch_its_slug() {
        let existing = brand::Model {
            id: 1,
            created_at: Utc::now(),
            name: String::from("Toyota"),
            slug: String::from("toyota"),
            logo: None,
        };

        let renamed = brand::Model {
            name: String::from("Toyota Motor"),
            ..existing.clone()
        };

        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![renamed]])
            .into_connection();

        let dto = UpdateBrandDto {
            name: Some(String::from("Toyota Motor")),
            logo: None,
        };

        update_brand(&db, existing, dto)
            .await
            .unwrap_or_else(|_| panic!("expected the update to succeed"));

        let update_statement = format!("{:?}", db.into_transaction_log());

        assert!(update_statement.contains(r#""name""#));
        assert!(!update_statement.contains(r#""slug""#));
    }
}
