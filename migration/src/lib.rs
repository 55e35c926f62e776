pub use sea_orm_migration::prelude::*;

mod m20251101_000001_foodgram_user;
mod m20251101_000002_ingredient;
mod m20251101_000003_recipe;
mod m20251101_000004_recipe_ingredient;
mod m20251101_000005_favorite;
mod m20251101_000006_shopping_cart;
mod m20251101_000007_follow;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_foodgram_user::Migration),
            Box::new(m20251101_000002_ingredient::Migration),
            Box::new(m20251101_000003_recipe::Migration),
            Box::new(m20251101_000004_recipe_ingredient::Migration),
            Box::new(m20251101_000005_favorite::Migration),
            Box::new(m20251101_000006_shopping_cart::Migration),
            Box::new(m20251101_000007_follow::Migration),
        ]
    }
}
