use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_foodgram_user::FoodgramUser, m20251101_000003_recipe::Recipe};

static IDX_SHOPPING_CART_RECIPE_ID: &str = "idx-shopping_cart-recipe_id";
static FK_SHOPPING_CART_USER_ID: &str = "fk-shopping_cart-user_id";
static FK_SHOPPING_CART_RECIPE_ID: &str = "fk-shopping_cart-recipe_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShoppingCart::Table)
                    .if_not_exists()
                    .col(integer(ShoppingCart::UserId))
                    .col(integer(ShoppingCart::RecipeId))
                    .col(timestamp(ShoppingCart::CreatedAt))
                    .primary_key(Index::create().col(ShoppingCart::UserId).col(ShoppingCart::RecipeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SHOPPING_CART_USER_ID)
                            .from(ShoppingCart::Table, ShoppingCart::UserId)
                            .to(FoodgramUser::Table, FoodgramUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SHOPPING_CART_RECIPE_ID)
                            .from(ShoppingCart::Table, ShoppingCart::RecipeId)
                            .to(Recipe::Table, Recipe::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHOPPING_CART_RECIPE_ID)
                    .table(ShoppingCart::Table)
                    .col(ShoppingCart::RecipeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHOPPING_CART_RECIPE_ID)
                    .table(ShoppingCart::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ShoppingCart::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ShoppingCart {
    Table,
    UserId,
    RecipeId,
    CreatedAt,
}
