use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_foodgram_user::FoodgramUser, m20251101_000003_recipe::Recipe};

static IDX_FAVORITE_RECIPE_ID: &str = "idx-favorite-recipe_id";
static FK_FAVORITE_USER_ID: &str = "fk-favorite-user_id";
static FK_FAVORITE_RECIPE_ID: &str = "fk-favorite-recipe_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(integer(Favorite::UserId))
                    .col(integer(Favorite::RecipeId))
                    .col(timestamp(Favorite::CreatedAt))
                    .primary_key(Index::create().col(Favorite::UserId).col(Favorite::RecipeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_USER_ID)
                            .from(Favorite::Table, Favorite::UserId)
                            .to(FoodgramUser::Table, FoodgramUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_RECIPE_ID)
                            .from(Favorite::Table, Favorite::RecipeId)
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
                    .name(IDX_FAVORITE_RECIPE_ID)
                    .table(Favorite::Table)
                    .col(Favorite::RecipeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_RECIPE_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorite {
    Table,
    UserId,
    RecipeId,
    CreatedAt,
}
