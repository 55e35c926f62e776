use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000002_ingredient::Ingredient, m20251101_000003_recipe::Recipe};

static IDX_RECIPE_INGREDIENT_INGREDIENT_ID: &str = "idx-recipe_ingredient-ingredient_id";
static FK_RECIPE_INGREDIENT_RECIPE_ID: &str = "fk-recipe_ingredient-recipe_id";
static FK_RECIPE_INGREDIENT_INGREDIENT_ID: &str = "fk-recipe_ingredient-ingredient_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecipeIngredient::Table)
                    .if_not_exists()
                    .col(integer(RecipeIngredient::RecipeId))
                    .col(integer(RecipeIngredient::IngredientId))
                    .col(decimal_len(RecipeIngredient::Amount, 7, 2))
                    .primary_key(
                        Index::create()
                            .col(RecipeIngredient::RecipeId)
                            .col(RecipeIngredient::IngredientId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RECIPE_INGREDIENT_RECIPE_ID)
                            .from(RecipeIngredient::Table, RecipeIngredient::RecipeId)
                            .to(Recipe::Table, Recipe::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RECIPE_INGREDIENT_INGREDIENT_ID)
                            .from(RecipeIngredient::Table, RecipeIngredient::IngredientId)
                            .to(Ingredient::Table, Ingredient::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECIPE_INGREDIENT_INGREDIENT_ID)
                    .table(RecipeIngredient::Table)
                    .col(RecipeIngredient::IngredientId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECIPE_INGREDIENT_INGREDIENT_ID)
                    .table(RecipeIngredient::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RecipeIngredient::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RecipeIngredient {
    Table,
    RecipeId,
    IngredientId,
    Amount,
}
