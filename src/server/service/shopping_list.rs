//! Shopping list aggregation over the recipes in a user's cart.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};

use crate::server::{
    data::{
        recipe::RecipeRepository, recipe_ingredient::RecipeIngredientRepository,
        relation::RelationRepository,
    },
    error::Error,
};

/// Total amount of one ingredient across every recipe in the cart
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShoppingListItem {
    pub name: String,
    pub measurement_unit: String,
    pub total: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartRecipe {
    pub name: String,
    pub author_username: String,
}

/// Both sections of the downloadable shopping list, read from one snapshot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShoppingList {
    pub items: Vec<ShoppingListItem>,
    pub recipes: Vec<CartRecipe>,
}

pub struct ShoppingListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShoppingListService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sums the ingredients of every recipe in the user's cart
    ///
    /// Ingredients are grouped by (name, measurement_unit) and sorted alphabetically by name
    /// ignoring case, then by unit. An empty cart produces an empty list.
    ///
    /// # Returns
    /// - `Ok(Vec<ShoppingListItem>)` - One entry per distinct ingredient
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn build_report(&self, user_id: i32) -> Result<Vec<ShoppingListItem>, Error> {
        let txn = self.begin_snapshot().await?;

        let recipe_ids = cart_recipe_ids(&txn, user_id).await?;
        let items = report_for(&txn, &recipe_ids).await?;

        txn.commit().await?;

        Ok(items)
    }

    /// Builds the ingredient totals and the list of cart recipes with their authors
    ///
    /// Both sections are derived from the same set of cart recipes inside one repeatable
    /// read transaction, so a concurrent cart change shows up in both or in neither.
    pub async fn shopping_list(&self, user_id: i32) -> Result<ShoppingList, Error> {
        let txn = self.begin_snapshot().await?;

        let recipe_ids = cart_recipe_ids(&txn, user_id).await?;
        let items = report_for(&txn, &recipe_ids).await?;
        let recipes = recipes_for(&txn, &recipe_ids).await?;

        txn.commit().await?;

        Ok(ShoppingList { items, recipes })
    }

    async fn begin_snapshot(&self) -> Result<DatabaseTransaction, Error> {
        Ok(self
            .db
            .begin_with_config(Some(IsolationLevel::RepeatableRead), None)
            .await?)
    }
}

async fn cart_recipe_ids<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<Vec<i32>, Error> {
    Ok(RelationRepository::<_, entity::prelude::ShoppingCart>::new(db)
        .object_ids(user_id)
        .await?)
}

async fn report_for<C: ConnectionTrait>(
    db: &C,
    recipe_ids: &[i32],
) -> Result<Vec<ShoppingListItem>, Error> {
    let rows = RecipeIngredientRepository::new(db)
        .get_amounts_for_recipes(recipe_ids)
        .await?;

    Ok(aggregate(rows))
}

/// Cart recipes with their author, newest first
async fn recipes_for<C: ConnectionTrait>(
    db: &C,
    recipe_ids: &[i32],
) -> Result<Vec<CartRecipe>, Error> {
    let recipes = RecipeRepository::new(db)
        .get_many_with_authors(recipe_ids)
        .await?;

    recipes
        .into_iter()
        .map(|(recipe, author)| {
            let author = author.ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to find author ID {} of recipe ID {}",
                    recipe.author_id, recipe.id
                ))
            })?;

            Ok(CartRecipe {
                name: recipe.name,
                author_username: author.username,
            })
        })
        .collect()
}

/// Groups `(name, measurement_unit, amount)` rows by ingredient and sums the amounts
///
/// Entries are ordered alphabetically by name ignoring case, ties keep name then unit order.
pub fn aggregate(
    rows: impl IntoIterator<Item = (String, String, Decimal)>,
) -> Vec<ShoppingListItem> {
    let mut totals: BTreeMap<(String, String), Decimal> = BTreeMap::new();

    for (name, measurement_unit, amount) in rows {
        *totals.entry((name, measurement_unit)).or_default() += amount;
    }

    let mut items: Vec<ShoppingListItem> = totals
        .into_iter()
        .map(|((name, measurement_unit), total)| ShoppingListItem {
            name,
            measurement_unit,
            total,
        })
        .collect();

    // Stable, so equal keys stay in (name, unit) order from the map
    items.sort_by_cached_key(|item| name_sort_key(&item.name));

    items
}

/// Case-insensitive ordering key for ingredient names
///
/// `ё` is ordered together with `е`, as in Russian dictionaries.
fn name_sort_key(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ё' { 'е' } else { c })
        .collect()
}
