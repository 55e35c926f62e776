//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Name of the unique index on the ingredient (name, measurement_unit) pair.
///
/// Matches the index created by the production migration.
pub static IDX_INGREDIENT_NAME_UNIT: &str = "idx-ingredient-name-measurement_unit";

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,
    include_recipe_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    ingredients: Vec<(String, String)>, // (name, measurement_unit)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            include_recipe_tables: false,
            users: Vec::new(),
            ingredients: Vec::new(),
        }
    }

    /// Add user-related tables to the test database.
    ///
    /// Creates the FoodgramUser and Follow tables, which is all that registration,
    /// login and subscriptions without recipes require.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add every table of the schema to the test database.
    ///
    /// Creates FoodgramUser, Ingredient, Recipe, RecipeIngredient, Favorite, ShoppingCart and
    /// Follow in foreign key order, plus the unique (name, measurement_unit) index on
    /// Ingredient.
    pub fn with_recipe_tables(mut self) -> Self {
        self.include_recipe_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use foodgram_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), foodgram_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(FoodgramUser)
    ///     .with_table(Ingredient)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock user into the database.
    ///
    /// The email is derived from the username (`<username>@example.com`).
    pub fn with_mock_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Insert an ingredient into the catalog.
    ///
    /// Requires `with_recipe_tables` or a custom Ingredient table.
    pub fn with_ingredient(
        mut self,
        name: impl Into<String>,
        measurement_unit: impl Into<String>,
    ) -> Self {
        self.ingredients
            .push((name.into(), measurement_unit.into()));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (schema groups first, then custom tables)
    /// 2. Creates indexes that entities cannot express
    /// 3. Inserts database fixtures (users, then ingredients)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        // 1. Create tables
        let mut all_tables = Vec::new();
        let mut all_indexes: Vec<IndexCreateStatement> = Vec::new();

        if self.include_recipe_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::FoodgramUser),
                schema.create_table_from_entity(entity::prelude::Ingredient),
                schema.create_table_from_entity(entity::prelude::Recipe),
                schema.create_table_from_entity(entity::prelude::RecipeIngredient),
                schema.create_table_from_entity(entity::prelude::Favorite),
                schema.create_table_from_entity(entity::prelude::ShoppingCart),
                schema.create_table_from_entity(entity::prelude::Follow),
            ]);

            all_indexes.push(
                Index::create()
                    .name(IDX_INGREDIENT_NAME_UNIT)
                    .table(entity::prelude::Ingredient)
                    .col(entity::ingredient::Column::Name)
                    .col(entity::ingredient::Column::MeasurementUnit)
                    .unique()
                    .to_owned(),
            );
        } else if self.include_user_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::FoodgramUser),
                schema.create_table_from_entity(entity::prelude::Follow),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Create indexes
        setup.with_indexes(all_indexes).await?;

        // 3. Insert database fixtures
        for username in self.users {
            setup.user().insert_mock_user(&username).await?;
        }

        for (name, measurement_unit) in self.ingredients {
            setup
                .recipe()
                .insert_ingredient(&name, &measurement_unit)
                .await?;
        }

        Ok(setup)
    }
}
