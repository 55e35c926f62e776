/// Creates a [`TestContext`](crate::TestContext) with tables for the provided entities.
///
/// ```ignore
/// let test = test_setup_with_tables!(entity::prelude::FoodgramUser)?;
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates a [`TestContext`](crate::TestContext) with every table used by recipes,
/// relation toggles and shopping lists.
#[macro_export]
macro_rules! test_setup_with_recipe_tables {
    () => {{
        $crate::TestBuilder::new().with_recipe_tables().build().await
    }};
}
