use crate::server::{
    error::{recipe::RecipeError, Error},
    service::recipe::RecipeService,
};

use super::*;

/// Expect scalars and ingredients to be overwritten while an omitted image is kept
#[tokio::test]
async fn overwrites_recipe() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let alice = test.user().insert_mock_user("alice").await?;
    let milk = test.recipe().insert_ingredient("milk", "ml").await?;
    let flour = test.recipe().insert_ingredient("flour", "g").await?;

    let recipe_service = RecipeService::new(&test.db);
    let mut original = write_dto("Pancakes", &[(milk.id, 250)]);
    original.image = Some("recipes/pancakes.png".to_string());
    let created = recipe_service.create(alice.id, original).await.unwrap();

    let mut changes = write_dto("Crepes", &[(flour.id, 100)]);
    changes.cooking_time = 30;
    let result = recipe_service.update(alice.id, created.id, changes).await;

    assert!(result.is_ok());
    let updated = result.unwrap();
    assert_eq!(updated.name, "Crepes");
    assert_eq!(updated.cooking_time, 30);
    assert_eq!(updated.image.as_deref(), Some("recipes/pancakes.png"));
    assert_eq!(updated.ingredients.len(), 1);
    assert_eq!(updated.ingredients[0].id, flour.id);

    Ok(())
}

#[tokio::test]
async fn fails_for_other_user() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let alice = test.user().insert_mock_user("alice").await?;
    let bob = test.user().insert_mock_user("bob").await?;
    let milk = test.recipe().insert_ingredient("milk", "ml").await?;
    let toast = test
        .recipe()
        .insert_mock_recipe(alice.id, "Toast", &[(milk.id, 10)])
        .await?;

    let recipe_service = RecipeService::new(&test.db);
    let result = recipe_service
        .update(bob.id, toast.id, write_dto("Bob's toast", &[(milk.id, 20)]))
        .await;

    assert!(matches!(
        result,
        Err(Error::RecipeError(RecipeError::NotAuthor { .. }))
    ));
    let unchanged = recipe_service.get(None, toast.id).await.unwrap();
    assert_eq!(unchanged.name, "Toast");

    Ok(())
}

#[tokio::test]
async fn fails_for_nonexistent_recipe() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let alice = test.user().insert_mock_user("alice").await?;
    let milk = test.recipe().insert_ingredient("milk", "ml").await?;

    let recipe_service = RecipeService::new(&test.db);
    let result = recipe_service
        .update(alice.id, 1, write_dto("Toast", &[(milk.id, 20)]))
        .await;

    assert!(matches!(
        result,
        Err(Error::RecipeError(RecipeError::RecipeNotFound(1)))
    ));

    Ok(())
}

/// Expect a failed ingredient replace to roll back the scalar update as well
#[tokio::test]
async fn unknown_ingredient_keeps_previous_state() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let alice = test.user().insert_mock_user("alice").await?;
    let milk = test.recipe().insert_ingredient("milk", "ml").await?;
    let toast = test
        .recipe()
        .insert_mock_recipe(alice.id, "Toast", &[(milk.id, 10)])
        .await?;

    let recipe_service = RecipeService::new(&test.db);
    let result = recipe_service
        .update(alice.id, toast.id, write_dto("Renamed", &[(milk.id + 1, 20)]))
        .await;

    assert!(matches!(
        result,
        Err(Error::RecipeError(RecipeError::UnknownIngredient(_)))
    ));
    let unchanged = recipe_service.get(None, toast.id).await.unwrap();
    assert_eq!(unchanged.name, "Toast");
    assert_eq!(unchanged.ingredients.len(), 1);
    assert_eq!(unchanged.ingredients[0].id, milk.id);

    Ok(())
}
