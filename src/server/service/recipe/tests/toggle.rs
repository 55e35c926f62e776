use crate::server::{
    error::{recipe::RecipeError, relation::RelationError, Error},
    service::recipe::RecipeService,
};

use super::*;

/// Expect favorite add to return the summary, a second add to conflict and remove twice
/// to report the missing pair
#[tokio::test]
async fn favorite_round_trip() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let alice = test.user().insert_mock_user("alice").await?;
    let bob = test.user().insert_mock_user("bob").await?;
    let toast = test.recipe().insert_recipe(alice.id, "Toast").await?;

    let recipe_service = RecipeService::new(&test.db);

    let summary = recipe_service.add_favorite(bob.id, toast.id).await.unwrap();
    assert_eq!(summary.id, toast.id);
    assert_eq!(summary.name, "Toast");
    assert!(recipe_service
        .get(Some(bob.id), toast.id)
        .await
        .unwrap()
        .is_favorited);

    assert!(matches!(
        recipe_service.add_favorite(bob.id, toast.id).await,
        Err(Error::RelationError(RelationError::AlreadyPresent { .. }))
    ));

    assert!(recipe_service.remove_favorite(bob.id, toast.id).await.is_ok());
    assert!(matches!(
        recipe_service.remove_favorite(bob.id, toast.id).await,
        Err(Error::RelationError(RelationError::NotPresent { .. }))
    ));

    Ok(())
}

#[tokio::test]
async fn cart_round_trip() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let alice = test.user().insert_mock_user("alice").await?;
    let toast = test.recipe().insert_recipe(alice.id, "Toast").await?;

    let recipe_service = RecipeService::new(&test.db);

    assert!(recipe_service.add_to_cart(alice.id, toast.id).await.is_ok());
    assert!(recipe_service
        .get(Some(alice.id), toast.id)
        .await
        .unwrap()
        .is_in_shopping_cart);
    assert!(recipe_service
        .remove_from_cart(alice.id, toast.id)
        .await
        .is_ok());
    assert!(!recipe_service
        .get(Some(alice.id), toast.id)
        .await
        .unwrap()
        .is_in_shopping_cart);

    Ok(())
}

/// Expect toggles on a missing recipe to report the recipe, not the pair
#[tokio::test]
async fn fails_for_nonexistent_recipe() -> Result<(), TestError> {
    let test = test_setup_with_recipe_tables!()?;
    let alice = test.user().insert_mock_user("alice").await?;

    let recipe_service = RecipeService::new(&test.db);

    assert!(matches!(
        recipe_service.add_to_cart(alice.id, 1).await,
        Err(Error::RecipeError(RecipeError::RecipeNotFound(1)))
    ));
    assert!(matches!(
        recipe_service.remove_favorite(alice.id, 1).await,
        Err(Error::RecipeError(RecipeError::RecipeNotFound(1)))
    ));

    Ok(())
}
