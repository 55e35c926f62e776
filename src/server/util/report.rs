//! Plain text rendering of a user's shopping list.

use chrono::NaiveDateTime;

use crate::server::service::shopping_list::{CartRecipe, ShoppingListItem};

/// Renders the downloadable shopping list document.
///
/// Ingredients are listed in the order provided, numbered from 1, followed by the recipes
/// currently in the cart.
pub fn render_shopping_list(
    username: &str,
    created_at: NaiveDateTime,
    items: &[ShoppingListItem],
    recipes: &[CartRecipe],
) -> String {
    let mut lines = vec![
        format!("Shopping list for {username}"),
        format!("Created: {}", created_at.format("%Y-%m-%d %H:%M:%S")),
        String::new(),
        "=== INGREDIENTS ===".to_string(),
    ];

    for (index, item) in items.iter().enumerate() {
        lines.push(format!(
            "{}. {} ({}) - {}",
            index + 1,
            title_case(&item.name),
            item.measurement_unit,
            item.total.normalize()
        ));
    }

    lines.push(String::new());
    lines.push("=== RECIPES ===".to_string());

    for recipe in recipes {
        lines.push(format!(
            "* {} (author: {})",
            recipe.name, recipe.author_username
        ));
    }

    lines.join("\n")
}

/// File name of the shopping list attachment created at the provided time.
pub fn shopping_list_filename(created_at: NaiveDateTime) -> String {
    format!("shopping_list_{}.txt", created_at.format("%Y%m%d_%H%M%S"))
}

/// Upper cases the first letter of every word and lower cases the rest.
///
/// A word starts at any letter that doesn't follow another letter.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}
