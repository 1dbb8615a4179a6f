//! Junction models for the recipe/ingredient relation

use serde::Serialize;
use sqlx::FromRow;

/// A row of the recipe_ingredients junction table
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecipeIngredient {
    pub id: i64,
    pub recette_id: i64,
    pub ingredient_id: i64,
}

/// Ingredient joined with the id of the link row carrying it,
/// as returned when listing a recipe's ingredients.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LinkedIngredient {
    pub id: i64,
    pub nom: String,
    pub recipe_ingredient_id: i64,
}
