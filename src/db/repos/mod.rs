//! Repository implementations for database access
//!
//! Each repository is a stateless facade borrowing the shared pool:
//! - duplicates are detected via the storage uniqueness violation, never a
//!   pre-check
//! - cascade deletes stay in the schema, never reimplemented here
//! - multi-row operations run in one transaction

pub mod ingredients;
pub mod links;
pub mod recipes;

pub use ingredients::IngredientRepo;
pub use links::LinkRepo;
pub use recipes::RecipeRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("ingredient {ingredient_id} is already associated with recipe {recette_id}")]
    DuplicateLink { recette_id: i64, ingredient_id: i64 },

    #[error("link references a recipe or ingredient that does not exist")]
    ForeignKey,
}
