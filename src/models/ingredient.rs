//! Ingredient domain model and request payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::ValidationError;

/// Ingredient record from database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Ingredient {
    pub id: i64,
    pub nom: String,
}

/// Ingredient fields as submitted by clients
#[derive(Debug, Clone, Deserialize)]
pub struct NewIngredient {
    pub nom: Option<String>,
}

impl NewIngredient {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.nom.as_deref() {
            None => Err(ValidationError::Missing { field: "nom" }),
            Some(n) if n.trim().is_empty() => Err(ValidationError::Empty { field: "nom" }),
            _ => Ok(()),
        }
    }
}
