//! Recipe domain model and request payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::ValidationError;

/// Recipe record from database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub titre: String,
    pub temps_de_preparation: i64,
    pub difficulte: i64,
    pub budget: i64,
    pub description: String,
}

/// Recipe fields as submitted by clients (POST and PUT bodies).
///
/// Every field is optional at the serde layer so that missing fields reach
/// `validate` and come back as a 400 rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRecipe {
    pub titre: Option<String>,
    pub temps_de_preparation: Option<i64>,
    pub difficulte: Option<i64>,
    pub budget: Option<i64>,
    pub description: Option<String>,
}

impl NewRecipe {
    /// Require titre, temps_de_preparation, difficulte, and budget.
    ///
    /// `description` is intentionally not checked here; a missing description
    /// surfaces as a storage constraint failure instead.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.titre.as_deref() {
            None => return Err(ValidationError::Missing { field: "titre" }),
            Some(t) if t.trim().is_empty() => {
                return Err(ValidationError::Empty { field: "titre" })
            }
            _ => {}
        }

        for (field, value) in [
            ("temps_de_preparation", self.temps_de_preparation),
            ("difficulte", self.difficulte),
            ("budget", self.budget),
        ] {
            match value {
                None => return Err(ValidationError::Missing { field }),
                Some(0) => return Err(ValidationError::Zero { field }),
                _ => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soup() -> NewRecipe {
        NewRecipe {
            titre: Some("Soupe a l'oignon".into()),
            temps_de_preparation: Some(45),
            difficulte: Some(2),
            budget: Some(10),
            description: Some("Oignons, bouillon, gratinee au four".into()),
        }
    }

    #[test]
    fn valid_recipe_passes() {
        assert!(soup().validate().is_ok());
    }

    #[test]
    fn missing_titre_rejected() {
        let req = NewRecipe {
            titre: None,
            ..soup()
        };
        assert!(matches!(
            req.validate(),
            Err(ValidationError::Missing { field: "titre" })
        ));
    }

    #[test]
    fn empty_titre_rejected() {
        let req = NewRecipe {
            titre: Some("   ".into()),
            ..soup()
        };
        assert!(matches!(
            req.validate(),
            Err(ValidationError::Empty { field: "titre" })
        ));
    }

    #[test]
    fn zero_budget_rejected() {
        let req = NewRecipe {
            budget: Some(0),
            ..soup()
        };
        assert!(matches!(
            req.validate(),
            Err(ValidationError::Zero { field: "budget" })
        ));
    }

    #[test]
    fn missing_description_is_not_a_validation_error() {
        let req = NewRecipe {
            description: None,
            ..soup()
        };
        assert!(req.validate().is_ok());
    }
}
