//! Recipe repository
//!
//! CRUD over the recipes table. Create and update use RETURNING so the
//! handler gets the stored row back in a single statement; link rows
//! referencing a deleted recipe are removed by the schema-level cascade.

use sqlx::SqlitePool;

use crate::models::{NewRecipe, Recipe};

use super::DbError;

const COLUMNS: &str = "id, titre, temps_de_preparation, difficulte, budget, description";

/// Recipe repository
pub struct RecipeRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RecipeRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every recipe, in whatever order the engine returns.
    pub async fn list(&self) -> Result<Vec<Recipe>, DbError> {
        let recipes =
            sqlx::query_as::<_, Recipe>(&format!("SELECT {COLUMNS} FROM recipes"))
                .fetch_all(self.pool)
                .await?;
        Ok(recipes)
    }

    pub async fn get(&self, id: i64) -> Result<Recipe, DbError> {
        sqlx::query_as::<_, Recipe>(&format!("SELECT {COLUMNS} FROM recipes WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "recipe",
                id: id.to_string(),
            })
    }

    /// Insert a recipe and return it with its assigned id.
    ///
    /// Callers validate the payload first; an absent description still lands
    /// here and fails on the NOT NULL constraint.
    pub async fn create(&self, req: &NewRecipe) -> Result<Recipe, DbError> {
        let recipe = sqlx::query_as::<_, Recipe>(&format!(
            r#"
            INSERT INTO recipes (titre, temps_de_preparation, difficulte, budget, description)
            VALUES (?, ?, ?, ?, ?)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&req.titre)
        .bind(req.temps_de_preparation)
        .bind(req.difficulte)
        .bind(req.budget)
        .bind(&req.description)
        .fetch_one(self.pool)
        .await?;

        Ok(recipe)
    }

    /// Full-replace update. No row matched means the id does not exist.
    pub async fn update(&self, id: i64, req: &NewRecipe) -> Result<Recipe, DbError> {
        sqlx::query_as::<_, Recipe>(&format!(
            r#"
            UPDATE recipes
            SET titre = ?, temps_de_preparation = ?, difficulte = ?, budget = ?, description = ?
            WHERE id = ?
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&req.titre)
        .bind(req.temps_de_preparation)
        .bind(req.difficulte)
        .bind(req.budget)
        .bind(&req.description)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "recipe",
            id: id.to_string(),
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "recipe",
                id: id.to_string(),
            });
        }

        Ok(())
    }
}
