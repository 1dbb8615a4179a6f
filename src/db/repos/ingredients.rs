//! Ingredient repository

use sqlx::SqlitePool;

use crate::models::{Ingredient, NewIngredient};

use super::DbError;

/// Ingredient repository
pub struct IngredientRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> IngredientRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Ingredient>, DbError> {
        let ingredients = sqlx::query_as::<_, Ingredient>("SELECT id, nom FROM ingredients")
            .fetch_all(self.pool)
            .await?;
        Ok(ingredients)
    }

    pub async fn get(&self, id: i64) -> Result<Ingredient, DbError> {
        sqlx::query_as::<_, Ingredient>("SELECT id, nom FROM ingredients WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "ingredient",
                id: id.to_string(),
            })
    }

    pub async fn create(&self, req: &NewIngredient) -> Result<Ingredient, DbError> {
        let ingredient = sqlx::query_as::<_, Ingredient>(
            "INSERT INTO ingredients (nom) VALUES (?) RETURNING id, nom",
        )
        .bind(&req.nom)
        .fetch_one(self.pool)
        .await?;

        Ok(ingredient)
    }

    pub async fn update(&self, id: i64, req: &NewIngredient) -> Result<Ingredient, DbError> {
        sqlx::query_as::<_, Ingredient>(
            "UPDATE ingredients SET nom = ? WHERE id = ? RETURNING id, nom",
        )
        .bind(&req.nom)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "ingredient",
            id: id.to_string(),
        })
    }

    /// Delete an ingredient; its link rows go with it via the cascade.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM ingredients WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "ingredient",
                id: id.to_string(),
            });
        }

        Ok(())
    }
}
