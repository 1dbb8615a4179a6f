//! Relation repository for the recipe_ingredients junction table
//!
//! Duplicate pairs are detected through the UNIQUE(recette_id, ingredient_id)
//! violation rather than a check-then-insert. Bulk linking runs in a single
//! transaction: one bad id rolls back the whole batch.

use sqlx::SqlitePool;

use crate::models::{LinkedIngredient, Recipe, RecipeIngredient};

use super::DbError;

/// Relation repository
pub struct LinkRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> LinkRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Ingredients of a recipe, each carrying its link row id.
    pub async fn ingredients_for_recipe(
        &self,
        recette_id: i64,
    ) -> Result<Vec<LinkedIngredient>, DbError> {
        let ingredients = sqlx::query_as::<_, LinkedIngredient>(
            r#"
            SELECT i.id, i.nom, ri.id AS recipe_ingredient_id
            FROM ingredients i
            INNER JOIN recipe_ingredients ri ON i.id = ri.ingredient_id
            WHERE ri.recette_id = ?
            "#,
        )
        .bind(recette_id)
        .fetch_all(self.pool)
        .await?;

        Ok(ingredients)
    }

    /// Full recipe rows using a given ingredient.
    pub async fn recipes_for_ingredient(
        &self,
        ingredient_id: i64,
    ) -> Result<Vec<Recipe>, DbError> {
        let recipes = sqlx::query_as::<_, Recipe>(
            r#"
            SELECT r.id, r.titre, r.temps_de_preparation, r.difficulte, r.budget, r.description
            FROM recipes r
            INNER JOIN recipe_ingredients ri ON r.id = ri.recette_id
            WHERE ri.ingredient_id = ?
            "#,
        )
        .bind(ingredient_id)
        .fetch_all(self.pool)
        .await?;

        Ok(recipes)
    }

    /// Associate one ingredient with one recipe.
    pub async fn link(
        &self,
        recette_id: i64,
        ingredient_id: i64,
    ) -> Result<RecipeIngredient, DbError> {
        sqlx::query_as::<_, RecipeIngredient>(
            r#"
            INSERT INTO recipe_ingredients (recette_id, ingredient_id)
            VALUES (?, ?)
            RETURNING id, recette_id, ingredient_id
            "#,
        )
        .bind(recette_id)
        .bind(ingredient_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| constraint_error(e, recette_id, ingredient_id))
    }

    /// Associate several ingredients with one recipe, atomically.
    ///
    /// All inserts run in one transaction; a duplicate or dangling id rolls
    /// back every insert of the batch.
    pub async fn link_many(
        &self,
        recette_id: i64,
        ingredient_ids: &[i64],
    ) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        for &ingredient_id in ingredient_ids {
            sqlx::query(
                "INSERT INTO recipe_ingredients (recette_id, ingredient_id) VALUES (?, ?)",
            )
            .bind(recette_id)
            .bind(ingredient_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| constraint_error(e, recette_id, ingredient_id))?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Remove the link between a recipe and an ingredient.
    pub async fn unlink(&self, recette_id: i64, ingredient_id: i64) -> Result<(), DbError> {
        let result = sqlx::query(
            "DELETE FROM recipe_ingredients WHERE recette_id = ? AND ingredient_id = ?",
        )
        .bind(recette_id)
        .bind(ingredient_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "link",
                id: format!("{}/{}", recette_id, ingredient_id),
            });
        }

        Ok(())
    }

    /// Remove every link of a recipe. Succeeds even when none existed.
    pub async fn unlink_all(&self, recette_id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM recipe_ingredients WHERE recette_id = ?")
            .bind(recette_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn constraint_error(e: sqlx::Error, recette_id: i64, ingredient_id: i64) -> DbError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return DbError::DuplicateLink {
                recette_id,
                ingredient_id,
            };
        }
        if db.is_foreign_key_violation() {
            return DbError::ForeignKey;
        }
    }
    DbError::Sqlx(e)
}
