//! Endpoints for the recipe/ingredient relation

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::LinkRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{LinkedIngredient, Recipe, RecipeIngredient, ValidationError};

/// Bulk link request
#[derive(Deserialize)]
pub struct LinkManyRequest {
    #[serde(rename = "ingredientIds")]
    pub ingredient_ids: Vec<i64>,
}

/// Bulk link summary
#[derive(Serialize)]
pub struct LinkManyResponse {
    pub recette_id: i64,
    pub added_ingredient_ids: Vec<i64>,
}

/// GET /recipe/{id}/ingredients
async fn list_recipe_ingredients(
    State(state): State<Arc<AppState>>,
    Path(recette_id): Path<i64>,
) -> Result<Json<Vec<LinkedIngredient>>, ApiError> {
    let ingredients = LinkRepo::new(&state.pool)
        .ingredients_for_recipe(recette_id)
        .await?;
    Ok(Json(ingredients))
}

/// GET /ingredient/{id}/recipes
async fn list_ingredient_recipes(
    State(state): State<Arc<AppState>>,
    Path(ingredient_id): Path<i64>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let recipes = LinkRepo::new(&state.pool)
        .recipes_for_ingredient(ingredient_id)
        .await?;
    Ok(Json(recipes))
}

/// POST /recipe/{rid}/ingredient/{iid}
async fn link_ingredient(
    State(state): State<Arc<AppState>>,
    Path((recette_id, ingredient_id)): Path<(i64, i64)>,
) -> Result<(StatusCode, Json<RecipeIngredient>), ApiError> {
    let link = LinkRepo::new(&state.pool)
        .link(recette_id, ingredient_id)
        .await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// POST /recipe/{rid}/ingredients - link a batch in one transaction
async fn link_ingredients(
    State(state): State<Arc<AppState>>,
    Path(recette_id): Path<i64>,
    payload: Result<Json<LinkManyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkManyResponse>), ApiError> {
    let Json(req) = payload.map_err(|_| ValidationError::InvalidBody {
        reason: "ingredientIds must be an array".into(),
    })?;

    LinkRepo::new(&state.pool)
        .link_many(recette_id, &req.ingredient_ids)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LinkManyResponse {
            recette_id,
            added_ingredient_ids: req.ingredient_ids,
        }),
    ))
}

/// DELETE /recipe/{rid}/ingredient/{iid}
async fn unlink_ingredient(
    State(state): State<Arc<AppState>>,
    Path((recette_id, ingredient_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    LinkRepo::new(&state.pool)
        .unlink(recette_id, ingredient_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /recipe/{rid}/ingredients - clear the relation, no-op when empty
async fn unlink_all_ingredients(
    State(state): State<Arc<AppState>>,
    Path(recette_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    LinkRepo::new(&state.pool).unlink_all(recette_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/recipe/{id}/ingredients",
            get(list_recipe_ingredients)
                .post(link_ingredients)
                .delete(unlink_all_ingredients),
        )
        .route("/ingredient/{id}/recipes", get(list_ingredient_recipes))
        .route(
            "/recipe/{id}/ingredient/{ingredient_id}",
            post(link_ingredient).delete(unlink_ingredient),
        )
}
