//! Recipe endpoints

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::db::repos::RecipeRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{NewRecipe, Recipe, ValidationError};

/// GET /recipes - list every recipe
async fn list_recipes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let recipes = RecipeRepo::new(&state.pool).list().await?;
    Ok(Json(recipes))
}

/// GET /recipes/{id}
async fn get_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = RecipeRepo::new(&state.pool).get(id).await?;
    Ok(Json(recipe))
}

/// POST /recipes - create from required fields, echo with assigned id
async fn create_recipe(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewRecipe>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let Json(req) = payload.map_err(|e| ValidationError::InvalidBody {
        reason: e.to_string(),
    })?;
    req.validate()?;

    let recipe = RecipeRepo::new(&state.pool).create(&req).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// PUT /recipes/{id} - full replace of all fields
async fn update_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<NewRecipe>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError> {
    let Json(req) = payload.map_err(|e| ValidationError::InvalidBody {
        reason: e.to_string(),
    })?;
    req.validate()?;

    let recipe = RecipeRepo::new(&state.pool).update(id, &req).await?;
    Ok(Json(recipe))
}

/// DELETE /recipes/{id} - link rows follow via the schema cascade
async fn delete_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    RecipeRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/recipes/{id}",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
}
