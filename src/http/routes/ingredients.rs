//! Ingredient endpoints

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::db::repos::IngredientRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Ingredient, NewIngredient, ValidationError};

/// GET /ingredients
async fn list_ingredients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Ingredient>>, ApiError> {
    let ingredients = IngredientRepo::new(&state.pool).list().await?;
    Ok(Json(ingredients))
}

/// GET /ingredients/{id}
async fn get_ingredient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Ingredient>, ApiError> {
    let ingredient = IngredientRepo::new(&state.pool).get(id).await?;
    Ok(Json(ingredient))
}

/// POST /ingredients
async fn create_ingredient(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewIngredient>, JsonRejection>,
) -> Result<(StatusCode, Json<Ingredient>), ApiError> {
    let Json(req) = payload.map_err(|e| ValidationError::InvalidBody {
        reason: e.to_string(),
    })?;
    req.validate()?;

    let ingredient = IngredientRepo::new(&state.pool).create(&req).await?;
    Ok((StatusCode::CREATED, Json(ingredient)))
}

/// PUT /ingredients/{id}
async fn update_ingredient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<NewIngredient>, JsonRejection>,
) -> Result<Json<Ingredient>, ApiError> {
    let Json(req) = payload.map_err(|e| ValidationError::InvalidBody {
        reason: e.to_string(),
    })?;
    req.validate()?;

    let ingredient = IngredientRepo::new(&state.pool).update(id, &req).await?;
    Ok(Json(ingredient))
}

/// DELETE /ingredients/{id}
async fn delete_ingredient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    IngredientRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ingredients", get(list_ingredients).post(create_ingredient))
        .route(
            "/ingredients/{id}",
            get(get_ingredient)
                .put(update_ingredient)
                .delete(delete_ingredient),
        )
}
