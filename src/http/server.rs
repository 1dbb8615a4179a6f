//! Axum server setup
//!
//! Server skeleton with:
//! - Bearer-token gate on every API route
//! - CORS + request tracing
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::{auth, routes};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,

    /// Static secret expected in the Authorization header
    pub auth_token: String,
}

/// Shared application state
pub struct AppState {
    pub pool: SqlitePool,
    pub auth_token: String,
}

/// Build the application router with all routes.
///
/// The auth gate wraps the API routes only; /health stays open.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .merge(routes::recipes::router())
        .merge(routes::ingredients::router())
        .merge(routes::links::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_token,
        ));

    Router::new()
        .merge(routes::health::router())
        .merge(api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server.
pub async fn run_server(pool: SqlitePool, config: ServerConfig) -> Result<(), ServerError> {
    let state = Arc::new(AppState {
        pool,
        auth_token: config.auth_token,
    });
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{self, migrations};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    const TOKEN: &str = "secret-token";

    async fn test_app() -> (TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let pool = db::connect(&dir.path().join("api.db")).await.unwrap();
        migrations::run(&pool).await.unwrap();

        let state = Arc::new(AppState {
            pool,
            auth_token: TOKEN.to_string(),
        });
        (dir, build_router(state))
    }

    fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("authorization", format!("Bearer {}", TOKEN))
            .header("content-type", "application/json");

        match body {
            Some(v) => builder.body(Body::from(v.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn soup() -> Value {
        json!({
            "titre": "Soup",
            "temps_de_preparation": 10,
            "difficulte": 1,
            "budget": 5,
            "description": "x"
        })
    }

    #[tokio::test]
    async fn health_is_open() {
        let (_dir, app) = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn api_rejects_missing_or_wrong_token() {
        let (_dir, app) = test_app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/recipes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/recipes")
                    .header("authorization", "Bearer wrong")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn recipe_lifecycle() {
        let (_dir, app) = test_app().await;

        // Create
        let response = app
            .clone()
            .oneshot(request("POST", "/recipes", Some(soup())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;
        let id = created["id"].as_i64().unwrap();
        assert_eq!(created["titre"], "Soup");

        // Read back
        let response = app
            .clone()
            .oneshot(request("GET", &format!("/recipes/{id}"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched = json_body(response).await;
        assert_eq!(fetched["temps_de_preparation"], 10);
        assert_eq!(fetched["budget"], 5);

        // Update
        let mut update = soup();
        update["titre"] = json!("Onion soup");
        let response = app
            .clone()
            .oneshot(request("PUT", &format!("/recipes/{id}"), Some(update)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["titre"], "Onion soup");

        // Delete, then the row is gone
        let response = app
            .clone()
            .oneshot(request("DELETE", &format!("/recipes/{id}"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(request("GET", &format!("/recipes/{id}"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_with_missing_fields_is_400() {
        let (_dir, app) = test_app().await;

        let response = app
            .oneshot(request(
                "POST",
                "/recipes",
                Some(json!({"titre": "Soup"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn update_unknown_recipe_is_404() {
        let (_dir, app) = test_app().await;

        let response = app
            .oneshot(request("PUT", "/recipes/999", Some(soup())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn link_twice_is_400_duplicate() {
        let (_dir, app) = test_app().await;

        let recipe = json_body(
            app.clone()
                .oneshot(request("POST", "/recipes", Some(soup())))
                .await
                .unwrap(),
        )
        .await;
        let ingredient = json_body(
            app.clone()
                .oneshot(request(
                    "POST",
                    "/ingredients",
                    Some(json!({"nom": "oignon"})),
                ))
                .await
                .unwrap(),
        )
        .await;
        let uri = format!(
            "/recipe/{}/ingredient/{}",
            recipe["id"], ingredient["id"]
        );

        let response = app.clone().oneshot(request("POST", &uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app.clone().oneshot(request("POST", &uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "duplicate_link");

        // Still linked exactly once
        let listed = json_body(
            app.oneshot(request(
                "GET",
                &format!("/recipe/{}/ingredients", recipe["id"]),
                None,
            ))
            .await
            .unwrap(),
        )
        .await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn bulk_link_requires_an_array() {
        let (_dir, app) = test_app().await;

        let recipe = json_body(
            app.clone()
                .oneshot(request("POST", "/recipes", Some(soup())))
                .await
                .unwrap(),
        )
        .await;

        let response = app
            .oneshot(request(
                "POST",
                &format!("/recipe/{}/ingredients", recipe["id"]),
                Some(json!({"ingredientIds": 5})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["message"], "ingredientIds must be an array");
    }

    #[tokio::test]
    async fn bulk_link_with_duplicate_rolls_back_entirely() {
        let (_dir, app) = test_app().await;

        let recipe = json_body(
            app.clone()
                .oneshot(request("POST", "/recipes", Some(soup())))
                .await
                .unwrap(),
        )
        .await;
        let ingredient = json_body(
            app.clone()
                .oneshot(request(
                    "POST",
                    "/ingredients",
                    Some(json!({"nom": "oignon"})),
                ))
                .await
                .unwrap(),
        )
        .await;
        let iid = ingredient["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                &format!("/recipe/{}/ingredients", recipe["id"]),
                Some(json!({ "ingredientIds": [iid, iid] })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Atomic batch: nothing persisted
        let listed = json_body(
            app.oneshot(request(
                "GET",
                &format!("/recipe/{}/ingredients", recipe["id"]),
                None,
            ))
            .await
            .unwrap(),
        )
        .await;
        assert!(listed.as_array().unwrap().is_empty());
    }
}
