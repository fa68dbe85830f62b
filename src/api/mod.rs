//! Companion REST API
//!
//! A small server for the endpoint the dashboard reads, built with Axum.
//! Useful for local development of the CLI and the browser UI.
//!
//! # Endpoints
//!
//! - `GET /transactions` - Transaction list and computed balance
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use finboard::api::{serve, ApiConfig, AppState, TransactionStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::new("127.0.0.1", 3333);
//!     let state = AppState::new(TransactionStore::demo(), config.clone());
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;

pub use error::ApiError;
pub use state::{ApiConfig, AppState};
pub use store::{FixtureError, TransactionStore};

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/transactions", get(routes::transactions::list_transactions))
        .nest("/health", health_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for the browser dashboard; invalid origins are skipped with a warning
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Finboard API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Finboard API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionsResponse;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app(store: TransactionStore) -> Router {
        build_router(AppState::new(store, ApiConfig::default()))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app(TransactionStore::demo());
        let response = app.oneshot(get_request("/health/live")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let app = create_test_app(TransactionStore::demo());
        let response = app.oneshot(get_request("/health/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let app = create_test_app(TransactionStore::demo());
        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["transactions"], 4);
    }

    #[tokio::test]
    async fn test_list_transactions() {
        let app = create_test_app(TransactionStore::demo());
        let response = app.oneshot(get_request("/transactions")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["transactions"].as_array().map(Vec::len), Some(4));
        assert_eq!(body["transactions"][0]["title"], "Loan");
        assert_eq!(body["transactions"][0]["created_at"], "2020-05-20T00:00:00.000Z");
        assert_eq!(body["balance"]["income"], "3900");
        assert_eq!(body["balance"]["outcome"], "53");
        assert_eq!(body["balance"]["total"], "3847");

        // The body decodes back into the wire model
        let decoded: TransactionsResponse = serde_json::from_value(body).unwrap();
        assert_eq!(decoded, TransactionStore::demo().response());
    }

    #[tokio::test]
    async fn test_list_transactions_empty() {
        let app = create_test_app(TransactionStore::default());
        let response = app.oneshot(get_request("/transactions")).await.unwrap();

        let body = body_json(response).await;
        assert_eq!(body["transactions"].as_array().map(Vec::len), Some(0));
        assert_eq!(body["balance"]["total"], "0");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = create_test_app(TransactionStore::demo());
        let response = app.oneshot(get_request("/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_serve_reports_bind_failure() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let config = ApiConfig::new("127.0.0.1", port);
        let err = serve(AppState::new(TransactionStore::demo(), config.clone()), &config)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
    }

    #[tokio::test]
    async fn test_cors_allowed_origin() {
        let config = ApiConfig {
            cors_origins: vec!["http://localhost:8080".to_string()],
            ..Default::default()
        };
        let app = build_router(AppState::new(TransactionStore::demo(), config));

        let request = Request::builder()
            .uri("/transactions")
            .header("Origin", "http://localhost:8080")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:8080"
        );
    }
}
