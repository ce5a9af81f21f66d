// file: src/app.rs
// description: router assembly, CORS policy, shared application state
// reference: https://docs.rs/axum

use crate::completion::CompletionClient;
use crate::config::ServerConfig;
use crate::error::{Result, ServiceError};
use crate::handlers::{health, plagiarism};
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared per-process state: the injected completion backend and whether a
/// credential was supplied at startup. Cloned cheaply into each request.
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
    pub credential_present: bool,
}

pub fn build_router(config: &ServerConfig, state: AppState) -> Result<Router> {
    let mut origins = Vec::with_capacity(config.allowed_origins.len());
    for origin in &config.allowed_origins {
        let value = origin.parse::<HeaderValue>().map_err(|e| {
            ServiceError::Config(format!("Invalid CORS origin {}: {}", origin, e))
        })?;
        origins.push(value);
    }

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any);

    let plagiarism_routes = Router::new().route("/plagiarism/", post(plagiarism::check_plagiarism));

    Ok(Router::new()
        .route("/", get(health::root))
        .route("/check-api-key", get(health::check_api_key))
        .nest("/api/ai", plagiarism_routes)
        .layer(cors)
        .with_state(state))
}
