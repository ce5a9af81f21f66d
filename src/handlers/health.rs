// file: src/handlers/health.rs
// description: liveness and credential-presence diagnostic endpoints

use crate::app::AppState;
use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

/// GET / — static liveness message.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "DigiThesis AI Services are running!" }))
}

/// GET /check-api-key — reports whether the credential was loaded, never its
/// value.
pub async fn check_api_key(State(state): State<AppState>) -> Json<Value> {
    let message = if state.credential_present {
        "OpenAI API key loaded successfully."
    } else {
        "OpenAI API key NOT loaded. Please check your .env file."
    };
    Json(json!({ "message": message }))
}
