use axum::{
    routing::{any, get},
    Json, Router,
};
use serde_json::{json, Value};

use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(health_check))
        // Non-POST methods are rejected inside the handler so they get the plain-text 405
        .route("/api/translate", any(handlers::translate))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
