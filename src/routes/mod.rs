pub mod booking_routes;
pub mod bus_routes;
pub mod conductor_routes;
pub mod user_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::state::AppState;

pub fn create_api_router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Endpoint de health check
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "bus-booking",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
