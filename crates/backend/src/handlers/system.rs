use axum::Json;
use serde_json::{json, Value};

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Store Operations Automation API",
        "version": env!("CARGO_PKG_VERSION"),
        "dashboard": "/dashboard/",
    }))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
