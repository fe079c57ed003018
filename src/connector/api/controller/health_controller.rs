use axum::Json;
use serde_json::{json, Value};

pub const LIVENESS_MESSAGE: &str = "NLP Microservice is running!";

/// `GET /` — fixed liveness payload.
pub async fn liveness() -> Json<Value> {
    Json(json!({ "message": LIVENESS_MESSAGE }))
}
