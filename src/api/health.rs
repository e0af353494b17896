use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up; reports history retention")
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let history = &state.history;
    let retained = history.entries().await.len();

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "history": {
            "enabled": history.is_enabled(),
            "limit": history.limit(),
            "retained": retained,
        }
    }))
}
