use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::domain::HistoryEntry;
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/api/showHistory",
    responses(
        (status = 200, description = "Recorded requests in insertion order", body = [HistoryEntry])
    )
)]
pub async fn show_history(State(state): State<AppState>) -> Json<Value> {
    tracing::info!("showHistory request processed");

    let entries = state.history.entries().await;

    Json(json!({
        "total": entries.len(),
        "entries": entries,
    }))
}
