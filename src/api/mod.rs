pub mod health;
pub mod history;
pub mod isbn;

use axum::{routing::get, Router};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // ISBN-10
        .route("/validateIsbn", get(isbn::validate_isbn))
        .route("/calculateCheckDigit", get(isbn::calculate_check_digit))
        .route("/createIsbn", get(isbn::create_isbn))
        // History
        .route("/showHistory", get(history::show_history))
        .with_state(state)
}
