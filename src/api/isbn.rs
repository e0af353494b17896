use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{HistoryEntry, IsbnError};
use crate::infrastructure::AppState;
use crate::models::{Isbn10, NumberingComponents};
use crate::services;

const MISSING_ISBN: &str = "Please pass an ISBN on the query string";
const MISSING_COMPONENTS: &str = "Please pass a gnumber (group number), vnumber (publisher number) and tnumber (title number) on the query string";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IsbnQuery {
    /// Candidate ISBN-10 or 9-digit prefix, depending on the endpoint
    pub isbn: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateIsbnQuery {
    /// Group number
    pub gnumber: Option<String>,
    /// Publisher number
    pub vnumber: Option<String>,
    /// Title number
    pub tnumber: Option<String>,
}

impl CreateIsbnQuery {
    fn into_components(self) -> Option<NumberingComponents> {
        Some(NumberingComponents::new(
            self.gnumber?,
            self.vnumber?,
            self.tnumber?,
        ))
    }
}

fn error_body(e: IsbnError) -> String {
    format!("Error: {}", e)
}

#[utoipa::path(
    get,
    path = "/api/validateIsbn",
    params(IsbnQuery),
    responses(
        (status = 200, description = "`valid` or `invalid`", body = String),
        (status = 400, description = "No isbn parameter given", body = String)
    )
)]
pub async fn validate_isbn(
    State(state): State<AppState>,
    Query(query): Query<IsbnQuery>,
) -> impl IntoResponse {
    tracing::info!("validateIsbn request processed");

    let Some(isbn) = query.isbn else {
        tracing::warn!("validateIsbn called without isbn");
        state
            .history
            .record(HistoryEntry::new("validateIsbn with empty isbn", MISSING_ISBN))
            .await;
        return (StatusCode::BAD_REQUEST, MISSING_ISBN.to_string());
    };

    let verdict = match Isbn10::parse(&isbn) {
        Some(valid) => {
            tracing::debug!("validateIsbn accepted {}", valid);
            "valid"
        }
        None => "invalid",
    };

    state
        .history
        .record(HistoryEntry::new(format!("validateIsbn isbn={}", isbn), verdict))
        .await;

    (StatusCode::OK, verdict.to_string())
}

#[utoipa::path(
    get,
    path = "/api/calculateCheckDigit",
    params(IsbnQuery),
    responses(
        (status = 200, description = "The single check character", body = String),
        (status = 400, description = "Missing, wrong-length or non-digit prefix", body = String)
    )
)]
pub async fn calculate_check_digit(
    State(state): State<AppState>,
    Query(query): Query<IsbnQuery>,
) -> impl IntoResponse {
    tracing::info!("calculateCheckDigit request processed");

    let Some(isbn) = query.isbn else {
        tracing::warn!("calculateCheckDigit called without isbn");
        state
            .history
            .record(HistoryEntry::new(
                "calculateCheckDigit with empty isbn",
                MISSING_ISBN,
            ))
            .await;
        return (StatusCode::BAD_REQUEST, MISSING_ISBN.to_string());
    };

    let request = format!("calculateCheckDigit isbn={}", isbn);
    match services::compute(&isbn) {
        Ok(check) => {
            state
                .history
                .record(HistoryEntry::new(
                    request,
                    format!("The calculated check digit is \"{}\".", check),
                ))
                .await;
            (StatusCode::OK, check.to_string())
        }
        Err(e) => {
            tracing::warn!("calculateCheckDigit rejected '{}': {}", isbn, e);
            let body = error_body(e);
            state
                .history
                .record(HistoryEntry::new(request, body.clone()))
                .await;
            (StatusCode::BAD_REQUEST, body)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/createIsbn",
    params(CreateIsbnQuery),
    responses(
        (status = 200, description = "Dashed ISBN-10, e.g. 3-9284-7532-0", body = String),
        (status = 400, description = "Missing components or invalid concatenated prefix", body = String)
    )
)]
pub async fn create_isbn(
    State(state): State<AppState>,
    Query(query): Query<CreateIsbnQuery>,
) -> impl IntoResponse {
    tracing::info!("createIsbn request processed");

    let Some(components) = query.into_components() else {
        tracing::warn!("createIsbn called with missing components");
        state
            .history
            .record(HistoryEntry::new(
                "createIsbn with missing parameters",
                MISSING_COMPONENTS,
            ))
            .await;
        return (StatusCode::BAD_REQUEST, MISSING_COMPONENTS.to_string());
    };

    let request = format!(
        "createIsbn gnumber={}, vnumber={}, tnumber={}",
        components.group, components.publisher, components.title
    );
    match services::build_from(&components) {
        Ok(isbn) => {
            state
                .history
                .record(HistoryEntry::new(
                    request,
                    format!("The calculated ISBN is \"{}\".", isbn),
                ))
                .await;
            (StatusCode::OK, isbn)
        }
        Err(e) => {
            tracing::warn!("createIsbn rejected {:?}: {}", components, e);
            let body = error_body(e);
            state
                .history
                .record(HistoryEntry::new(request, body.clone()))
                .await;
            (StatusCode::BAD_REQUEST, body)
        }
    }
}
