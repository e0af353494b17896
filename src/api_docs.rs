use crate::api;
use crate::domain::HistoryEntry;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::isbn::validate_isbn,
        api::isbn::calculate_check_digit,
        api::isbn::create_isbn,
        api::history::show_history,
    ),
    components(schemas(HistoryEntry)),
    tags(
        (name = "isbn-service", description = "ISBN-10 validation and check digit API")
    )
)]
pub struct ApiDoc;
