use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::QuoteRequest;
use super::pricing::PremiumPredictor;
use super::service::{QuoteService, QuoteServiceError};

/// Router builder exposing the HTTP quote endpoint.
pub fn quote_router<P>(service: Arc<QuoteService<P>>) -> Router
where
    P: PremiumPredictor + 'static,
{
    Router::new()
        .route("/api/v1/quotes", post(quote_handler::<P>))
        .with_state(service)
}

pub(crate) async fn quote_handler<P>(
    State(service): State<Arc<QuoteService<P>>>,
    axum::Json(request): axum::Json<QuoteRequest>,
) -> Response
where
    P: PremiumPredictor + 'static,
{
    match service.quote(request) {
        Ok(quote) => (StatusCode::OK, axum::Json(quote)).into_response(),
        Err(QuoteServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(QuoteServiceError::Prediction(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}
