use axum::{extract::State, Json};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;

use crate::cart::{Cart, CartLine};
use crate::checkout::{CheckoutForm, CheckoutQuote, FieldError};
use crate::error::AppError;
use crate::handlers::pricing::note_fallback;
use crate::handlers::AppState;
use crate::metrics;

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub items: Vec<CartLine>,
    pub state: String,
}

#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub errors: Vec<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
}

/// Handle POST /api/checkout/quote
pub async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<CheckoutQuote>, AppError> {
    const ENDPOINT: &str = "/api/checkout/quote";
    let start = Instant::now();
    let calculator = state.calculator();

    note_fallback(&calculator, &request.state, ENDPOINT);
    let cart = Cart {
        id: 0,
        items: request.items,
    };
    let quote = CheckoutQuote::build(&calculator, &cart, &request.state, Local::now().date_naive())?;

    info!(
        state = %request.state,
        items = quote.item_count,
        total = %quote.summary.total_amount,
        "Checkout quoted"
    );
    metrics::record_quote(ENDPOINT, &quote.summary);
    metrics::record_duration(ENDPOINT, start.elapsed());

    Ok(Json(quote))
}

/// Handle POST /api/checkout/validate
pub async fn validate(
    State(state): State<AppState>,
    Json(form): Json<CheckoutForm>,
) -> Json<ValidationResponse> {
    let calculator = state.calculator();
    let errors = form.validate(calculator.registry());
    let valid = errors.is_empty();

    Json(ValidationResponse {
        valid,
        shipping_address: valid.then(|| form.shipping_address()),
        errors,
    })
}
