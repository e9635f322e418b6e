use axum::{
    extract::{Path, State},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::handlers::AppState;
use crate::metrics;
use crate::pricing::{DeliveryZone, OrderSummary, PricingCalculator, ZoneRate};

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub subtotal: Decimal,
    pub region: String,
    #[serde(default)]
    pub weight: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub region: String,
    pub zone: DeliveryZone,
    pub delivery_charge: Decimal,
}

#[derive(Debug, Serialize)]
pub struct PolicyResponse {
    pub tax_rate_percent: Decimal,
    pub free_delivery_threshold: Decimal,
    pub service_charge: Decimal,
    pub creation_days: u32,
    pub default_weight_kg: Decimal,
    pub zones: Vec<ZoneEntry>,
}

#[derive(Debug, Serialize)]
pub struct ZoneEntry {
    pub zone: DeliveryZone,
    #[serde(flatten)]
    pub rate: ZoneRate,
}

/// Warn and count when an order for `region` is priced with the fallback
/// zone. Returns whether the fallback was recorded.
///
/// With `strict_regions` the order is rejected instead, so nothing is noted.
pub(crate) fn note_fallback(calculator: &PricingCalculator, region: &str, endpoint: &str) -> bool {
    if calculator.policy().strict_regions {
        return false;
    }
    record_fallback(calculator, region, endpoint)
}

fn record_fallback(calculator: &PricingCalculator, region: &str, endpoint: &str) -> bool {
    if !calculator.registry().resolve(region).is_fallback() {
        return false;
    }
    warn!(region = %region, endpoint = %endpoint, "Unknown region, using fallback zone");
    metrics::record_region_fallback(endpoint);
    true
}

/// Handle POST /api/pricing/summary
pub async fn order_summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<OrderSummary>, AppError> {
    const ENDPOINT: &str = "/api/pricing/summary";
    let start = Instant::now();
    let calculator = state.calculator();

    note_fallback(&calculator, &request.region, ENDPOINT);
    let summary =
        calculator.compute_order_summary(request.subtotal, &request.region, request.weight)?;

    debug!(
        region = %request.region,
        zone = %summary.zone,
        total = %summary.total_amount,
        "Computed order summary"
    );
    metrics::record_quote(ENDPOINT, &summary);
    metrics::record_duration(ENDPOINT, start.elapsed());

    Ok(Json(summary))
}

/// Handle GET /api/pricing/preview/:region
pub async fn delivery_preview(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Json<PreviewResponse> {
    let calculator = state.calculator();
    // Previews never reject a region, strict or not
    record_fallback(&calculator, &region, "/api/pricing/preview");

    Json(PreviewResponse {
        zone: calculator.registry().resolve(&region).zone,
        delivery_charge: calculator.delivery_charge_preview(&region),
        region,
    })
}

/// Handle GET /api/pricing/policy
pub async fn current_policy(State(state): State<AppState>) -> Json<PolicyResponse> {
    let calculator = state.calculator();
    let policy = calculator.policy();

    Json(PolicyResponse {
        tax_rate_percent: calculator.tax_rate_percent(),
        free_delivery_threshold: calculator.free_delivery_threshold(),
        service_charge: policy.service_charge,
        creation_days: policy.creation_days,
        default_weight_kg: policy.default_weight_kg,
        zones: policy
            .zones
            .iter()
            .map(|(zone, rate)| ZoneEntry {
                zone,
                rate: rate.clone(),
            })
            .collect(),
    })
}
