use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::handlers::AppState;
use crate::pricing::DeliveryZone;
use crate::regions::State as Region;

#[derive(Debug, Default, Deserialize)]
pub struct RegionFilter {
    pub zone: Option<DeliveryZone>,
}

#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub code: String,
    pub state: String,
    pub cities: Vec<String>,
}

/// Handle GET /api/regions
pub async fn list_regions(
    State(state): State<AppState>,
    Query(filter): Query<RegionFilter>,
) -> Json<Vec<Region>> {
    let calculator = state.calculator();
    let registry = calculator.registry();

    let regions = match filter.zone {
        Some(zone) => registry.states_in_zone(zone).cloned().collect(),
        None => registry.states().to_vec(),
    };
    Json(regions)
}

/// Handle GET /api/regions/:code/cities
pub async fn list_cities(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CitiesResponse>, AppError> {
    let calculator = state.calculator();
    let registry = calculator.registry();

    let region = registry
        .state_by_code(&code)
        .ok_or_else(|| AppError::NotFound(format!("Unknown state code: {}", code)))?;

    Ok(Json(CitiesResponse {
        code: region.code.clone(),
        state: region.name.clone(),
        cities: registry.cities_for(&region.code).to_vec(),
    }))
}
