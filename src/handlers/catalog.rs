use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::catalog::{CatalogPage, CatalogQuery, Product};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub products: Vec<Product>,
    #[serde(default)]
    pub query: CatalogQuery,
}

/// Handle POST /api/catalog/search
pub async fn search(Json(request): Json<SearchRequest>) -> Result<Json<CatalogPage>, AppError> {
    let page = request.query.apply(&request.products)?;
    debug!(
        matches = page.total_matches,
        page = page.page,
        total_pages = page.total_pages,
        "Catalog searched"
    );
    Ok(Json(page))
}
