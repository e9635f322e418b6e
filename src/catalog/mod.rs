//! Catalog browsing: filtering, sorting and paging the product grid.

pub mod variants;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub use variants::{find_variant, VariantOptions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub stock_quantity: u32,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub fragrance: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.available && self.stock_quantity > 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogSort {
    PriceAsc,
    PriceDesc,
    #[default]
    NameAsc,
    NameDesc,
    Newest,
}

impl std::str::FromStr for CatalogSort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-asc" => Ok(CatalogSort::PriceAsc),
            "price-desc" => Ok(CatalogSort::PriceDesc),
            "name-asc" => Ok(CatalogSort::NameAsc),
            "name-desc" => Ok(CatalogSort::NameDesc),
            "newest" => Ok(CatalogSort::Newest),
            _ => Err(AppError::InvalidArgument(format!("Invalid sort order: {}", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    pub search: String,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub available_only: bool,
    pub sort: CatalogSort,
    pub page: usize,
    pub per_page: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            min_price: Decimal::ZERO,
            max_price: Decimal::from(10_000),
            available_only: false,
            sort: CatalogSort::default(),
            page: 1,
            per_page: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage {
    pub items: Vec<Product>,
    pub total_matches: usize,
    pub page: usize,
    pub total_pages: usize,
}

impl CatalogQuery {
    pub fn matches(&self, product: &Product) -> bool {
        let query = self.search.trim().to_lowercase();
        if !query.is_empty()
            && !product.name.to_lowercase().contains(&query)
            && !product.description.to_lowercase().contains(&query)
        {
            return false;
        }

        if product.price < self.min_price || product.price > self.max_price {
            return false;
        }

        !self.available_only || product.in_stock()
    }

    /// Filter, sort and page `products`. A page past the end resets to
    /// the first page.
    pub fn apply(&self, products: &[Product]) -> Result<CatalogPage, AppError> {
        if self.per_page == 0 {
            return Err(AppError::InvalidArgument(
                "per_page must be at least 1".to_string(),
            ));
        }

        let mut matches: Vec<Product> = products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect();
        sort_products(&mut matches, self.sort);

        let total_matches = matches.len();
        let total_pages = total_matches.div_ceil(self.per_page).max(1);
        let page = if (1..=total_pages).contains(&self.page) {
            self.page
        } else {
            1
        };

        let items = matches
            .into_iter()
            .skip((page - 1) * self.per_page)
            .take(self.per_page)
            .collect();

        Ok(CatalogPage {
            items,
            total_matches,
            page,
            total_pages,
        })
    }
}

fn sort_products(products: &mut [Product], sort: CatalogSort) {
    match sort {
        CatalogSort::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        CatalogSort::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        CatalogSort::NameAsc => products.sort_by_cached_key(|p| p.name.to_lowercase()),
        CatalogSort::NameDesc => {
            products.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()))
        }
        CatalogSort::Newest => products.sort_by(|a, b| b.id.cmp(&a.id)),
    }
}
