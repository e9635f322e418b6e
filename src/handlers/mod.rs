use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::pricing::PricingCalculator;

pub mod catalog;
pub mod checkout;
pub mod health;
pub mod metrics_handler;
pub mod pricing;
pub mod regions;

/// Shared state for the pricing API routes
#[derive(Clone)]
pub struct AppState {
    /// Swapped wholesale on SIGHUP; handlers take one snapshot per request
    pub calculator: Arc<ArcSwap<PricingCalculator>>,
}

impl AppState {
    pub fn new(calculator: PricingCalculator) -> Self {
        Self {
            calculator: Arc::new(ArcSwap::from_pointee(calculator)),
        }
    }

    pub fn calculator(&self) -> Arc<PricingCalculator> {
        self.calculator.load_full()
    }
}
