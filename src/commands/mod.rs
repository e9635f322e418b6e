//! Command implementations for the CLI
//!
//! - start: Start the pricing server
//! - quote: Price a single order
//! - preview: Flat delivery charge for a region
//! - regions: List regions by zone
//! - reload: Reload the pricing policy of a running server
//! - test: Test configuration validity

pub mod preview;
pub mod quote;
pub mod regions;
pub mod reload;
pub mod start;
