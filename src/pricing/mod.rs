pub mod calculator;
pub mod models;

pub use calculator::{round_half_up, PricingCalculator};
pub use models::{
    DeliveryDates, DeliveryDays, DeliveryZone, OrderSummary, PricingPolicy, ZoneRate, ZoneRates,
};
