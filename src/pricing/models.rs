use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Coarse distance class of a delivery destination, measured from the
/// workshop in Kota, Rajasthan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryZone {
    Local,
    Nearby,
    Medium,
    Far,
}

impl DeliveryZone {
    pub const ALL: [DeliveryZone; 4] = [
        DeliveryZone::Local,
        DeliveryZone::Nearby,
        DeliveryZone::Medium,
        DeliveryZone::Far,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryZone::Local => "local",
            DeliveryZone::Nearby => "nearby",
            DeliveryZone::Medium => "medium",
            DeliveryZone::Far => "far",
        }
    }
}

impl std::str::FromStr for DeliveryZone {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(DeliveryZone::Local),
            "nearby" => Ok(DeliveryZone::Nearby),
            "medium" => Ok(DeliveryZone::Medium),
            "far" => Ok(DeliveryZone::Far),
            _ => Err(AppError::InvalidArgument(format!(
                "Invalid delivery zone: {}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for DeliveryZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-zone shipping constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRate {
    pub base_charge: Decimal,
    pub per_kg_charge: Decimal,
    pub min_delivery_days: u32,
    pub max_delivery_days: u32,
}

impl ZoneRate {
    fn new(base_charge: i64, per_kg_charge: i64, min_days: u32, max_days: u32) -> Self {
        Self {
            base_charge: Decimal::from(base_charge),
            per_kg_charge: Decimal::from(per_kg_charge),
            min_delivery_days: min_days,
            max_delivery_days: max_days,
        }
    }
}

/// Rate table covering every zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRates {
    #[serde(default = "default_local_rate")]
    pub local: ZoneRate,
    #[serde(default = "default_nearby_rate")]
    pub nearby: ZoneRate,
    #[serde(default = "default_medium_rate")]
    pub medium: ZoneRate,
    #[serde(default = "default_far_rate")]
    pub far: ZoneRate,
}

impl ZoneRates {
    pub fn get(&self, zone: DeliveryZone) -> &ZoneRate {
        match zone {
            DeliveryZone::Local => &self.local,
            DeliveryZone::Nearby => &self.nearby,
            DeliveryZone::Medium => &self.medium,
            DeliveryZone::Far => &self.far,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (DeliveryZone, &ZoneRate)> {
        DeliveryZone::ALL.into_iter().map(move |zone| (zone, self.get(zone)))
    }
}

impl Default for ZoneRates {
    fn default() -> Self {
        Self {
            local: default_local_rate(),
            nearby: default_nearby_rate(),
            medium: default_medium_rate(),
            far: default_far_rate(),
        }
    }
}

// Within Rajasthan
fn default_local_rate() -> ZoneRate {
    ZoneRate::new(50, 10, 2, 4)
}

// Gujarat, MP, UP, Haryana, Punjab, Delhi, Chandigarh, Uttarakhand
fn default_nearby_rate() -> ZoneRate {
    ZoneRate::new(80, 15, 3, 5)
}

// Maharashtra, Chhattisgarh, Bihar, etc.
fn default_medium_rate() -> ZoneRate {
    ZoneRate::new(120, 20, 5, 7)
}

// South India, Northeast, islands
fn default_far_rate() -> ZoneRate {
    ZoneRate::new(180, 25, 7, 10)
}

/// Adjustable pricing policy.
///
/// Every constant the calculator uses lives here so that operators can
/// tune it from the config file without touching the formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Fraction of the subtotal charged as GST (default: 0.18)
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,

    /// Subtotal at or above which delivery is free (default: 999)
    #[serde(default = "default_free_delivery_threshold")]
    pub free_delivery_threshold: Decimal,

    /// Flat packaging/handling fee (default: 0)
    #[serde(default)]
    pub service_charge: Decimal,

    /// Working days needed to pour the candles before dispatch (default: 1)
    #[serde(default = "default_creation_days")]
    pub creation_days: u32,

    /// Parcel weight assumed when the caller gives none (default: 0.5 kg)
    #[serde(default = "default_weight_kg")]
    pub default_weight_kg: Decimal,

    /// Reject unknown regions instead of pricing them as `far`
    #[serde(default)]
    pub strict_regions: bool,

    #[serde(default)]
    pub zones: ZoneRates,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            free_delivery_threshold: default_free_delivery_threshold(),
            service_charge: Decimal::ZERO,
            creation_days: default_creation_days(),
            default_weight_kg: default_weight_kg(),
            strict_regions: false,
            zones: ZoneRates::default(),
        }
    }
}

fn default_tax_rate() -> Decimal {
    Decimal::new(18, 2)
}

fn default_free_delivery_threshold() -> Decimal {
    Decimal::from(999)
}

fn default_creation_days() -> u32 {
    1
}

fn default_weight_kg() -> Decimal {
    Decimal::new(5, 1)
}

/// Inclusive range of days until delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryDays {
    pub min: u32,
    pub max: u32,
}

/// Calendar window in which the parcel should arrive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryDates {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

/// Fully itemised price of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub tax_rate_percent: Decimal,
    pub delivery_charge: Decimal,
    pub service_charge: Decimal,
    pub total_amount: Decimal,
    pub estimated_delivery_days: DeliveryDays,
    pub estimated_delivery_date: DeliveryDates,
    pub is_free_delivery: bool,
    pub zone: DeliveryZone,
}
