use chrono::{Days, Local, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Arc;

use crate::error::AppError;
use crate::pricing::models::{DeliveryDates, DeliveryDays, DeliveryZone, OrderSummary, PricingPolicy};
use crate::regions::RegionRegistry;

/// Round to the nearest whole currency unit, halves away from zero.
///
/// Amounts are never negative here, so this is round-half-up.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculator for order totals, shipping and delivery estimates.
///
/// Holds no mutable state; clones share the same tables and every call
/// builds a fresh [`OrderSummary`] from its inputs alone.
#[derive(Debug, Clone)]
pub struct PricingCalculator {
    policy: Arc<PricingPolicy>,
    registry: Arc<RegionRegistry>,
}

impl PricingCalculator {
    /// Create a new calculator
    pub fn new(policy: PricingPolicy, registry: RegionRegistry) -> Self {
        Self {
            policy: Arc::new(policy),
            registry: Arc::new(registry),
        }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    pub fn registry(&self) -> &RegionRegistry {
        &self.registry
    }

    /// Price an order for delivery to `region`, counting days from today's
    /// local calendar date
    pub fn compute_order_summary(
        &self,
        subtotal: Decimal,
        region: &str,
        weight_kg: Option<Decimal>,
    ) -> Result<OrderSummary, AppError> {
        self.compute_order_summary_on(subtotal, region, weight_kg, Local::now().date_naive())
    }

    /// Price an order, counting delivery days from `today`
    pub fn compute_order_summary_on(
        &self,
        subtotal: Decimal,
        region: &str,
        weight_kg: Option<Decimal>,
        today: NaiveDate,
    ) -> Result<OrderSummary, AppError> {
        if subtotal < Decimal::ZERO {
            return Err(AppError::InvalidArgument(format!(
                "subtotal must not be negative, got {}",
                subtotal
            )));
        }

        let weight = weight_kg.unwrap_or(self.policy.default_weight_kg);
        if weight < Decimal::ZERO {
            return Err(AppError::InvalidArgument(format!(
                "weight must not be negative, got {}",
                weight
            )));
        }

        let zone = self.zone_for(region)?;
        let rate = self.policy.zones.get(zone);

        let tax = round_half_up(in_range(subtotal.checked_mul(self.policy.tax_rate), "tax")?);

        let is_free_delivery = subtotal >= self.policy.free_delivery_threshold;
        let delivery_charge = if is_free_delivery {
            Decimal::ZERO
        } else {
            let weight_charge = in_range(weight.checked_mul(rate.per_kg_charge), "delivery charge")?;
            round_half_up(in_range(rate.base_charge.checked_add(weight_charge), "delivery charge")?)
        };

        let service_charge = self.policy.service_charge;
        let total_amount = [tax, delivery_charge, service_charge]
            .into_iter()
            .try_fold(subtotal, |acc, amount| {
                in_range(acc.checked_add(amount), "total amount")
            })?;

        let estimated_delivery_days = DeliveryDays {
            min: delivery_days(self.policy.creation_days, rate.min_delivery_days)?,
            max: delivery_days(self.policy.creation_days, rate.max_delivery_days)?,
        };
        let estimated_delivery_date = DeliveryDates {
            earliest: add_days(today, estimated_delivery_days.min)?,
            latest: add_days(today, estimated_delivery_days.max)?,
        };

        Ok(OrderSummary {
            subtotal,
            tax,
            tax_rate_percent: self.tax_rate_percent(),
            delivery_charge,
            service_charge,
            total_amount,
            estimated_delivery_days,
            estimated_delivery_date,
            is_free_delivery,
            zone,
        })
    }

    /// Base charge of the region's zone.
    ///
    /// Ignores weight and the free-delivery threshold; meant for a quick
    /// estimate before the cart is known.
    pub fn delivery_charge_preview(&self, region: &str) -> Decimal {
        let zone = self.registry.resolve(region).zone;
        self.policy.zones.get(zone).base_charge
    }

    pub fn free_delivery_threshold(&self) -> Decimal {
        self.policy.free_delivery_threshold
    }

    pub fn tax_rate_percent(&self) -> Decimal {
        (self.policy.tax_rate * Decimal::ONE_HUNDRED).normalize()
    }

    /// How much more the customer must add to the cart for free delivery
    pub fn amount_to_free_delivery(&self, subtotal: Decimal) -> Decimal {
        (self.policy.free_delivery_threshold - subtotal).max(Decimal::ZERO)
    }

    fn zone_for(&self, region: &str) -> Result<DeliveryZone, AppError> {
        let resolution = self.registry.resolve(region);
        if resolution.is_fallback() && self.policy.strict_regions {
            return Err(AppError::NotFound(format!("Unknown region: {}", region)));
        }
        Ok(resolution.zone)
    }
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self::new(PricingPolicy::default(), RegionRegistry::builtin())
    }
}

fn in_range(value: Option<Decimal>, what: &str) -> Result<Decimal, AppError> {
    value.ok_or_else(|| AppError::InvalidArgument(format!("{} is out of range", what)))
}

fn delivery_days(creation_days: u32, transit_days: u32) -> Result<u32, AppError> {
    creation_days.checked_add(transit_days).ok_or_else(|| {
        AppError::InvalidArgument(format!(
            "{} creation days + {} transit days is out of range",
            creation_days, transit_days
        ))
    })
}

fn add_days(date: NaiveDate, days: u32) -> Result<NaiveDate, AppError> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| AppError::InvalidArgument(format!("{} + {} days is out of range", date, days)))
}
