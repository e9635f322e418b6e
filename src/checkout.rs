//! Checkout form validation and order quoting.

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::cart::Cart;
use crate::error::AppError;
use crate::pricing::{OrderSummary, PricingCalculator};
use crate::regions::RegionRegistry;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex pattern")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid phone regex pattern"));

static PINCODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("Invalid pincode regex pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    Cod,
    Razorpay,
}

impl std::str::FromStr for PaymentMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "COD" => Ok(PaymentMethod::Cod),
            "RAZORPAY" => Ok(PaymentMethod::Razorpay),
            other => Err(AppError::InvalidArgument(format!(
                "Unsupported payment method: {}",
                other
            ))),
        }
    }
}

/// Problem with a single checkout field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Checkout form as submitted by the shopper
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub payment_method: String,
    pub notes: Option<String>,
}

impl CheckoutForm {
    /// Check every field and return all problems found, empty when the
    /// form can be submitted
    pub fn validate(&self, registry: &RegionRegistry) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let name = self.customer_name.trim();
        if name.is_empty() {
            errors.push(FieldError::new("customer_name", "Name is required"));
        } else if name.chars().count() < 2 {
            errors.push(FieldError::new(
                "customer_name",
                "Name must be at least 2 characters",
            ));
        }

        let email = self.customer_email.trim();
        if email.is_empty() {
            errors.push(FieldError::new("customer_email", "Email is required"));
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.push(FieldError::new("customer_email", "Enter a valid email address"));
        }

        let phone = self.customer_phone.trim();
        if phone.is_empty() {
            errors.push(FieldError::new("customer_phone", "Phone number is required"));
        } else if !PHONE_PATTERN.is_match(phone) {
            errors.push(FieldError::new(
                "customer_phone",
                "Phone number must be exactly 10 digits",
            ));
        }

        if self.shipping_address.trim().is_empty() {
            errors.push(FieldError::new("shipping_address", "Address is required"));
        }

        let state = registry.state_by_name(&self.state);
        if self.state.trim().is_empty() {
            errors.push(FieldError::new("state", "State is required"));
        } else if state.is_none() {
            errors.push(FieldError::new(
                "state",
                format!("We do not deliver to {}", self.state.trim()),
            ));
        }

        let city = self.city.trim();
        if city.is_empty() {
            errors.push(FieldError::new("city", "City is required"));
        } else if let Some(state) = state {
            let cities = registry.cities_for(&state.code);
            if !cities.is_empty() && !cities.iter().any(|c| c.eq_ignore_ascii_case(city)) {
                errors.push(FieldError::new(
                    "city",
                    format!("{} is not a city in {}", city, state.name),
                ));
            }
        }

        let pincode = self.pincode.trim();
        if pincode.is_empty() {
            errors.push(FieldError::new("pincode", "Pincode is required"));
        } else if !PINCODE_PATTERN.is_match(pincode) {
            errors.push(FieldError::new("pincode", "Pincode must be exactly 6 digits"));
        }

        if self.payment_method.parse::<PaymentMethod>().is_err() {
            errors.push(FieldError::new(
                "payment_method",
                "Payment method must be COD or RAZORPAY",
            ));
        }

        errors
    }

    /// Single-line address sent with the order
    pub fn shipping_address(&self) -> String {
        format!(
            "{}, {}, {} - {}",
            self.shipping_address.trim(),
            self.city.trim(),
            self.state.trim(),
            self.pincode.trim()
        )
    }
}

/// Priced checkout for a cart shipped to one state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutQuote {
    pub item_count: u64,
    pub summary: OrderSummary,
    pub amount_to_free_delivery: Decimal,
}

impl CheckoutQuote {
    pub fn build(
        calculator: &PricingCalculator,
        cart: &Cart,
        state: &str,
        today: NaiveDate,
    ) -> Result<Self, AppError> {
        if cart.is_empty() {
            return Err(AppError::InvalidArgument(
                "Cannot check out an empty cart".to_string(),
            ));
        }

        let subtotal = cart.subtotal()?;
        let summary = calculator.compute_order_summary_on(subtotal, state, None, today)?;

        Ok(Self {
            item_count: cart.total_items(),
            amount_to_free_delivery: calculator.amount_to_free_delivery(subtotal),
            summary,
        })
    }
}
