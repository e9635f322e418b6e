//! Cart aggregation and reconciliation of local cart state with server
//! responses.
//!
//! The storefront backend answers every cart mutation with the full cart,
//! in whatever order it likes. The views here fold those responses back
//! into what the customer was looking at.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::AppError;
use crate::pricing::{OrderSummary, PricingCalculator};

/// Region priced on the cart page before the customer picks an address
pub const DEFAULT_CART_REGION: &str = "Rajasthan";

/// One product line in a cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: u64,
    pub product_id: u64,
    #[serde(default)]
    pub product_name: String,
    pub quantity: u32,
    /// Unit price captured when the line was added
    pub unit_price: Decimal,
}

impl CartLine {
    pub fn line_total(&self) -> Result<Decimal, AppError> {
        self.unit_price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(|| {
                AppError::InvalidArgument(format!(
                    "Line total for item {} is out of range",
                    self.item_id
                ))
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub items: Vec<CartLine>,
}

impl Cart {
    pub fn subtotal(&self) -> Result<Decimal, AppError> {
        self.items.iter().try_fold(Decimal::ZERO, |acc, line| {
            acc.checked_add(line.line_total()?).ok_or_else(|| {
                AppError::InvalidArgument("Cart subtotal is out of range".to_string())
            })
        })
    }

    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn line_for_product(&self, product_id: u64) -> Option<&CartLine> {
        self.items.iter().find(|line| line.product_id == product_id)
    }

    fn item_ids(&self) -> Vec<u64> {
        self.items.iter().map(|line| line.item_id).collect()
    }
}

/// A change sent to the backend for one cart line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartMutation {
    Update { item_id: u64, quantity: u32 },
    Remove { item_id: u64 },
    Clear,
}

impl CartMutation {
    /// Quantities of zero or below remove the line
    pub fn for_quantity(item_id: u64, quantity: i64) -> Self {
        if quantity <= 0 {
            CartMutation::Remove { item_id }
        } else {
            CartMutation::Update {
                item_id,
                quantity: u32::try_from(quantity).unwrap_or(u32::MAX),
            }
        }
    }

    /// Item ids, in display order, that should survive this mutation
    pub fn ordering_hint(&self, current: &Cart) -> Vec<u64> {
        match self {
            CartMutation::Update { .. } => current.item_ids(),
            CartMutation::Remove { item_id } => current
                .items
                .iter()
                .map(|line| line.item_id)
                .filter(|id| id != item_id)
                .collect(),
            CartMutation::Clear => Vec::new(),
        }
    }
}

/// Reorder `cart` to follow `hint`.
///
/// Lines not mentioned in the hint keep their relative server order and
/// go after every known line.
pub fn preserve_order(hint: &[u64], mut cart: Cart) -> Cart {
    let position: HashMap<u64, usize> = hint
        .iter()
        .enumerate()
        .map(|(idx, id)| (*id, idx))
        .collect();

    cart.items
        .sort_by_key(|line| position.get(&line.item_id).copied().unwrap_or(usize::MAX));
    cart
}

/// What the cart page shows: the cart and its price for one region
#[derive(Debug, Clone)]
pub struct CartView {
    calculator: PricingCalculator,
    region: String,
    cart: Option<Cart>,
    summary: Option<OrderSummary>,
}

impl CartView {
    pub fn new(calculator: PricingCalculator) -> Self {
        Self::for_region(calculator, DEFAULT_CART_REGION)
    }

    pub fn for_region(calculator: PricingCalculator, region: impl Into<String>) -> Self {
        Self {
            calculator,
            region: region.into(),
            cart: None,
            summary: None,
        }
    }

    pub fn cart(&self) -> Option<&Cart> {
        self.cart.as_ref()
    }

    pub fn summary(&self) -> Option<&OrderSummary> {
        self.summary.as_ref()
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Replace the cart with a freshly fetched one
    pub fn load(&mut self, cart: Cart, today: NaiveDate) -> Result<(), AppError> {
        self.cart = Some(cart);
        self.refresh_summary(today)
    }

    /// Change the region being priced, e.g. when the checkout state changes
    pub fn set_region(&mut self, region: impl Into<String>, today: NaiveDate) -> Result<(), AppError> {
        self.region = region.into();
        self.refresh_summary(today)
    }

    /// Fold the server's answer to `mutation` into the view, keeping the
    /// line order the customer saw
    pub fn reconcile(
        &mut self,
        mutation: &CartMutation,
        server_cart: Cart,
        today: NaiveDate,
    ) -> Result<(), AppError> {
        if matches!(mutation, CartMutation::Clear) {
            self.clear();
            return Ok(());
        }

        let hint = self
            .cart
            .as_ref()
            .map(|current| mutation.ordering_hint(current))
            .unwrap_or_default();

        self.cart = Some(preserve_order(&hint, server_cart));
        self.refresh_summary(today)
    }

    /// Empty the cart locally, keeping its identity
    pub fn clear(&mut self) {
        if let Some(cart) = self.cart.as_mut() {
            cart.items.clear();
        }
        self.summary = None;
    }

    pub fn amount_to_free_delivery(&self) -> Result<Decimal, AppError> {
        let subtotal = self.cart.as_ref().map(Cart::subtotal).transpose()?;
        Ok(self
            .calculator
            .amount_to_free_delivery(subtotal.unwrap_or_default()))
    }

    fn refresh_summary(&mut self, today: NaiveDate) -> Result<(), AppError> {
        self.summary = match self.cart.as_ref() {
            Some(cart) if !cart.is_empty() => Some(self.calculator.compute_order_summary_on(
                cart.subtotal()?,
                &self.region,
                None,
                today,
            )?),
            _ => None,
        };
        Ok(())
    }
}

/// Outcome of asking to change a product's cart quantity by a delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityPlan {
    Apply(CartMutation),
    StockExceeded { available: u32 },
    NotInCart,
    InFlight,
}

/// Product-keyed cart lookup used by the catalog grid
#[derive(Debug, Clone, Default)]
pub struct CartIndex {
    lines: HashMap<u64, CartLine>,
    in_flight: HashSet<u64>,
}

impl CartIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a server response
    pub fn sync(&mut self, cart: &Cart) {
        self.lines = cart
            .items
            .iter()
            .map(|line| (line.product_id, line.clone()))
            .collect();
    }

    pub fn contains(&self, product_id: u64) -> bool {
        self.lines.contains_key(&product_id)
    }

    pub fn quantity_of(&self, product_id: u64) -> u32 {
        self.lines
            .get(&product_id)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    pub fn is_updating(&self, product_id: u64) -> bool {
        self.in_flight.contains(&product_id)
    }

    /// Work out the mutation for a +/- button press
    pub fn plan_delta(&self, product_id: u64, delta: i64, stock_quantity: u32) -> QuantityPlan {
        if self.is_updating(product_id) {
            return QuantityPlan::InFlight;
        }
        let Some(line) = self.lines.get(&product_id) else {
            return QuantityPlan::NotInCart;
        };

        let new_quantity = i64::from(line.quantity) + delta;
        if new_quantity > i64::from(stock_quantity) {
            return QuantityPlan::StockExceeded {
                available: stock_quantity,
            };
        }
        QuantityPlan::Apply(CartMutation::for_quantity(line.item_id, new_quantity))
    }

    pub fn begin_update(&mut self, product_id: u64) {
        self.in_flight.insert(product_id);
    }

    /// Apply the server's answer; `None` means the request failed
    pub fn finish_update(&mut self, product_id: u64, server_cart: Option<&Cart>) {
        if let Some(cart) = server_cart {
            self.sync(cart);
        }
        self.in_flight.remove(&product_id);
    }
}
