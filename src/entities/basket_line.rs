//! Basket line entity - One product in the basket with its quantity.
//!
//! The unit price is a snapshot taken from the catalog when the line was last
//! written, not a live reference to the product.

use rust_decimal::Decimal;
use serde::Serialize;

/// A single basket entry keyed by product name
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BasketLine {
    /// Name of the catalog product this line refers to
    pub product_name: String,
    /// Number of units, always at least 1
    pub quantity: u32,
    /// Catalog price captured at the last update
    pub unit_price: Decimal,
}

impl BasketLine {
    pub(crate) const fn new(product_name: String, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            product_name,
            quantity,
            unit_price,
        }
    }

    /// Stable identity for list diffing, derived from the product name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.product_name
    }

    /// `unit_price * quantity`, exact.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}
