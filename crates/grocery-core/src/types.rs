//! # Domain Types
//!
//! Core domain types used by the terminal.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  BulkPricing    │   │     Signal      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (fixed)   │   │  NoBulkDiscount │   │  Failure = 0    │       │
//! │  │  name           │   │  BulkDiscount   │   │  Success = 1    │       │
//! │  │  unit_price     │   │   { qty, price }│   └─────────────────┘       │
//! │  │  bulk_qty       │   └─────────────────┘                              │
//! │  │  bulk_price     │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A product's `code` is its only identity. It is set once in
//! [`Product::new`] and has no setter, so a code index derived from a
//! catalog can never drift from the products it was derived from.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::pricing::BulkPricing;
use crate::validation::validate_bulk_quantity;

// =============================================================================
// Product
// =============================================================================

/// A product on the grocery market's shelves.
///
/// Fields other than `code` are freely mutable and unvalidated; callers own
/// their consistency (non-negative prices and so on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique code within a catalog, e.g. "A".
    code: String,

    /// Display name, may be empty.
    #[serde(default)]
    pub name: String,

    /// Price of a single unit.
    #[serde(default)]
    pub unit_price: f64,

    /// Units needed for one bulk group. 1 means no bulk discount.
    #[serde(default = "default_bulk_qty")]
    pub bulk_qty: u32,

    /// Price of one bulk group of `bulk_qty` units.
    #[serde(default)]
    pub bulk_price: f64,
}

fn default_bulk_qty() -> u32 {
    1
}

impl Product {
    /// Creates an unpriced product.
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::Product;
    ///
    /// let product = Product::new("A");
    /// assert_eq!(product.code(), "A");
    /// assert_eq!(product.bulk_qty, 1);
    /// assert_eq!(product.unit_price, 0.0);
    /// ```
    pub fn new(code: impl Into<String>) -> Self {
        Product {
            code: code.into(),
            name: String::new(),
            unit_price: 0.0,
            bulk_qty: 1,
            bulk_price: 0.0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets a unit price with no bulk discount.
    pub fn with_unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = unit_price;
        self.bulk_qty = 1;
        self.bulk_price = unit_price;
        self
    }

    /// Returns the product code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the pricing tier described by the current fields.
    ///
    /// A product whose bulk group is a single unit at the unit price has no
    /// discount. Anything else is reported as the literal bulk tier.
    pub fn bulk_pricing(&self) -> BulkPricing {
        if self.bulk_qty == 1 && self.bulk_price == self.unit_price {
            BulkPricing::NoBulkDiscount
        } else {
            BulkPricing::BulkDiscount {
                qty: self.bulk_qty,
                price: self.bulk_price,
            }
        }
    }

    /// Writes a unit price and pricing tier.
    ///
    /// The product is left untouched when the tier's quantity is zero.
    pub fn apply_pricing(&mut self, unit_price: f64, pricing: BulkPricing) -> CoreResult<()> {
        let (bulk_qty, bulk_price) = pricing.resolve(unit_price);
        validate_bulk_quantity(&self.code, bulk_qty)?;

        self.unit_price = unit_price;
        self.bulk_qty = bulk_qty;
        self.bulk_price = bulk_price;
        Ok(())
    }
}

// =============================================================================
// Signal
// =============================================================================

/// Binary success code spoken by legacy register hosts.
///
/// Terminal operations return `Result`s; hosts that still expect `1`/`0`
/// convert with [`Signal::from_result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Failure = 0,
    Success = 1,
}

impl Signal {
    /// Maps `Ok` to [`Signal::Success`] and `Err` to [`Signal::Failure`].
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::{Signal, Terminal};
    ///
    /// let mut terminal = Terminal::new();
    /// let scanned = terminal.scan_product("UNKNOWN");
    /// assert_eq!(Signal::from_result(&scanned).code(), 0);
    /// ```
    pub fn from_result<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Signal::Success,
            Err(_) => Signal::Failure,
        }
    }

    /// Returns the numeric code (1 or 0).
    #[inline]
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Signal::Success)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_product_defaults() {
        let product = Product::new("A");
        assert_eq!(product.code(), "A");
        assert_eq!(product.name, "");
        assert_eq!(product.unit_price, 0.0);
        assert_eq!(product.bulk_qty, 1);
        assert_eq!(product.bulk_price, 0.0);
    }

    #[test]
    fn test_product_fields_are_mutable() {
        let mut product = Product::new("A").with_name("Apples");
        product.unit_price = 1.25;
        product.bulk_qty = 3;
        product.bulk_price = 3.0;

        assert_eq!(product.name, "Apples");
        assert_eq!(product.unit_price, 1.25);
        assert_eq!(product.bulk_qty, 3);
        assert_eq!(product.bulk_price, 3.0);
    }

    #[test]
    fn test_with_unit_price_keeps_no_discount_identity() {
        let product = Product::new("B").with_unit_price(4.25);
        assert_eq!(product.bulk_price, 4.25);
        assert_eq!(product.bulk_pricing(), BulkPricing::NoBulkDiscount);
    }

    #[test]
    fn test_apply_pricing_bulk_discount() {
        let mut product = Product::new("C");
        product
            .apply_pricing(1.0, BulkPricing::BulkDiscount { qty: 6, price: 5.0 })
            .unwrap();

        assert_eq!(product.unit_price, 1.0);
        assert_eq!(product.bulk_qty, 6);
        assert_eq!(product.bulk_price, 5.0);
        assert!(product.bulk_pricing().is_discount());
    }

    #[test]
    fn test_apply_pricing_rejects_zero_quantity() {
        let mut product = Product::new("C").with_unit_price(1.0);
        let err = product
            .apply_pricing(9.0, BulkPricing::BulkDiscount { qty: 0, price: 5.0 })
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidBulkQuantity { qty: 0, .. }));
        assert_eq!(product.unit_price, 1.0);
        assert_eq!(product.bulk_qty, 1);
    }

    #[test]
    fn test_product_deserializes_with_defaults() {
        let product: Product = serde_json::from_str(r#"{"code":"D","unitPrice":0.75}"#).unwrap();
        assert_eq!(product.code(), "D");
        assert_eq!(product.unit_price, 0.75);
        assert_eq!(product.bulk_qty, 1);
        assert_eq!(product.bulk_price, 0.0);
    }

    #[test]
    fn test_signal_codes() {
        let ok: Result<(), ()> = Ok(());
        let err: Result<(), ()> = Err(());

        assert_eq!(Signal::from_result(&ok).code(), 1);
        assert_eq!(Signal::from_result(&err).code(), 0);
        assert!(Signal::Success.is_success());
    }
}
