//! # Pricing Module
//!
//! Bulk pricing tiers and the per-line total formula.
//!
//! ## How a Line is Priced
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BULK PRICING                                                           │
//! │                                                                         │
//! │  Product A: $1.25 each, or 3 for $3.00                                  │
//! │  Scanned: 7                                                             │
//! │                                                                         │
//! │    7 / 3 = 2 bulk groups   → 2 × $3.00 = $6.00                          │
//! │    7 % 3 = 1 loose unit    → 1 × $1.25 = $1.25                          │
//! │                                            ─────                        │
//! │                                            $7.25                        │
//! │                                                                         │
//! │  Division is on the QUANTITY (integers), never on the price.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices are native `f64`. No rounding is applied; a total is the plain
//! floating-point sum of its lines in scan order.
//!
//! ## Usage
//! ```rust
//! use grocery_core::pricing::{line_total, BulkPricing};
//! use grocery_core::Product;
//!
//! let mut apples = Product::new("A");
//! apples
//!     .apply_pricing(1.25, BulkPricing::BulkDiscount { qty: 3, price: 3.0 })
//!     .unwrap();
//!
//! assert_eq!(line_total(&apples, 7).unwrap(), 7.25);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::Product;

// =============================================================================
// Bulk Pricing
// =============================================================================

/// The pricing tier of a product.
///
/// ## Why a Sum Type?
/// The legacy API took `bulk_qty = 1, bulk_price = 0` to mean "no discount".
/// That made it impossible to tell "no discount" apart from a caller who
/// really wants a free bulk group. Here the two cases are distinct variants.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BulkPricing {
    /// Every unit costs the unit price.
    #[default]
    NoBulkDiscount,
    /// Every full group of `qty` units costs `price`.
    ///
    /// `price` of zero is allowed (free bulk group).
    BulkDiscount { qty: u32, price: f64 },
}

impl BulkPricing {
    /// Maps the legacy default-argument pair onto a tier.
    ///
    /// `(1, 0.0)` is what a caller passing no bulk arguments sent, so it
    /// becomes [`BulkPricing::NoBulkDiscount`]. Any other pair is taken
    /// literally.
    ///
    /// ## Example
    /// ```rust
    /// use grocery_core::pricing::BulkPricing;
    ///
    /// assert_eq!(BulkPricing::from_parts(1, 0.0), BulkPricing::NoBulkDiscount);
    /// assert_eq!(
    ///     BulkPricing::from_parts(6, 5.0),
    ///     BulkPricing::BulkDiscount { qty: 6, price: 5.0 }
    /// );
    /// ```
    pub fn from_parts(bulk_qty: u32, bulk_price: f64) -> Self {
        if bulk_qty == 1 && bulk_price == 0.0 {
            BulkPricing::NoBulkDiscount
        } else {
            BulkPricing::BulkDiscount {
                qty: bulk_qty,
                price: bulk_price,
            }
        }
    }

    /// Resolves the tier into the `(bulk_qty, bulk_price)` fields stored on
    /// a product with the given unit price.
    #[inline]
    pub fn resolve(&self, unit_price: f64) -> (u32, f64) {
        match *self {
            BulkPricing::NoBulkDiscount => (1, unit_price),
            BulkPricing::BulkDiscount { qty, price } => (qty, price),
        }
    }

    /// Checks if this tier discounts anything.
    #[inline]
    pub const fn is_discount(&self) -> bool {
        matches!(self, BulkPricing::BulkDiscount { .. })
    }
}

// =============================================================================
// Line Total
// =============================================================================

/// Prices `scanned_qty` units of a product.
///
/// `floor(qty / bulk_qty) * bulk_price + (qty % bulk_qty) * unit_price`
///
/// ## Errors
/// [`CoreError::InvalidBulkQuantity`] when the product's `bulk_qty` is zero.
///
/// ## Example
/// ```rust
/// use grocery_core::pricing::line_total;
/// use grocery_core::Product;
///
/// let mut milk = Product::new("C");
/// milk.unit_price = 1.0;
/// milk.bulk_qty = 6;
/// milk.bulk_price = 5.0;
///
/// // One six-pack plus one loose carton
/// assert_eq!(line_total(&milk, 7).unwrap(), 6.0);
/// ```
pub fn line_total(product: &Product, scanned_qty: u32) -> CoreResult<f64> {
    let bulk_qty = product.bulk_qty;
    if bulk_qty == 0 {
        return Err(CoreError::InvalidBulkQuantity {
            code: product.code().to_string(),
            qty: bulk_qty,
        });
    }

    let groups = scanned_qty / bulk_qty;
    let loose = scanned_qty % bulk_qty;
    Ok(groups as f64 * product.bulk_price + loose as f64 * product.unit_price)
}

// =============================================================================
// Unit Tests
// =============================================================================
