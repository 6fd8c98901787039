//! # Point-of-Sale Terminal
//!
//! Owns a product catalog and the scans of the basket currently at the till.
//!
//! ## Terminal Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Terminal Operations                                  │
//! │                                                                         │
//! │  Register Action          Terminal Method          State Change         │
//! │  ───────────────          ───────────────          ────────────         │
//! │                                                                         │
//! │  Load catalog ───────────► set_catalog() ────────► catalog = copy      │
//! │                                                    codes = [A, B, ..]  │
//! │                                                                         │
//! │  Price product ──────────► set_pricing() ────────► catalog[i].prices   │
//! │                                                                         │
//! │  Scan barcode ───────────► scan_product() ───────► scans[code] += 1    │
//! │                                                                         │
//! │  Press TOTAL ────────────► calculate_total() ────► scans.clear()       │
//! │                                                                         │
//! │  NOTE: calculate_total() is a one-shot read. A second call with no     │
//! │        scans in between returns 0.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The catalog never leaves the terminal by reference. [`Terminal::set_catalog`]
//! copies its input and [`Terminal::get_catalog`] hands out a copy, so
//! neither side can change the other's products afterwards.
//!
//! ## Example
//! ```rust
//! use grocery_core::{BulkPricing, Product, Terminal};
//!
//! let mut terminal = Terminal::new();
//! terminal
//!     .set_catalog(&[Product::new("A"), Product::new("B")])
//!     .unwrap();
//! terminal
//!     .set_pricing("A", 1.25, BulkPricing::BulkDiscount { qty: 3, price: 3.0 })
//!     .unwrap();
//! terminal.set_pricing("B", 4.25, BulkPricing::NoBulkDiscount).unwrap();
//!
//! for code in ["A", "B", "A", "A"] {
//!     terminal.scan_product(code).unwrap();
//! }
//!
//! assert_eq!(terminal.calculate_total().unwrap(), 7.25);
//! assert_eq!(terminal.calculate_total().unwrap(), 0.0);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::config::{DuplicateCodePolicy, TerminalConfig};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::pricing::{line_total, BulkPricing};
use crate::types::Product;
use crate::validation::validate_unique_codes;

/// One line of the scan accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScanEntry {
    /// Product code as scanned.
    pub code: String,

    /// Times scanned since the last total. Always at least 1.
    pub quantity: u32,
}

/// A grocery market till.
///
/// ## Invariants
/// - `codes` lists the catalog's product codes in catalog order. Product
///   codes have no setter and the catalog is only replaced wholesale, so the
///   index can never go stale.
/// - `scans` holds one entry per code, in first-scan order, quantity ≥ 1.
/// - `catalog` is `None` until a catalog is installed, and again after an
///   install fails.
#[derive(Debug, Clone, Default)]
pub struct Terminal {
    terminal_code: Option<String>,
    catalog: Option<Vec<Product>>,
    codes: Vec<String>,
    scans: Vec<ScanEntry>,
    duplicate_codes: DuplicateCodePolicy,
}

impl Terminal {
    /// Creates a terminal with no catalog and default configuration.
    pub fn new() -> Self {
        Terminal::default()
    }

    /// Creates a terminal from configuration.
    pub fn with_config(config: TerminalConfig) -> Self {
        Terminal {
            terminal_code: config.terminal_code,
            duplicate_codes: config.duplicate_codes,
            ..Terminal::default()
        }
    }

    /// Returns the terminal label, if one was set.
    pub fn terminal_code(&self) -> Option<&str> {
        self.terminal_code.as_deref()
    }

    /// Sets the terminal label.
    pub fn set_terminal_code(&mut self, code: impl Into<String>) {
        self.terminal_code = Some(code.into());
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    /// Replaces the catalog with a copy of `products`.
    ///
    /// ## Behavior
    /// - Duplicate codes fail with [`CoreError::DuplicateCode`] unless the
    ///   terminal was configured with [`DuplicateCodePolicy::FirstMatchWins`]
    /// - The copy is checked against `products`; a mismatch fails with
    ///   [`CoreError::CatalogCopyMismatch`]
    /// - On ANY failure the terminal is left with no catalog at all
    ///
    /// Scans already in the accumulator are kept.
    pub fn set_catalog(&mut self, products: &[Product]) -> CoreResult<()> {
        let result = self.install_catalog(products);
        if let Err(err) = &result {
            warn!(error = %err, "Catalog rejected, terminal catalog reset");
            self.catalog = None;
            self.codes.clear();
        }
        result
    }

    fn install_catalog(&mut self, products: &[Product]) -> CoreResult<()> {
        if self.duplicate_codes == DuplicateCodePolicy::Reject {
            validate_unique_codes(products).map_err(|err| match err {
                ValidationError::Duplicate { value, .. } => CoreError::DuplicateCode(value),
                other => other.into(),
            })?;
        }

        let copy = products.to_vec();
        verify_copy(products, &copy)?;

        self.codes = copy.iter().map(|p| p.code().to_string()).collect();
        self.catalog = Some(copy);

        info!(
            terminal_code = self.terminal_code().unwrap_or_default(),
            products = self.codes.len(),
            "Catalog installed"
        );
        Ok(())
    }

    /// Returns a copy of the catalog in catalog order.
    ///
    /// A terminal without a catalog returns an empty list.
    pub fn get_catalog(&self) -> CoreResult<Vec<Product>> {
        let Some(catalog) = &self.catalog else {
            return Ok(Vec::new());
        };

        let copy = catalog.clone();
        verify_copy(catalog, &copy)?;
        Ok(copy)
    }

    /// Checks if a catalog is installed.
    pub fn has_catalog(&self) -> bool {
        self.catalog.is_some()
    }

    /// Looks up a product by code. The first match wins.
    pub fn product(&self, code: &str) -> Option<&Product> {
        self.catalog
            .as_deref()?
            .iter()
            .find(|product| product.code() == code)
    }

    // -------------------------------------------------------------------------
    // Pricing
    // -------------------------------------------------------------------------

    /// Sets the unit price and bulk tier of the product with `code`.
    ///
    /// ## Behavior
    /// - [`BulkPricing::NoBulkDiscount`]: `bulk_qty = 1`, `bulk_price = unit_price`
    /// - [`BulkPricing::BulkDiscount`]: both fields stored exactly as given,
    ///   including a free bulk group (`price == 0.0`)
    ///
    /// ## Errors
    /// - [`CoreError::ProductNotFound`] if no product has `code`
    /// - [`CoreError::InvalidBulkQuantity`] for a bulk quantity of zero; the
    ///   product keeps its previous pricing
    pub fn set_pricing(
        &mut self,
        code: &str,
        unit_price: f64,
        pricing: BulkPricing,
    ) -> CoreResult<()> {
        let product = self
            .catalog
            .as_mut()
            .and_then(|catalog| catalog.iter_mut().find(|product| product.code() == code))
            .ok_or_else(|| CoreError::ProductNotFound(code.to_string()))?;

        product.apply_pricing(unit_price, pricing)?;

        debug!(
            code = %code,
            unit_price,
            bulk_qty = product.bulk_qty,
            bulk_price = product.bulk_price,
            "Pricing set"
        );
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Scanning
    // -------------------------------------------------------------------------

    /// Records one scan of `code` and returns its new quantity.
    ///
    /// ## Errors
    /// [`CoreError::ProductNotFound`] if the catalog has no such code. The
    /// accumulator is not touched.
    pub fn scan_product(&mut self, code: &str) -> CoreResult<u32> {
        if !self.codes.iter().any(|known| known == code) {
            warn!(code = %code, "Scan rejected: product not in catalog");
            return Err(CoreError::ProductNotFound(code.to_string()));
        }

        let quantity = match self.scans.iter_mut().find(|entry| entry.code == code) {
            Some(entry) => {
                entry.quantity = entry.quantity.saturating_add(1);
                entry.quantity
            }
            None => {
                self.scans.push(ScanEntry {
                    code: code.to_string(),
                    quantity: 1,
                });
                1
            }
        };

        debug!(code = %code, quantity, "Product scanned");
        Ok(quantity)
    }

    /// Scans accumulated since the last total, in first-scan order.
    pub fn pending_scans(&self) -> &[ScanEntry] {
        &self.scans
    }

    /// Voids the basket without totalling it.
    pub fn clear_scans(&mut self) {
        if !self.scans.is_empty() {
            debug!(lines = self.scans.len(), "Scans voided");
        }
        self.scans.clear();
    }

    // -------------------------------------------------------------------------
    // Totals
    // -------------------------------------------------------------------------

    /// Prices every pending scan and empties the accumulator.
    ///
    /// Lines are summed in first-scan order, so the same scans always give
    /// the same `f64`, bit for bit.
    ///
    /// ## Errors
    /// - [`CoreError::ProductNotFound`] if a scanned code left the catalog
    /// - [`CoreError::InvalidBulkQuantity`] if a product has `bulk_qty == 0`
    ///
    /// On error the accumulator is kept so the basket can be totalled again
    /// once the catalog is fixed.
    pub fn calculate_total(&mut self) -> CoreResult<f64> {
        let mut total = 0.0;
        for entry in &self.scans {
            let product = self
                .product(&entry.code)
                .ok_or_else(|| CoreError::ProductNotFound(entry.code.clone()))?;
            total += line_total(product, entry.quantity)?;
        }

        info!(lines = self.scans.len(), total, "Total calculated");
        self.scans.clear();
        Ok(total)
    }

    #[cfg(test)]
    pub(crate) fn product_codes(&self) -> &[String] {
        &self.codes
    }
}

/// Checks that `copy` holds the same entries as `source`, in any order.
///
/// Entries are identified by product code.
pub(crate) fn verify_copy(source: &[Product], copy: &[Product]) -> CoreResult<()> {
    let source_codes: HashSet<&str> = source.iter().map(Product::code).collect();
    let copy_codes: HashSet<&str> = copy.iter().map(Product::code).collect();

    if source.len() != copy.len() || source_codes != copy_codes {
        return Err(CoreError::CatalogCopyMismatch {
            expected: source.len(),
            actual: copy.len(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
