//! # grocery-core: Point-of-Sale Terminal for a Grocery Market
//!
//! This crate is the whole of the grocery market's till logic: a product
//! catalog with unit and bulk pricing, a scan accumulator, and the total
//! calculation that drains it. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Grocery POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Register Host (any UI / driver)                │   │
//! │  │    Load Catalog ──► Price ──► Scan ──► TOTAL                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ grocery-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │ terminal  │  │   state   │  │   │
//! │  │   │  Product  │  │BulkPricing│  │ Terminal  │  │  Shared-  │  │   │
//! │  │   │  Signal   │  │line_total │  │ ScanEntry │  │  Terminal │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Signal)
//! - [`pricing`] - Bulk pricing tiers and the line total formula
//! - [`terminal`] - The terminal: catalog, scans, totals
//! - [`state`] - Lock-guarded terminal for multi-threaded hosts
//! - [`config`] - Terminal configuration
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Owned Catalog**: Catalogs cross the terminal boundary only as copies
//! 2. **Native Prices**: Prices are `f64`, summed in scan order
//! 3. **Explicit Errors**: Every failure is a typed [`CoreError`], never a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use grocery_core::{BulkPricing, Product, Terminal};
//!
//! let mut terminal = Terminal::new();
//! terminal
//!     .set_catalog(&[Product::new("A"), Product::new("B"), Product::new("C"), Product::new("D")])
//!     .unwrap();
//!
//! terminal.set_pricing("A", 1.25, BulkPricing::BulkDiscount { qty: 3, price: 3.0 }).unwrap();
//! terminal.set_pricing("B", 4.25, BulkPricing::NoBulkDiscount).unwrap();
//! terminal.set_pricing("C", 1.0, BulkPricing::BulkDiscount { qty: 6, price: 5.0 }).unwrap();
//! terminal.set_pricing("D", 0.75, BulkPricing::NoBulkDiscount).unwrap();
//!
//! for code in ["A", "B", "C", "D", "A", "B", "A"] {
//!     terminal.scan_product(code).unwrap();
//! }
//!
//! assert_eq!(terminal.calculate_total().unwrap(), 13.25);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod pricing;
pub mod state;
pub mod terminal;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use grocery_core::Terminal` instead of
// `use grocery_core::terminal::Terminal`

pub use config::{DuplicateCodePolicy, TerminalConfig};
pub use error::{CoreError, CoreResult, ValidationError};
pub use pricing::BulkPricing;
pub use state::SharedTerminal;
pub use terminal::{ScanEntry, Terminal};
pub use types::*;
