//! # Shared Terminal State
//!
//! A [`Terminal`] that several threads can drive at once.
//!
//! ## Thread Safety
//! The terminal is wrapped in `Arc<Mutex<T>>` because:
//! 1. A register host may handle scanner input and the TOTAL key on
//!    different threads
//! 2. `scan_product` and `calculate_total` both read-modify-write the
//!    scan accumulator
//! 3. A total must never see half of a scan
//!
//! `Terminal` itself stays lock-free; hosts that never share it pay nothing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::CoreResult;
use crate::terminal::Terminal;

/// Lock-guarded handle to a terminal. Clones share the same terminal.
///
/// ## Why Not RwLock?
/// Nearly every terminal operation mutates (scans, totals, pricing), so a
/// reader/writer split would buy nothing.
#[derive(Debug, Clone, Default)]
pub struct SharedTerminal {
    terminal: Arc<Mutex<Terminal>>,
}

impl SharedTerminal {
    /// Wraps a terminal for shared use.
    pub fn new(terminal: Terminal) -> Self {
        SharedTerminal {
            terminal: Arc::new(Mutex::new(terminal)),
        }
    }

    // Terminal operations validate before they write, so a poisoned
    // terminal is still consistent.
    fn lock(&self) -> MutexGuard<'_, Terminal> {
        self.terminal.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the terminal.
    ///
    /// ## Usage
    /// ```rust
    /// use grocery_core::SharedTerminal;
    ///
    /// let shared = SharedTerminal::default();
    /// let pending = shared.with_terminal(|t| t.pending_scans().len());
    /// assert_eq!(pending, 0);
    /// ```
    pub fn with_terminal<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Terminal) -> R,
    {
        let terminal = self.lock();
        f(&terminal)
    }

    /// Executes a function with write access to the terminal.
    pub fn with_terminal_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Terminal) -> R,
    {
        let mut terminal = self.lock();
        f(&mut terminal)
    }

    /// Records one scan under the lock.
    pub fn scan_product(&self, code: &str) -> CoreResult<u32> {
        self.lock().scan_product(code)
    }

    /// Totals and clears the basket under the lock.
    pub fn calculate_total(&self) -> CoreResult<f64> {
        self.lock().calculate_total()
    }
}

impl From<Terminal> for SharedTerminal {
    fn from(terminal: Terminal) -> Self {
        SharedTerminal::new(terminal)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::pricing::BulkPricing;
    use crate::types::Product;

    fn shared_market() -> SharedTerminal {
        let mut terminal = Terminal::new();
        terminal
            .set_catalog(&[Product::new("A"), Product::new("B")])
            .unwrap();
        terminal
            .set_pricing("A", 1.25, BulkPricing::BulkDiscount { qty: 3, price: 3.0 })
            .unwrap();
        terminal
            .set_pricing("B", 4.25, BulkPricing::NoBulkDiscount)
            .unwrap();
        SharedTerminal::from(terminal)
    }

    #[test]
    fn test_clones_share_terminal() {
        let shared = shared_market();
        let other = shared.clone();

        other.scan_product("B").unwrap();

        assert_eq!(shared.calculate_total().unwrap(), 4.25);
        assert_eq!(other.calculate_total().unwrap(), 0.0);
    }

    #[test]
    fn test_concurrent_scans_are_all_counted() {
        let shared = shared_market();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let lane = shared.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        lane.scan_product("A").unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let pending = shared.with_terminal(|t| t.pending_scans().to_vec());
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].quantity, 100);

        // 33 groups of 3 at $3.00 plus one loose at $1.25
        assert_eq!(shared.calculate_total().unwrap(), 100.25);
    }

    #[test]
    fn test_with_terminal_mut() {
        let shared = shared_market();
        shared.with_terminal_mut(|t| t.set_terminal_code("LANE-02"));

        let code = shared.with_terminal(|t| t.terminal_code().map(str::to_string));
        assert_eq!(code.as_deref(), Some("LANE-02"));
    }
}
