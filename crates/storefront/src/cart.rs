//! Session-owned shopping cart.
//!
//! The cart is the authoritative mapping from product id to cart line.
//! Quantity zero means "not in cart": any mutation that would leave a line
//! at quantity ≤ 0 deletes the line instead. Totals are derived on demand
//! and never stored.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use velvet_paw_core::{CurrencyCode, Price, ProductId};

use crate::catalog::{Catalog, Product};

/// One product's entry in the cart.
///
/// Carries a denormalized snapshot of the product fields the cart rows
/// display, so projections never need a catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Id of the referenced product.
    pub product_id: ProductId,
    /// Product display name.
    pub name: String,
    /// Variant line (e.g. "charcoal shell").
    pub variant: String,
    /// Unit price at the time the line was created.
    pub unit_price: Price,
    /// Units in the cart; always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Snapshot a product into a fresh line at quantity zero.
    ///
    /// The caller increments the quantity immediately; a zero-quantity
    /// line is never stored.
    fn snapshot(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            variant: product.variant.clone(),
            unit_price: product.price,
            quantity: 0,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Derived subtotal and total over the current cart contents.
///
/// No tax or shipping is modeled, so the two are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub subtotal: Price,
    pub total: Price,
}

/// The authoritative product-id → cart-line store.
///
/// Lines keep insertion order for display; totals are order-independent.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: IndexMap<ProductId, CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product_id` to the cart.
    ///
    /// Unknown ids are a silent no-op, mirroring the defensive lookup the
    /// rest of the system relies on. Returns the updated line, or `None`
    /// when nothing changed.
    pub fn add(&mut self, catalog: &Catalog, product_id: &ProductId) -> Option<&CartLine> {
        let Some(product) = catalog.get(product_id) else {
            tracing::debug!(product_id = %product_id, "ignoring add for unknown product");
            return None;
        };

        let line = self
            .lines
            .entry(product.id.clone())
            .or_insert_with(|| CartLine::snapshot(product));
        line.quantity = line.quantity.saturating_add(1);
        Some(line)
    }

    /// Adjust the quantity of an existing line by a signed delta.
    ///
    /// An absent line is a no-op. A resulting quantity ≤ 0 deletes the
    /// line entirely. Returns whether the cart changed.
    pub fn change_quantity(&mut self, product_id: &ProductId, delta: i64) -> bool {
        let Some(line) = self.lines.get_mut(product_id) else {
            tracing::debug!(product_id = %product_id, "ignoring quantity change for absent line");
            return false;
        };

        let updated = i64::from(line.quantity) + delta;
        if updated <= 0 {
            self.lines.shift_remove(product_id);
        } else {
            line.quantity = u32::try_from(updated).unwrap_or(u32::MAX);
        }
        true
    }

    /// Delete the line for `product_id` if present. Idempotent.
    ///
    /// Returns whether a line was actually removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        self.lines.shift_remove(product_id).is_some()
    }

    /// Derived totals over the current lines.
    ///
    /// Pure: recomputed on every call, never cached. `currency_code`
    /// supplies the currency for the empty-cart zero amount.
    #[must_use]
    pub fn totals(&self, currency_code: CurrencyCode) -> CartTotals {
        let subtotal = Price::new(
            self.lines
                .values()
                .fold(Decimal::ZERO, |sum, line| sum + line.line_total().amount),
            currency_code,
        );
        CartTotals {
            subtotal,
            total: subtotal,
        }
    }

    /// Look up the line for `product_id`.
    #[must_use]
    pub fn get(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.get(product_id)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .values()
            .fold(0, |sum, line| sum.saturating_add(line.quantity))
    }
}
