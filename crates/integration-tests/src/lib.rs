//! Integration tests for Velvet Paw.
//!
//! The scenario tests drive a whole [`StorefrontSession`] the way the
//! rendering surface does: typed intents in, render signals and
//! display-ready views back out. No rendering is involved, which is the
//! point — the core is fully observable without one.
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart mutation sequences and derived totals
//! - `catalog_filtering` - Grid filtering and projections
//! - `session_notices` - Toasts, button flashes and their timers

#![cfg_attr(not(test), forbid(unsafe_code))]

use velvet_paw_core::ProductId;
use velvet_paw_storefront::{Catalog, Intent, StorefrontConfig, StorefrontSession};

/// A session over the seeded launch catalog with default configuration.
#[must_use]
pub fn seeded_session() -> StorefrontSession {
    StorefrontSession::new(StorefrontConfig::default(), Catalog::seed())
        .expect("seed catalog is non-empty")
}

/// Shorthand for an add-to-cart intent.
#[must_use]
pub fn add(id: &str) -> Intent {
    Intent::AddToCart {
        product_id: ProductId::new(id),
    }
}

/// Shorthand for a quantity-change intent.
#[must_use]
pub fn change(id: &str, delta: i64) -> Intent {
    Intent::ChangeQuantity {
        product_id: ProductId::new(id),
        delta,
    }
}

/// Shorthand for a remove-line intent.
#[must_use]
pub fn remove(id: &str) -> Intent {
    Intent::RemoveLine {
        product_id: ProductId::new(id),
    }
}
