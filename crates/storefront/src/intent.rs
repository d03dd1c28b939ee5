//! Typed user intents and render signals.
//!
//! UI events are captured as data rather than wired straight into
//! mutation callbacks: the glue turns a click into an [`Intent`], the
//! session consumes it, and the returned [`Render`] signals name the
//! regions to repaint. This keeps the store unit-testable without any
//! rendering surface.

use serde::{Deserialize, Serialize};
use velvet_paw_core::{CategoryFilter, ProductId};

use crate::checkout::OrderRequest;

/// A user-triggered request to mutate or query session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Add one unit of a product to the cart.
    AddToCart { product_id: ProductId },
    /// Adjust a cart line's quantity by a signed delta (+1/-1 from the
    /// stepper buttons, but any delta is honored).
    ChangeQuantity { product_id: ProductId, delta: i64 },
    /// Remove a cart line outright.
    RemoveLine { product_id: ProductId },
    /// Switch the product-grid category filter.
    SelectFilter { filter: CategoryFilter },
    /// Show a product in the detail panel.
    SelectProduct { product_id: ProductId },
    /// Submit the checkout form.
    SubmitOrder { request: OrderRequest },
}

/// A region the render surface must repaint after a mutation.
///
/// These are the three notification points the surrounding glue hooks
/// into; a dispatch returns every region its mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Render {
    /// Cart list and summary totals.
    CartChanged,
    /// Product grid.
    CatalogFilterChanged,
    /// Detail panel.
    DetailSelectionChanged,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_serde_shape() {
        let intent = Intent::ChangeQuantity {
            product_id: ProductId::new("shadowPod"),
            delta: -1,
        };
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "change_quantity",
                "product_id": "shadowPod",
                "delta": -1,
            })
        );
    }

    #[test]
    fn test_filter_intent_accepts_raw_tokens() {
        let intent: Intent =
            serde_json::from_str(r#"{"type": "select_filter", "filter": "play"}"#).unwrap();
        assert!(matches!(intent, Intent::SelectFilter { .. }));
    }
}
