//! Session state and intent dispatch.
//!
//! The session is the explicit owner of everything a page lifetime holds:
//! the catalog, the cart, the active grid filter, the detail selection,
//! transient notices and their timers. It is created at startup and only
//! reset by tearing it down; nothing here is a global.
//!
//! A mutation and its render signals are one synchronous step: `dispatch`
//! returns the regions to repaint, and no intermediate state is
//! observable in between.

use std::collections::HashSet;
use std::time::Instant;

use serde::Serialize;
use tracing::instrument;
use velvet_paw_core::{CategoryFilter, ProductId};

use crate::cart::CartStore;
use crate::catalog::{Catalog, CatalogError, Product};
use crate::checkout::{self, OrderReceipt, OrderRequest};
use crate::config::StorefrontConfig;
use crate::intent::{Intent, Render};
use crate::timers::{TimerKey, TimerRegistry};
use crate::views::{CartView, ProductCardView, ProductDetailView, product_grid};

/// A transient "added to cart" notice.
///
/// At most one is pending; showing a new one replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    /// Notice text, e.g. "Cat Travel Bag added to cart."
    pub message: String,
}

/// One page lifetime of storefront state.
#[derive(Debug, Clone)]
pub struct StorefrontSession {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: CartStore,
    filter: CategoryFilter,
    /// The detail panel's selection, replaced wholesale on request.
    /// Initialized to the first catalog product and never emptied.
    selected: Product,
    toast: Option<Toast>,
    flashing: HashSet<ProductId>,
    timers: TimerRegistry,
    receipt: Option<OrderReceipt>,
}

impl StorefrontSession {
    /// Create a session over `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] when the catalog has no products,
    /// since the detail selection must exist from the start.
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Result<Self, CatalogError> {
        let selected = catalog.first().cloned().ok_or(CatalogError::Empty)?;
        Ok(Self {
            config,
            catalog,
            cart: CartStore::new(),
            filter: CategoryFilter::All,
            selected,
            toast: None,
            flashing: HashSet::new(),
            timers: TimerRegistry::new(),
            receipt: None,
        })
    }

    /// Consume one user intent and return the regions to repaint.
    ///
    /// `now` is the instant of the triggering input event; it anchors the
    /// transient-notice timers.
    #[instrument(skip(self, now))]
    pub fn dispatch(&mut self, intent: Intent, now: Instant) -> Vec<Render> {
        match intent {
            Intent::AddToCart { product_id } => self.add_to_cart(&product_id, now),
            Intent::ChangeQuantity { product_id, delta } => {
                if self.cart.change_quantity(&product_id, delta) {
                    vec![Render::CartChanged]
                } else {
                    Vec::new()
                }
            }
            Intent::RemoveLine { product_id } => {
                // The cart list repaints whether or not the line existed.
                self.cart.remove(&product_id);
                vec![Render::CartChanged]
            }
            Intent::SelectFilter { filter } => {
                self.filter = filter;
                vec![Render::CatalogFilterChanged]
            }
            Intent::SelectProduct { product_id } => self.select_product(&product_id),
            Intent::SubmitOrder { request } => {
                self.receipt = Some(checkout::submit(&request));
                Vec::new()
            }
        }
    }

    /// Expire due transient-notice timers and clear the state they guard.
    ///
    /// Returns the expired keys, earliest deadline first, so the glue
    /// knows which toast or button label to reset.
    pub fn tick(&mut self, now: Instant) -> Vec<TimerKey> {
        let expired = self.timers.expire(now);
        for key in &expired {
            match key {
                TimerKey::ToastDismiss => self.toast = None,
                TimerKey::AddedFlash(product_id) => {
                    self.flashing.remove(product_id);
                }
            }
        }
        expired
    }

    fn add_to_cart(&mut self, product_id: &ProductId, now: Instant) -> Vec<Render> {
        let Some(line) = self.cart.add(&self.catalog, product_id) else {
            return Vec::new();
        };
        let product_name = line.name.clone();

        self.toast = Some(Toast {
            message: format!("{product_name} added to cart."),
        });
        self.timers
            .arm(TimerKey::ToastDismiss, now + self.config.toast_dismiss_after);

        self.flashing.insert(product_id.clone());
        self.timers.arm(
            TimerKey::AddedFlash(product_id.clone()),
            now + self.config.added_flash_after,
        );

        vec![Render::CartChanged]
    }

    fn select_product(&mut self, product_id: &ProductId) -> Vec<Render> {
        let Some(product) = self.catalog.get(product_id) else {
            tracing::debug!(product_id = %product_id, "ignoring selection of unknown product");
            return Vec::new();
        };
        self.selected = product.clone();
        vec![Render::DetailSelectionChanged]
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Cart list and totals, display-ready.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::project(&self.cart, self.config.currency_code)
    }

    /// Product grid for the active filter, display-ready.
    #[must_use]
    pub fn grid_view(&self) -> Vec<ProductCardView> {
        product_grid(&self.catalog, self.filter)
    }

    /// Detail panel for the selected product, display-ready.
    #[must_use]
    pub fn detail_view(&self) -> ProductDetailView {
        ProductDetailView::from(&self.selected)
    }

    // =========================================================================
    // State access
    // =========================================================================

    /// The session configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The catalog this session sells from.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The active grid filter.
    #[must_use]
    pub const fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// The product currently shown in the detail panel.
    #[must_use]
    pub const fn selected_product(&self) -> &Product {
        &self.selected
    }

    /// The pending "added to cart" toast, if one is showing.
    #[must_use]
    pub const fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Whether `product_id`'s add button is showing its "Added" label.
    #[must_use]
    pub fn is_flashing(&self, product_id: &ProductId) -> bool {
        self.flashing.contains(product_id)
    }

    /// Pending transient-notice timers.
    #[must_use]
    pub const fn timers(&self) -> &TimerRegistry {
        &self.timers
    }

    /// The confirmation for the most recent order submission, if any.
    #[must_use]
    pub const fn receipt(&self) -> Option<&OrderReceipt> {
        self.receipt.as_ref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn session() -> StorefrontSession {
        StorefrontSession::new(StorefrontConfig::default(), Catalog::seed()).unwrap()
    }

    fn add(id: &str) -> Intent {
        Intent::AddToCart {
            product_id: ProductId::new(id),
        }
    }

    #[test]
    fn test_initial_detail_selection_is_first_product() {
        let session = session();
        assert_eq!(session.selected_product().name, "Cat Travel Bag");
    }

    #[test]
    fn test_empty_catalog_is_a_construction_error() {
        let catalog = Catalog::seed();
        let empty = Catalog::new(Vec::new());
        assert!(empty.is_err());
        // A populated catalog constructs fine.
        assert!(StorefrontSession::new(StorefrontConfig::default(), catalog).is_ok());
    }

    #[test]
    fn test_add_dispatch_signals_cart_changed() {
        let mut session = session();
        let renders = session.dispatch(add("shadowPod"), Instant::now());
        assert_eq!(renders, vec![Render::CartChanged]);
        assert_eq!(session.cart().len(), 1);
    }

    #[test]
    fn test_add_unknown_product_is_silent() {
        let mut session = session();
        let renders = session.dispatch(add("midnightPerch"), Instant::now());
        assert!(renders.is_empty());
        assert!(session.cart().is_empty());
        assert!(session.toast().is_none());
    }

    #[test]
    fn test_add_shows_toast_and_flash() {
        let mut session = session();
        let now = Instant::now();
        session.dispatch(add("nocturneHalo"), now);

        assert_eq!(
            session.toast().unwrap().message,
            "Cat Toy Chew Rope added to cart."
        );
        assert!(session.is_flashing(&ProductId::new("nocturneHalo")));
        assert!(session.timers().is_armed(&TimerKey::ToastDismiss));
    }

    #[test]
    fn test_new_toast_replaces_pending_one() {
        let mut session = session();
        let now = Instant::now();
        session.dispatch(add("shadowPod"), now);
        session.dispatch(add("eclipseLoft"), now + Duration::from_millis(1000));

        assert_eq!(
            session.toast().unwrap().message,
            "Cat Hair Brush added to cart."
        );
        // The first toast's deadline (now + 2400ms) was replaced, so
        // nothing dismisses at that point.
        let expired = session.tick(now + Duration::from_millis(2400));
        assert!(!expired.contains(&TimerKey::ToastDismiss));
        assert!(session.toast().is_some());

        let expired = session.tick(now + Duration::from_millis(3400));
        assert!(expired.contains(&TimerKey::ToastDismiss));
        assert!(session.toast().is_none());
    }

    #[test]
    fn test_flash_timers_are_per_product() {
        let mut session = session();
        let now = Instant::now();
        let bag = ProductId::new("shadowPod");
        let rope = ProductId::new("nocturneHalo");

        session.dispatch(add("shadowPod"), now);
        session.dispatch(add("nocturneHalo"), now + Duration::from_millis(800));

        // The bag's flash expires on its own schedule (now + 1600ms).
        session.tick(now + Duration::from_millis(1600));
        assert!(!session.is_flashing(&bag));
        assert!(session.is_flashing(&rope));

        session.tick(now + Duration::from_millis(2400));
        assert!(!session.is_flashing(&rope));
    }

    #[test]
    fn test_readding_restarts_own_flash_timer() {
        let mut session = session();
        let now = Instant::now();
        let bag = ProductId::new("shadowPod");

        session.dispatch(add("shadowPod"), now);
        session.dispatch(add("shadowPod"), now + Duration::from_millis(1000));

        // The first deadline has passed, but the timer was restarted.
        session.tick(now + Duration::from_millis(1600));
        assert!(session.is_flashing(&bag));

        session.tick(now + Duration::from_millis(2600));
        assert!(!session.is_flashing(&bag));
    }

    #[test]
    fn test_change_quantity_signals_only_when_line_exists() {
        let mut session = session();
        let now = Instant::now();
        session.dispatch(add("shadowPod"), now);

        let renders = session.dispatch(
            Intent::ChangeQuantity {
                product_id: ProductId::new("shadowPod"),
                delta: 1,
            },
            now,
        );
        assert_eq!(renders, vec![Render::CartChanged]);

        let renders = session.dispatch(
            Intent::ChangeQuantity {
                product_id: ProductId::new("eclipseLoft"),
                delta: 1,
            },
            now,
        );
        assert!(renders.is_empty());
    }

    #[test]
    fn test_remove_always_repaints_cart() {
        let mut session = session();
        let renders = session.dispatch(
            Intent::RemoveLine {
                product_id: ProductId::new("shadowPod"),
            },
            Instant::now(),
        );
        assert_eq!(renders, vec![Render::CartChanged]);
    }

    #[test]
    fn test_select_filter_signals_grid() {
        let mut session = session();
        let renders = session.dispatch(
            Intent::SelectFilter {
                filter: "care".parse().unwrap(),
            },
            Instant::now(),
        );
        assert_eq!(renders, vec![Render::CatalogFilterChanged]);
        assert_eq!(session.grid_view().len(), 1);
    }

    #[test]
    fn test_select_product_replaces_detail_wholesale() {
        let mut session = session();
        let renders = session.dispatch(
            Intent::SelectProduct {
                product_id: ProductId::new("eclipseLoft"),
            },
            Instant::now(),
        );
        assert_eq!(renders, vec![Render::DetailSelectionChanged]);
        assert_eq!(session.selected_product().name, "Cat Hair Brush");

        // Unknown ids leave the selection untouched; it is never emptied.
        let renders = session.dispatch(
            Intent::SelectProduct {
                product_id: ProductId::new("midnightPerch"),
            },
            Instant::now(),
        );
        assert!(renders.is_empty());
        assert_eq!(session.selected_product().name, "Cat Hair Brush");
    }

    #[test]
    fn test_submit_order_records_receipt() {
        let mut session = session();
        assert!(session.receipt().is_none());
        let renders = session.dispatch(
            Intent::SubmitOrder {
                request: OrderRequest {
                    first_name: "Mara".to_owned(),
                    phone: "+63 917 555 0199".to_owned(),
                },
            },
            Instant::now(),
        );
        assert!(renders.is_empty());
        assert!(
            session
                .receipt()
                .unwrap()
                .message
                .starts_with("Thank you!")
        );
    }
}
