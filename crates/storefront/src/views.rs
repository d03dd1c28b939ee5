//! Display-ready projections of catalog and cart state.
//!
//! This layer is pure: it reads the stores, formats currency, and never
//! mutates anything. It runs synchronously after every mutation or filter
//! change; each user action yields one full projection of the affected
//! region, with no batching or debouncing.
//!
//! Every view is `Serialize` so any render surface can consume it.

use chrono::Datelike;
use serde::Serialize;
use velvet_paw_core::{CategoryFilter, CurrencyCode, Price};

use crate::cart::{CartLine, CartStore};
use crate::catalog::{Catalog, DetailSection, Product};

/// Product display data for the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub badge: String,
    pub description: String,
    pub support: String,
    pub price: String,
    pub image_url: String,
    pub image_alt: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_str().to_owned(),
            name: product.name.clone(),
            badge: product.badge.clone(),
            description: product.description.clone(),
            support: product.support.clone(),
            price: product.price.display(),
            image_url: product.image.clone(),
            image_alt: format!("{} product photo", product.name),
        }
    }
}

/// Product grid projection for the active filter, in catalog order.
#[must_use]
pub fn product_grid(catalog: &Catalog, filter: CategoryFilter) -> Vec<ProductCardView> {
    catalog.filter(filter).map(ProductCardView::from).collect()
}

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub variant: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product_id.as_str().to_owned(),
            name: line.name.clone(),
            variant: line.variant.clone(),
            quantity: line.quantity,
            line_total: line.line_total().display(),
        }
    }
}

/// Cart display data: line views plus formatted totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub total: String,
    pub item_count: u32,
    /// Whether the empty-cart message should show.
    pub is_empty: bool,
    /// The checkout call-to-action is disabled exactly when the cart is
    /// empty.
    pub checkout_enabled: bool,
}

impl CartView {
    /// An empty cart.
    ///
    /// Uses the same formatter as the populated path, so the zero amount
    /// carries the same currency symbol as every other total.
    #[must_use]
    pub fn empty(currency_code: CurrencyCode) -> Self {
        let zero = Price::zero(currency_code).display();
        Self {
            items: Vec::new(),
            subtotal: zero.clone(),
            total: zero,
            item_count: 0,
            is_empty: true,
            checkout_enabled: false,
        }
    }

    /// Project the current cart contents.
    #[must_use]
    pub fn project(cart: &CartStore, currency_code: CurrencyCode) -> Self {
        if cart.is_empty() {
            return Self::empty(currency_code);
        }

        let totals = cart.totals(currency_code);
        Self {
            items: cart.lines().map(CartItemView::from).collect(),
            subtotal: totals.subtotal.display(),
            total: totals.total.display(),
            item_count: cart.item_count(),
            is_empty: false,
            checkout_enabled: true,
        }
    }
}

/// Detail-panel section display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSectionView {
    pub title: String,
    pub lines: Vec<String>,
}

impl From<&DetailSection> for DetailSectionView {
    fn from(section: &DetailSection) -> Self {
        Self {
            title: section.title.clone(),
            lines: section.content.clone(),
        }
    }
}

/// Detail-panel display data for the selected product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetailView {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub image_alt: String,
    pub sections: Vec<DetailSectionView>,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image.clone(),
            image_alt: format!("{} detail view", product.name),
            sections: product.details.iter().map(DetailSectionView::from).collect(),
        }
    }
}

/// The current year, for the footer.
#[must_use]
pub fn footer_year() -> i32 {
    chrono::Utc::now().year()
}
