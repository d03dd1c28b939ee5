//! Static, read-only product catalog.
//!
//! The catalog is created once at startup and never mutated. Lookup by id
//! returns absence rather than erroring, since callers treat unknown ids
//! as no-ops.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use velvet_paw_core::{Category, CategoryFilter, CurrencyCode, Price, ProductId};

/// A titled block of content lines on the product detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailSection {
    /// Section heading (e.g. "Bag Specs").
    pub title: String,
    /// One display line per entry.
    pub content: Vec<String>,
}

impl DetailSection {
    fn new(title: &str, content: &[&str]) -> Self {
        Self {
            title: title.to_owned(),
            content: content.iter().map(|&line| line.to_owned()).collect(),
        }
    }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog handle.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Grid-filter category.
    pub category: Category,
    /// Variant line shown on cart rows (e.g. "charcoal shell").
    pub variant: String,
    /// Rating badge line.
    pub badge: String,
    /// Card description.
    pub description: String,
    /// Supporting copy under the description.
    pub support: String,
    /// Image reference, relative to the asset root.
    pub image: String,
    /// Detail-panel sections.
    pub details: Vec<DetailSection>,
}

/// Errors that can occur when constructing a [`Catalog`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog has no products, so no detail selection can exist.
    #[error("catalog must contain at least one product")]
    Empty,
    /// Two products share the same id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// The static set of purchasable products.
///
/// Display order is catalog order; filtering preserves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] for an empty list and
    /// [`CatalogError::DuplicateId`] when two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, product) in products.iter().enumerate() {
            if products
                .iter()
                .take(index)
                .any(|earlier| earlier.id == product.id)
            {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// The fixed launch catalog.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            products: seed_products(),
        }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// The first catalog product, used for the initial detail selection.
    #[must_use]
    pub fn first(&self) -> Option<&Product> {
        self.products.first()
    }

    /// Products passing `filter`, in catalog order.
    pub fn filter(&self, filter: CategoryFilter) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |product| filter.matches(product.category))
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("shadowPod"),
            name: "Cat Travel Bag".to_owned(),
            price: Price::new(Decimal::new(129, 0), CurrencyCode::PHP),
            category: Category::Travel,
            variant: "charcoal shell".to_owned(),
            badge: "\u{2b50}\u{2b50}\u{2b50}\u{2b50}\u{2b50} (4.8/5 rating)".to_owned(),
            description: "A comfortable and breathable travel bag designed to keep your cat \
                          safe and relaxed during trips."
                .to_owned(),
            support: "Includes detachable blackout visor.".to_owned(),
            image: "images/travel.webp".to_owned(),
            details: vec![
                DetailSection::new(
                    "Bag Specs",
                    &[
                        "Bag Size: 42 \u{d7} 28 \u{d7} 30 cm",
                        "Recommended Weight: Up to 7 kg cats",
                    ],
                ),
                DetailSection::new("Color Options", &["Gray", "Black", "Pink"]),
                DetailSection::new(
                    "Care",
                    &[
                        "Wipe interior after each trip",
                        "Air-dry cushions to prevent odors",
                    ],
                ),
            ],
        },
        Product {
            id: ProductId::new("nocturneHalo"),
            name: "Cat Toy Chew Rope".to_owned(),
            price: Price::new(Decimal::new(42, 0), CurrencyCode::PHP),
            category: Category::Play,
            variant: "luminous brass".to_owned(),
            badge: "\u{2b50}\u{2b50}\u{2b50}\u{2b50}\u{2b50} (4.8/5 rating)".to_owned(),
            description: "A fun and safe chew rope toy that helps keep your cat active, \
                          playful, and stress-free."
                .to_owned(),
            support: "Safe fibers and durable knots keep claws engaged without fraying."
                .to_owned(),
            image: "images/play.jpg".to_owned(),
            details: vec![
                DetailSection::new(
                    "Material",
                    &["Braided cotton rope", "Non-toxic plant-based dyes"],
                ),
                DetailSection::new(
                    "Play Benefits",
                    &[
                        "Encourages active chewing",
                        "Helps relieve stress and boredom",
                    ],
                ),
                DetailSection::new(
                    "Care",
                    &[
                        "Hand wash with mild soap",
                        "Air dry fully before next play session",
                    ],
                ),
            ],
        },
        Product {
            id: ProductId::new("eclipseLoft"),
            name: "Cat Hair Brush".to_owned(),
            price: Price::new(Decimal::new(98, 0), CurrencyCode::PHP),
            category: Category::Care,
            variant: "tinted acrylic".to_owned(),
            badge: "\u{2b50}\u{2b50}\u{2b50}\u{2b50}\u{2b50} (4.8/5 rating)".to_owned(),
            description: "A gentle grooming brush designed to remove loose fur and keep your \
                          cat\u{2019}s coat smooth and healthy."
                .to_owned(),
            support: "Soft dual pins glide through fur while protecting sensitive skin."
                .to_owned(),
            image: "images/care.jpg".to_owned(),
            details: vec![
                DetailSection::new(
                    "Bristle Type",
                    &[
                        "Dual-density stainless pins",
                        "Rounded tips to prevent scratching",
                    ],
                ),
                DetailSection::new(
                    "Grip",
                    &[
                        "Ergonomic matte handle",
                        "Non-slip texture for better control",
                    ],
                ),
                DetailSection::new(
                    "Care",
                    &[
                        "Rinse weekly with gentle soap",
                        "Dry thoroughly before storage",
                    ],
                ),
            ],
        },
    ]
}
