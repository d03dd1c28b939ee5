//! Storefront configuration.
//!
//! The storefront runs entirely inside its host surface, so there is no
//! environment to load from; configuration is a plain value with
//! documented defaults, taken by the session at construction.

use std::time::Duration;

use velvet_paw_core::CurrencyCode;

/// Storefront behaviour configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Currency used for every displayed amount.
    pub currency_code: CurrencyCode,
    /// How long an "added to cart" toast stays visible.
    pub toast_dismiss_after: Duration,
    /// How long an add-to-cart button shows its "Added" label.
    pub added_flash_after: Duration,
}

impl StorefrontConfig {
    /// Default toast lifetime.
    pub const TOAST_DISMISS_AFTER: Duration = Duration::from_millis(2400);
    /// Default "Added" label lifetime.
    pub const ADDED_FLASH_AFTER: Duration = Duration::from_millis(1600);
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency_code: CurrencyCode::PHP,
            toast_dismiss_after: Self::TOAST_DISMISS_AFTER,
            added_flash_after: Self::ADDED_FLASH_AFTER,
        }
    }
}
