//! Velvet Paw Core - Shared types library.
//!
//! This crate provides common types used across all Velvet Paw components:
//! - `storefront` - Catalog, cart and view-sync logic
//! - `integration-tests` - Cross-module scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no clocks, no rendering.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices and categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
