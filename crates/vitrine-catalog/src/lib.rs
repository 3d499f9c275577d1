//! Catalog display data for Vitrine
//!
//! Records arrive from a remote catalog API and are treated as read-only
//! here: this crate formats and projects them, it never mutates them.

mod api;
mod price;
mod records;

pub use api::{load_related_products, ApiError, CatalogApi, LocalBoxFuture};
pub use price::{discount_percentage, format_price, format_price_range, parse_price};
pub use records::{Banner, Currency, Product, ProductReview};
