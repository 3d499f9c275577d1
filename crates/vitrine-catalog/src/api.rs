//! Seam to the remote catalog API.
//!
//! The transport is an external collaborator; this layer only defines the
//! call shape and the degradation rule: a failed fetch is logged and the
//! target state falls back to an empty list. No retries, no timeouts.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use vitrine_core::{MutableState, RuntimeHandle};

use crate::records::Product;

pub type LocalBoxFuture<T> = Pin<Box<dyn Future<Output = T> + 'static>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced a usable response.
    Transport(String),
    /// Response arrived but could not be decoded.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(message) => write!(f, "transport error: {message}"),
            ApiError::Decode(message) => write!(f, "decode error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Client surface this layer consumes. Implementations live outside the
/// presentation layer (HTTP client, test fixtures).
pub trait CatalogApi {
    fn get_related_products(&self, product_id: u64) -> LocalBoxFuture<Result<Vec<Product>, ApiError>>;
}

/// Fire-and-forget fetch of related products into a state cell.
///
/// Failures are swallowed after logging; the reader sees an empty list,
/// never an error surface.
pub fn load_related_products(
    runtime: &RuntimeHandle,
    api: Rc<dyn CatalogApi>,
    product_id: u64,
    into: MutableState<Vec<Product>>,
) {
    let future = api.get_related_products(product_id);
    runtime.spawn_local(async move {
        match future.await {
            Ok(products) => {
                log::debug!(
                    "related products for {product_id}: {} item(s)",
                    products.len()
                );
                into.set_value(products);
            }
            Err(error) => {
                log::warn!("related products fetch for {product_id} failed: {error}");
                into.set_value(Vec::new());
            }
        }
    });
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
