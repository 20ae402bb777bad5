//! Driving port used by the HTTP adapter to browse listings.

use async_trait::async_trait;

use crate::domain::{Error, Product, ProductQuery};

/// Filtered listing use-case.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductSearch: Send + Sync {
    /// Listings matching `query`, in catalogue order.
    async fn search(&self, query: &ProductQuery) -> Result<Vec<Product>, Error>;
}
