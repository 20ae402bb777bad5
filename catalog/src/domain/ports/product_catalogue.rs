//! Driven port for reading rental listings.

use async_trait::async_trait;

use crate::domain::Product;

/// Errors raised by catalogue adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductCatalogueError {
    /// The backing store could not be reached.
    #[error("product catalogue unavailable: {message}")]
    Unavailable { message: String },
}

impl ProductCatalogueError {
    /// Create an unavailable error with the given message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Source of listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCatalogue: Send + Sync {
    /// Every listing in display order.
    async fn list_products(&self) -> Result<Vec<Product>, ProductCatalogueError>;
}
