//! Browse use-case: read the catalogue, then filter it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::filter::filter_products;
use super::ports::{ProductCatalogue, ProductCatalogueError, ProductSearch};
use super::{Error, Product, ProductQuery};

fn map_catalogue_error(error: ProductCatalogueError) -> Error {
    match error {
        ProductCatalogueError::Unavailable { message } => Error::service_unavailable(message),
    }
}

/// [`ProductSearch`] over any [`ProductCatalogue`].
#[derive(Clone)]
pub struct BrowseService {
    catalogue: Arc<dyn ProductCatalogue>,
}

impl BrowseService {
    /// Build the service over `catalogue`.
    pub fn new(catalogue: Arc<dyn ProductCatalogue>) -> Self {
        Self { catalogue }
    }
}

#[async_trait]
impl ProductSearch for BrowseService {
    async fn search(&self, query: &ProductQuery) -> Result<Vec<Product>, Error> {
        let products = self
            .catalogue
            .list_products()
            .await
            .map_err(map_catalogue_error)?;
        let matched = filter_products(&products, query);
        debug!(
            total = products.len(),
            matched = matched.len(),
            unfiltered = query.is_empty(),
            "filtered catalogue"
        );
        Ok(matched)
    }
}
