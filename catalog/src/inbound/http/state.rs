//! Shared HTTP adapter state.

use std::sync::Arc;

use crate::domain::ports::ProductSearch;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub products: Arc<dyn ProductSearch>,
}

impl HttpState {
    /// Bundle the browse port.
    pub fn new(products: Arc<dyn ProductSearch>) -> Self {
        Self { products }
    }
}
