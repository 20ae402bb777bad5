//! Domain ports for the catalog.

mod product_catalogue;
mod product_search;

#[cfg(test)]
pub use product_catalogue::MockProductCatalogue;
pub use product_catalogue::{ProductCatalogue, ProductCatalogueError};
#[cfg(test)]
pub use product_search::MockProductSearch;
pub use product_search::ProductSearch;
