//! In-memory product catalogue.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{ProductCatalogue, ProductCatalogueError};
use crate::domain::{Design, Product, Size};

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// The listings offered by the demo marketplace.
pub fn rental_listings() -> Vec<Product> {
    let listing = |id, name: &str, price, brand: &str, size, design, location: &str| Product {
        id,
        name: name.to_owned(),
        price,
        brand: brand.to_owned(),
        size,
        design,
        location: location.to_owned(),
        image: PLACEHOLDER_IMAGE.to_owned(),
    };
    vec![
        listing(1, "Laptop", 50_000, "Brand A", Size::Medium, Design::Modern, "Hyderabad"),
        listing(2, "Camera", 30_000, "Brand B", Size::Small, Design::Classic, "Bangalore"),
        listing(3, "Bike", 150_000, "Brand C", Size::Large, Design::Minimalist, "Chennai"),
    ]
}

/// Immutable listing set shared across workers.
#[derive(Debug, Clone)]
pub struct InMemoryProductCatalogue {
    products: Arc<[Product]>,
}

impl InMemoryProductCatalogue {
    /// Serve `products` in the given order.
    pub fn new(products: impl Into<Arc<[Product]>>) -> Self {
        Self {
            products: products.into(),
        }
    }
}

impl Default for InMemoryProductCatalogue {
    fn default() -> Self {
        Self::new(rental_listings())
    }
}

#[async_trait]
impl ProductCatalogue for InMemoryProductCatalogue {
    async fn list_products(&self) -> Result<Vec<Product>, ProductCatalogueError> {
        Ok(self.products.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_catalogue_serves_seeded_listings_in_order() {
        let products = InMemoryProductCatalogue::default()
            .list_products()
            .await
            .expect("in-memory read");
        let summary: Vec<_> = products
            .iter()
            .map(|p| (p.id, p.name.as_str(), p.price, p.location.as_str()))
            .collect();
        assert_eq!(
            summary,
            [
                (1, "Laptop", 50_000, "Hyderabad"),
                (2, "Camera", 30_000, "Bangalore"),
                (3, "Bike", 150_000, "Chennai"),
            ]
        );
        assert!(products.iter().all(|p| p.image == PLACEHOLDER_IMAGE));
    }
}
