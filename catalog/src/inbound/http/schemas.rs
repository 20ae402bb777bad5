//! JSON payloads for the product API.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Product;

/// One rental listing as returned by `GET /api/v1/products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProductResponse {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "Laptop")]
    pub name: String,
    /// Whole rupees.
    #[schema(example = 50000)]
    pub price: u32,
    #[schema(example = "Brand A")]
    pub brand: String,
    #[schema(example = "Medium")]
    pub size: String,
    #[schema(example = "Modern")]
    pub design: String,
    #[schema(example = "Hyderabad")]
    pub location: String,
    #[schema(example = "https://via.placeholder.com/150")]
    pub image: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            brand: product.brand,
            size: product.size.label().to_owned(),
            design: product.design.label().to_owned(),
            location: product.location,
            image: product.image,
        }
    }
}
