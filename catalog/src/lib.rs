//! RentItEase catalog service.
//!
//! Serves the rental listings: a sidebar page with search box, checklist
//! filters and price range over a product grid, the grid alone as a
//! fragment, and a JSON product API described by OpenAPI.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;

pub use settings::CatalogSettings;
