//! Catalog domain: listings, filter criteria and the browse use-case.

pub mod browse;
pub mod filter;
pub mod ports;
pub mod product;

pub use rentitease_common::{ApiResult, Error, ErrorCode};

pub use self::browse::BrowseService;
pub use self::filter::{
    PRICE_CEILING, PRICE_STEP, ProductQuery, QueryValidationError, filter_products,
};
pub use self::product::{BrandCode, Design, Product, Size};
