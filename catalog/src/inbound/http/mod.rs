//! HTTP inbound adapter: browse pages, grid fragment and the product API.

pub mod products;
pub mod query;
pub mod schemas;
pub mod state;
pub mod views;

use actix_web::web;

pub use rentitease_common::ApiResult;

/// Register the catalog routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(products::browse)
        .service(products::grid)
        .service(products::profile)
        .service(products::history)
        .service(web::scope("/api/v1").service(products::list_products));
}
