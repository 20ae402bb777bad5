//! Browse endpoints.
//!
//! ```text
//! GET /                 sidebar page with filters and the filtered grid
//! GET /grid             grid fragment only
//! GET /api/v1/products  filtered listings as JSON
//! GET /profile          placeholder section
//! GET /history          placeholder section
//! ```
//!
//! All three listing endpoints accept the same query string:
//! `search`, repeated `brand`/`size`/`design`, `price_min` and `price_max`.

use actix_web::{get, web};
use rentitease_common::html::{Document, Element};
use tracing::debug;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::query::FilterQuery;
use crate::inbound::http::schemas::ProductResponse;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{Section, browse_page, placeholder_page, product_grid};

/// Full browse page with the grid filtered by the query string.
#[get("/")]
pub async fn browse(
    state: web::Data<HttpState>,
    FilterQuery(query): FilterQuery,
) -> ApiResult<Document> {
    let products = state.products.search(&query).await?;
    Ok(browse_page(&query, &products))
}

/// Re-rendered grid region for a changed filter.
#[get("/grid")]
pub async fn grid(
    state: web::Data<HttpState>,
    FilterQuery(query): FilterQuery,
) -> ApiResult<Element> {
    let products = state.products.search(&query).await?;
    debug!(matches = products.len(), "grid refreshed");
    Ok(product_grid(&products))
}

/// List rental listings matching the filter.
#[utoipa::path(
    get,
    path = "/api/v1/products",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive substring of the product name"),
        ("brand" = Option<Vec<String>>, Query, description = "Brand codes A, B or C; repeatable"),
        ("size" = Option<Vec<String>>, Query, description = "Size codes S, M or L; repeatable"),
        ("design" = Option<Vec<String>>, Query, description = "Modern, Classic or Minimalist; repeatable"),
        ("price_min" = Option<u32>, Query, description = "Inclusive lower price bound in rupees"),
        ("price_max" = Option<u32>, Query, description = "Inclusive upper price bound in rupees"),
    ),
    responses(
        (status = 200, description = "Matching listings in catalogue order", body = [ProductResponse]),
        (status = 400, description = "Invalid filter value", body = Error),
        (status = 503, description = "Catalogue unavailable", body = Error)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/products")]
pub async fn list_products(
    state: web::Data<HttpState>,
    FilterQuery(query): FilterQuery,
) -> ApiResult<web::Json<Vec<ProductResponse>>> {
    let products = state.products.search(&query).await?;
    Ok(web::Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// Profile placeholder.
#[get("/profile")]
pub async fn profile() -> Document {
    placeholder_page(Section::Profile)
}

/// Rental history placeholder.
#[get("/history")]
pub async fn history() -> Document {
    placeholder_page(Section::History)
}
