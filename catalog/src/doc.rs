//! OpenAPI document for the catalog's JSON surface.
//!
//! Only the product API and the health probes are described; the HTML
//! pages are not part of the contract. Swagger UI serves this document in
//! debug builds.

use utoipa::OpenApi;

use crate::inbound::http::schemas::ProductResponse;
use rentitease_common::{Error, ErrorCode};

/// OpenAPI document for the catalog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "RentItEase catalog API",
        description = "Filtered rental listings and health probes.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::products::list_products,
        rentitease_common::health::ready,
        rentitease_common::health::live,
    ),
    components(schemas(ProductResponse, Error, ErrorCode)),
    tags(
        (name = "products", description = "Rental listings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
