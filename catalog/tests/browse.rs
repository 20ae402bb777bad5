//! Browse flows through the full catalog app over the seeded listings.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use rentitease_catalog::domain::BrowseService;
use rentitease_catalog::inbound::http::{self, state::HttpState};
use rentitease_catalog::outbound::memory::InMemoryProductCatalogue;
use rentitease_common::health::{HealthState, live, ready};
use rentitease_common::{TRACE_ID_HEADER, Trace};
use rstest::rstest;
use serde_json::Value;

async fn catalog_app(
    health: web::Data<HealthState>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let browse = BrowseService::new(Arc::new(InMemoryProductCatalogue::default()));
    test::init_service(
        App::new()
            .app_data(health)
            .app_data(web::Data::new(HttpState::new(Arc::new(browse))))
            .wrap(Trace)
            .service(ready)
            .service(live)
            .configure(http::configure),
    )
    .await
}

async fn product_names(uri: &str) -> Vec<String> {
    let app = catalog_app(web::Data::new(HealthState::new())).await;
    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK, "GET {uri}");
    let body: Value = test::read_body_json(res).await;
    body.as_array()
        .expect("array body")
        .iter()
        .filter_map(|item| item.get("name").and_then(Value::as_str).map(str::to_owned))
        .collect()
}

#[rstest]
#[case("/api/v1/products", &["Laptop", "Camera", "Bike"])]
#[case("/api/v1/products?search=", &["Laptop", "Camera", "Bike"])]
#[case("/api/v1/products?search=a", &["Laptop", "Camera"])]
#[case("/api/v1/products?search=BIKE", &["Bike"])]
#[case("/api/v1/products?brand=B", &["Camera"])]
#[case("/api/v1/products?brand=A&brand=C", &["Laptop", "Bike"])]
#[case("/api/v1/products?size=L&design=Minimalist", &["Bike"])]
#[case("/api/v1/products?price_min=40000&price_max=200000", &["Laptop", "Bike"])]
#[case("/api/v1/products?brand=A&search=cam", &[])]
#[actix_web::test]
async fn api_filters_listings(#[case] uri: &str, #[case] expected: &[&str]) {
    assert_eq!(product_names(uri).await, expected);
}

#[actix_web::test]
async fn browse_page_renders_filtered_grid_and_layout() {
    let app = catalog_app(web::Data::new(HealthState::new())).await;
    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/?search=a&brand=B").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body = String::from_utf8(test::read_body(res).await.to_vec()).expect("utf-8");
    assert!(body.contains("Browse Items"));
    assert!(body.contains("id=\"search-bar\""));
    assert!(body.contains("value=\"a\""));
    assert!(body.contains("<h4>Camera</h4>"));
    assert!(body.contains("Price: ₹30000"));
    assert!(body.contains("Location: Bangalore"));
    assert!(!body.contains("<h4>Laptop</h4>"));
}

#[actix_web::test]
async fn grid_fragment_is_empty_without_matches() {
    let app = catalog_app(web::Data::new(HealthState::new())).await;
    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/grid?search=zzz").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(res).await.to_vec()).expect("utf-8");
    assert!(body.starts_with("<div id=\"product-grid\""));
    assert!(!body.contains("class=\"card\""));
}

#[rstest]
#[case("/api/v1/products?brand=Z")]
#[case("/?design=Baroque")]
#[case("/grid?price_min=50000&price_max=1000")]
#[actix_web::test]
async fn invalid_filters_return_the_error_envelope(#[case] uri: &str) {
    let app = catalog_app(web::Data::new(HealthState::new())).await;
    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body.get("code").and_then(Value::as_str), Some("invalid_request"));
}

#[actix_web::test]
async fn readiness_tracks_health_state() {
    let health = web::Data::new(HealthState::new());
    let app = catalog_app(health.clone()).await;
    let probe = || test::TestRequest::get().uri("/health/ready").to_request();
    assert_eq!(
        test::call_service(&app, probe()).await.status(),
        StatusCode::SERVICE_UNAVAILABLE
    );
    health.mark_ready();
    assert_eq!(test::call_service(&app, probe()).await.status(), StatusCode::OK);
}
