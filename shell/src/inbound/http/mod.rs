//! HTTP inbound adapter: HTML pages, form handlers and the session API.

pub mod auth;
pub mod pages;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod views;

use actix_web::web;

pub use rentitease_common::ApiResult;

/// Register the shell routes.
///
/// Form handlers and the JSON API are matched first; every other path falls
/// through to the page router.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::login)
        .service(auth::register)
        .service(auth::logout)
        .service(web::scope("/api/v1").service(users::current_session))
        .default_service(web::to(pages::show_page));
}
