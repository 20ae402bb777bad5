//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;

use crate::domain::ports::{MockLoginService, MockRegistrationService, MockUserProfileQuery};

use super::state::HttpState;

/// Build a session middleware configured for tests.
///
/// A fresh key per call; the cookie is named `session` and is not `Secure`
/// so plain HTTP test requests carry it.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// State whose ports fail the test if called without expectations.
pub fn mock_state(
    login: MockLoginService,
    registration: MockRegistrationService,
    profile: MockUserProfileQuery,
) -> HttpState {
    HttpState::new(Arc::new(login), Arc::new(registration), Arc::new(profile))
}

/// Session cookie set by `res`, if any.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
}
