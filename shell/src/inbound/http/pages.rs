//! Page router endpoint.
//!
//! ```text
//! GET /login      login form
//! GET /register   registration form
//! GET /*          welcome banner
//! ```

use actix_web::http::{Method, StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::warn;

use crate::domain::{Page, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{PageContext, shell_page};

/// Render the page selected by the request path.
///
/// Registered as the default service, so every unmatched path lands here.
/// Only `GET` and `HEAD` are accepted.
pub async fn show_page(
    req: HttpRequest,
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    if !matches!(*req.method(), Method::GET | Method::HEAD) {
        return Ok(HttpResponse::MethodNotAllowed()
            .insert_header((header::ALLOW, "GET, HEAD"))
            .finish());
    }
    let page = Page::for_path(req.path());
    let viewer = current_viewer(&session, &state).await?;
    Ok(shell_page(page, &PageContext::for_viewer(viewer)).into_response(StatusCode::OK))
}

/// Signed-in account for the session, if it still exists.
///
/// Lookup failures degrade to an anonymous page rather than an error page.
pub(crate) async fn current_viewer(
    session: &SessionContext,
    state: &HttpState,
) -> ApiResult<Option<User>> {
    let Some(id) = session.user_id()? else {
        return Ok(None);
    };
    match state.profile.find_user(id).await {
        Ok(user) => Ok(user),
        Err(error) => {
            warn!(user_id = %id, %error, "profile lookup failed; rendering anonymous page");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockLoginService, MockRegistrationService, MockUserProfileQuery};
    use crate::inbound::http::test_utils::{mock_state, test_session_middleware};
    use actix_web::{App, test};
    use rstest::rstest;

    async fn body_for(method: Method, uri: &str) -> (StatusCode, String) {
        let state = mock_state(
            MockLoginService::new(),
            MockRegistrationService::new(),
            MockUserProfileQuery::new(),
        );
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .app_data(web::Data::new(state))
                .default_service(web::to(show_page)),
        )
        .await;
        let req = test::TestRequest::default()
            .method(method)
            .uri(uri)
            .to_request();
        let res = test::call_service(&app, req).await;
        let status = res.status();
        let body = test::read_body(res).await;
        (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
    }

    #[rstest]
    #[case("/login", "id=\"login-form\"")]
    #[case("/register", "id=\"register-form\"")]
    #[case("/unknown", "Welcome to RentitEase")]
    #[case("/", "Welcome to RentitEase")]
    #[actix_web::test]
    async fn routes_paths_to_pages(#[case] uri: &str, #[case] marker: &str) {
        let (status, body) = body_for(Method::GET, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(marker), "{uri} should render {marker}");
        assert!(body.contains("Image Gallery"));
    }

    #[actix_web::test]
    async fn login_page_has_no_welcome_banner() {
        let (_, body) = body_for(Method::GET, "/login").await;
        assert!(!body.contains("Welcome to RentitEase"));
        assert!(body.contains("id=\"login-message\""));
    }

    #[actix_web::test]
    async fn other_methods_are_rejected() {
        let (status, _) = body_for(Method::DELETE, "/login").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
