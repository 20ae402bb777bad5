//! Form handlers for sign-in, sign-up and sign-out.
//!
//! ```text
//! POST /login     email=…&password=…
//! POST /register  name=…&email=…&password=…
//! POST /logout
//! ```
//!
//! Failures re-render the submitting form with its message region filled
//! in; successes start a session and redirect to `/`. Every login failure,
//! malformed input included, gets the same 401 message.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, post, web};
use rentitease_common::error::status_for;
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::domain::{
    CredentialsValidationError, Error, ErrorCode, LoginCredentials, Page, Registration,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{PageContext, shell_page};

/// Shown for an unknown email or a wrong password alike.
pub const INVALID_LOGIN_MESSAGE: &str = "Invalid email or password.";
/// Shown when registration hits an existing email.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "An account with this email already exists.";
/// Shown when a backing service fails.
pub const UNAVAILABLE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Login form body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

fn form_feedback(page: Page, status: StatusCode, ctx: PageContext) -> HttpResponse {
    shell_page(page, &ctx).into_response(status)
}

fn validation_message(err: &CredentialsValidationError) -> String {
    let mut message = err.to_string();
    if let Some(first) = message.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    message.push('.');
    message
}

/// Status and user-facing text for a service failure.
fn service_failure(page: Page, err: &Error) -> (StatusCode, &'static str) {
    match err.code() {
        ErrorCode::Unauthorized => (StatusCode::UNAUTHORIZED, INVALID_LOGIN_MESSAGE),
        ErrorCode::Conflict => (StatusCode::CONFLICT, DUPLICATE_EMAIL_MESSAGE),
        code => {
            error!(?page, error = %err, "account service failed");
            (status_for(code), UNAVAILABLE_MESSAGE)
        }
    }
}

/// Verify credentials and start a session.
#[post("/login")]
pub async fn login(
    session: SessionContext,
    state: web::Data<HttpState>,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let LoginForm { email, password } = form.into_inner();
    let credentials = match LoginCredentials::try_from_parts(&email, &password) {
        Ok(credentials) => credentials,
        Err(err) => {
            debug!(field = ?err.field(), "malformed login rejected");
            return Ok(form_feedback(
                Page::Login,
                StatusCode::UNAUTHORIZED,
                PageContext::with_feedback(INVALID_LOGIN_MESSAGE, "", email),
            ));
        }
    };

    match state.login.authenticate(&credentials).await {
        Ok(user) => {
            session.persist_user(user.id())?;
            Ok(redirect_home())
        }
        Err(err) => {
            let (status, message) = service_failure(Page::Login, &err);
            Ok(form_feedback(
                Page::Login,
                status,
                PageContext::with_feedback(message, "", email),
            ))
        }
    }
}

/// Create an account with role `user` and sign it in.
#[post("/register")]
pub async fn register(
    session: SessionContext,
    state: web::Data<HttpState>,
    form: web::Form<RegisterForm>,
) -> ApiResult<HttpResponse> {
    let RegisterForm {
        name,
        email,
        password,
    } = form.into_inner();
    let registration = match Registration::try_from_parts(&name, &email, &password) {
        Ok(registration) => registration,
        Err(err) => {
            return Ok(form_feedback(
                Page::Register,
                StatusCode::BAD_REQUEST,
                PageContext::with_feedback(validation_message(&err), name, email),
            ));
        }
    };

    match state.registration.register(&registration).await {
        Ok(user) => {
            info!(user_id = %user.id(), "registration complete");
            session.persist_user(user.id())?;
            Ok(redirect_home())
        }
        Err(err) => {
            let (status, message) = service_failure(Page::Register, &err);
            Ok(form_feedback(
                Page::Register,
                status,
                PageContext::with_feedback(message, name, email),
            ))
        }
    }
}

/// End the session.
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    redirect_home()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockLoginService, MockRegistrationService, MockUserProfileQuery};
    use crate::domain::{Email, Role, User, UserId, UserName};
    use crate::inbound::http::test_utils::{mock_state, session_cookie, test_session_middleware};
    use actix_web::dev::ServiceResponse;
    use actix_web::{App, test};
    use rstest::rstest;

    fn ada() -> User {
        User::new(
            UserId::new(5).expect("id"),
            UserName::new("Ada").expect("name"),
            Email::new("ada@example.com").expect("email"),
            Role::User,
        )
    }

    async fn post_form(
        state: HttpState,
        uri: &str,
        form: &[(&str, &str)],
    ) -> ServiceResponse {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .app_data(web::Data::new(state))
                .service(login)
                .service(register)
                .service(logout),
        )
        .await;
        let req = test::TestRequest::post()
            .uri(uri)
            .set_form(form)
            .to_request();
        test::call_service(&app, req).await
    }

    async fn body_text(res: ServiceResponse) -> String {
        String::from_utf8(test::read_body(res).await.to_vec()).expect("utf-8")
    }

    #[actix_web::test]
    async fn successful_login_sets_session_and_redirects() {
        let mut login_service = MockLoginService::new();
        login_service
            .expect_authenticate()
            .withf(|creds| creds.email().as_ref() == "ada@example.com" && creds.password() == "pw")
            .times(1)
            .returning(|_| Ok(ada()));
        let state = mock_state(
            login_service,
            MockRegistrationService::new(),
            MockUserProfileQuery::new(),
        );

        let res = post_form(
            state,
            "/login",
            &[("email", "Ada@Example.com"), ("password", "pw")],
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some("/")
        );
        assert!(session_cookie(&res).is_some());
    }

    #[actix_web::test]
    async fn failed_login_renders_message_with_401() {
        let mut login_service = MockLoginService::new();
        login_service
            .expect_authenticate()
            .returning(|_| Err(Error::unauthorized("invalid credentials")));
        let state = mock_state(
            login_service,
            MockRegistrationService::new(),
            MockUserProfileQuery::new(),
        );

        let res = post_form(
            state,
            "/login",
            &[("email", "ada@example.com"), ("password", "nope")],
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert!(session_cookie(&res).is_none());
        let body = body_text(res).await;
        assert!(body.contains(INVALID_LOGIN_MESSAGE));
        assert!(body.contains("value=\"ada@example.com\""));
    }

    #[rstest]
    #[case(&[("email", ""), ("password", "pw")])]
    #[case(&[("email", "ada@example.com")])]
    #[case(&[("email", "not-an-email"), ("password", "pw")])]
    #[actix_web::test]
    async fn malformed_login_gets_the_generic_401(#[case] form: &[(&str, &str)]) {
        let state = mock_state(
            MockLoginService::new(),
            MockRegistrationService::new(),
            MockUserProfileQuery::new(),
        );
        let res = post_form(state, "/login", form).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body = body_text(res).await;
        assert!(body.contains(INVALID_LOGIN_MESSAGE));
        assert!(!body.contains("must not be empty"));
    }

    #[actix_web::test]
    async fn registration_signs_in_new_account() {
        let mut registration = MockRegistrationService::new();
        registration
            .expect_register()
            .withf(|reg| reg.name().as_ref() == "Ada" && reg.email().as_ref() == "ada@example.com")
            .times(1)
            .returning(|_| Ok(ada()));
        let state = mock_state(
            MockLoginService::new(),
            registration,
            MockUserProfileQuery::new(),
        );

        let res = post_form(
            state,
            "/register",
            &[("name", "Ada"), ("email", "ada@example.com"), ("password", "pw")],
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert!(session_cookie(&res).is_some());
    }

    #[rstest]
    #[case(Error::conflict("email already registered"), StatusCode::CONFLICT, DUPLICATE_EMAIL_MESSAGE)]
    #[case(Error::service_unavailable("db down"), StatusCode::SERVICE_UNAVAILABLE, UNAVAILABLE_MESSAGE)]
    #[actix_web::test]
    async fn registration_failures_render_register_message(
        #[case] failure: Error,
        #[case] status: StatusCode,
        #[case] message: &str,
    ) {
        let mut registration = MockRegistrationService::new();
        registration
            .expect_register()
            .returning(move |_| Err(failure.clone()));
        let state = mock_state(
            MockLoginService::new(),
            registration,
            MockUserProfileQuery::new(),
        );

        let res = post_form(
            state,
            "/register",
            &[("name", "Ada"), ("email", "ada@example.com"), ("password", "pw")],
        )
        .await;
        assert_eq!(res.status(), status);
        let body = body_text(res).await;
        assert!(body.contains("id=\"register-message\""));
        assert!(body.contains(message));
        assert!(body.contains("value=\"Ada\""));
        assert!(!body.contains("db down"));
    }

    #[actix_web::test]
    async fn invalid_registration_reports_first_failing_field() {
        let state = mock_state(
            MockLoginService::new(),
            MockRegistrationService::new(),
            MockUserProfileQuery::new(),
        );
        let res = post_form(
            state,
            "/register",
            &[("name", "  "), ("email", "bad"), ("password", "")],
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(res).await.contains("Name must not be empty."));
    }

    #[actix_web::test]
    async fn logout_redirects_home() {
        let state = mock_state(
            MockLoginService::new(),
            MockRegistrationService::new(),
            MockUserProfileQuery::new(),
        );
        let res = post_form(state, "/logout", &[]).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
    }
}
