//! Signed-in account endpoint.
//!
//! ```text
//! GET /api/v1/session
//! ```

use actix_web::{get, web};

use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Return the account behind the session cookie.
///
/// Responds `401` when nobody is signed in or the account no longer exists.
#[get("/session")]
pub async fn current_session(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<User>> {
    let user_id = session.require_user_id()?;
    let user = state.profile.find_user(user_id).await?.ok_or_else(|| {
        session.clear();
        Error::unauthorized("login required")
    })?;
    Ok(web::Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockLoginService, MockRegistrationService, MockUserProfileQuery};
    use crate::domain::{Email, Role, UserId, UserName};
    use crate::inbound::http::test_utils::{mock_state, session_cookie, test_session_middleware};
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test};
    use serde_json::{Value, json};

    fn app_with_profile(
        profile: MockUserProfileQuery,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = mock_state(MockLoginService::new(), MockRegistrationService::new(), profile);
        App::new()
            .wrap(test_session_middleware())
            .app_data(web::Data::new(state))
            .service(web::scope("/api/v1").service(current_session))
            .route(
                "/sign-in/{id}",
                web::get().to(|session: SessionContext, path: web::Path<i32>| async move {
                    let id = UserId::new(path.into_inner())
                        .map_err(|err| Error::invalid_request(err.to_string()))?;
                    session.persist_user(id)?;
                    Ok::<_, Error>(HttpResponse::Ok())
                }),
            )
    }

    #[actix_web::test]
    async fn returns_signed_in_account() {
        let mut profile = MockUserProfileQuery::new();
        profile
            .expect_find_user()
            .withf(|id| id.get() == 4)
            .returning(|id| {
                Ok(Some(User::new(
                    id,
                    UserName::new("Ada").expect("name"),
                    Email::new("ada@example.com").expect("email"),
                    Role::Vendor,
                )))
            });
        let app = test::init_service(app_with_profile(profile)).await;

        let sign_in =
            test::call_service(&app, test::TestRequest::get().uri("/sign-in/4").to_request())
                .await;
        let cookie = session_cookie(&sign_in).expect("session cookie");
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/session")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({ "id": 4, "name": "Ada", "email": "ada@example.com", "role": "vendor" })
        );
    }

    #[actix_web::test]
    async fn anonymous_request_is_unauthorised() {
        let app = test::init_service(app_with_profile(MockUserProfileQuery::new())).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/session").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body.get("code").and_then(Value::as_str), Some("unauthorized"));
    }

    #[actix_web::test]
    async fn deleted_account_is_unauthorised() {
        let mut profile = MockUserProfileQuery::new();
        profile.expect_find_user().returning(|_| Ok(None));
        let app = test::init_service(app_with_profile(profile)).await;

        let sign_in =
            test::call_service(&app, test::TestRequest::get().uri("/sign-in/9").to_request())
                .await;
        let cookie = session_cookie(&sign_in).expect("session cookie");
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/session")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
