//! Account use-cases backed by a [`UserRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use super::password::{hash_password_blocking, verify_password_blocking};
use super::ports::{
    LoginService, RegistrationService, UserPersistenceError, UserProfileQuery, UserRepository,
};
use super::{Error, LoginCredentials, NewUser, Registration, Role, User, UserId};

/// Message shown for any failed sign-in; it does not reveal whether the
/// email exists.
pub const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Map repository failures onto client-safe domain errors.
pub fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
        UserPersistenceError::DuplicateEmail { .. } => Error::conflict("email already registered")
            .with_details(json!({ "field": "email", "code": "duplicate_email" })),
    }
}

/// Registration, login and profile lookup over one repository.
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
}

impl AccountService {
    /// Build the service over `users`.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl LoginService for AccountService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let record = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_persistence_error)?;
        let Some(record) = record else {
            debug!("login for unknown email");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };
        let matches =
            verify_password_blocking(record.password_hash, credentials.password().to_owned())
                .await?;
        if !matches {
            debug!(user_id = %record.user.id(), "login with wrong password");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }
        info!(user_id = %record.user.id(), "user signed in");
        Ok(record.user)
    }
}

#[async_trait]
impl RegistrationService for AccountService {
    async fn register(&self, registration: &Registration) -> Result<User, Error> {
        let password_hash = hash_password_blocking(registration.password().to_owned()).await?;
        let new_user = NewUser {
            name: registration.name().clone(),
            email: registration.email().clone(),
            password_hash,
            role: Role::User,
        };
        let user = self
            .users
            .insert(&new_user)
            .await
            .map_err(map_user_persistence_error)?;
        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }
}

#[async_trait]
impl UserProfileQuery for AccountService {
    async fn find_user(&self, id: UserId) -> Result<Option<User>, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_user_persistence_error)
    }
}

#[cfg(test)]
mod tests {
    //! Service behaviour over a mocked repository.
    use super::*;
    use crate::domain::ports::MockUserRepository;
    use crate::domain::{Email, ErrorCode, PasswordHash, UserName, UserRecord};
    use rstest::rstest;

    fn stored_user(id: i32) -> User {
        User::new(
            UserId::new(id).expect("id"),
            UserName::new("Ada").expect("name"),
            Email::new("ada@example.com").expect("email"),
            Role::User,
        )
    }

    fn credentials(password: &str) -> LoginCredentials {
        LoginCredentials::try_from_parts("ada@example.com", password).expect("credentials")
    }

    fn repository_with_password(password: &str) -> MockUserRepository {
        let hash = PasswordHash::generate(password).expect("hash");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email.as_ref() == "ada@example.com")
            .returning(move |_| {
                Ok(Some(UserRecord {
                    user: stored_user(1),
                    password_hash: hash.clone(),
                }))
            });
        repo
    }

    #[tokio::test]
    async fn authenticate_accepts_matching_password() {
        let service = AccountService::new(Arc::new(repository_with_password("s3cret")));
        let user = service
            .authenticate(&credentials("s3cret"))
            .await
            .expect("login succeeds");
        assert_eq!(user.id().get(), 1);
    }

    #[tokio::test]
    async fn authenticate_rejects_wrong_password() {
        let service = AccountService::new(Arc::new(repository_with_password("s3cret")));
        let err = service
            .authenticate(&credentials("guess"))
            .await
            .expect_err("login fails");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn authenticate_rejects_unknown_email_with_same_message() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        let service = AccountService::new(Arc::new(repo));
        let err = service
            .authenticate(&credentials("s3cret"))
            .await
            .expect_err("login fails");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn register_hashes_password_and_assigns_user_role() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .withf(|new_user| {
                new_user.role == Role::User
                    && new_user.email.as_ref() == "ada@example.com"
                    && new_user.password_hash.verify("s3cret")
                    && !new_user.password_hash.as_ref().contains("s3cret")
            })
            .times(1)
            .returning(|_| Ok(stored_user(9)));
        let service = AccountService::new(Arc::new(repo));
        let registration =
            Registration::try_from_parts("Ada", "Ada@Example.com", "s3cret").expect("valid");
        let user = service.register(&registration).await.expect("registered");
        assert_eq!(user.id().get(), 9);
    }

    #[rstest]
    #[case(UserPersistenceError::connection("down"), ErrorCode::ServiceUnavailable)]
    #[case(UserPersistenceError::query("bad sql"), ErrorCode::InternalError)]
    #[case(UserPersistenceError::duplicate_email("ada@example.com"), ErrorCode::Conflict)]
    #[tokio::test]
    async fn register_maps_repository_errors(
        #[case] failure: UserPersistenceError,
        #[case] expected: ErrorCode,
    ) {
        let mut repo = MockUserRepository::new();
        repo.expect_insert().returning(move |_| Err(failure.clone()));
        let service = AccountService::new(Arc::new(repo));
        let registration =
            Registration::try_from_parts("Ada", "ada@example.com", "pw").expect("valid");
        let err = service.register(&registration).await.expect_err("fails");
        assert_eq!(err.code(), expected);
    }

    #[tokio::test]
    async fn find_user_passes_through_missing_accounts() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let service = AccountService::new(Arc::new(repo));
        let found = service
            .find_user(UserId::new(3).expect("id"))
            .await
            .expect("lookup succeeds");
        assert!(found.is_none());
    }
}
