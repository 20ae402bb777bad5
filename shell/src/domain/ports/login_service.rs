//! Driving port for signing in.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User};

/// Authenticate credentials against stored accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Return the matching account, or an `unauthorized` error when the
    /// email is unknown or the password does not match.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;
}
