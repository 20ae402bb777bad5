//! Driving port for creating accounts.

use async_trait::async_trait;

use crate::domain::{Error, Registration, User};

/// Create accounts from validated registration forms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Hash the password and store a `user`-role account. A taken email
    /// yields a `conflict` error.
    async fn register(&self, registration: &Registration) -> Result<User, Error>;
}
