//! Driving port resolving the signed-in account from a session id.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Look up accounts by id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileQuery: Send + Sync {
    /// Return the account, or `None` when it no longer exists.
    async fn find_user(&self, id: UserId) -> Result<Option<User>, Error>;
}
