//! Domain primitives, use-cases and ports for the account shell.
//!
//! Public surface:
//! - [`User`], [`UserId`], [`UserName`], [`Email`], [`Role`]: account model.
//! - [`LoginCredentials`], [`Registration`]: validated form input.
//! - [`Page`]: path-based page selection.
//! - [`AccountService`]: login, registration and profile lookup.
//! - [`Error`], [`ErrorCode`]: shared error envelope.

pub mod accounts;
pub mod auth;
pub mod pages;
pub mod password;
pub mod ports;
pub mod user;

pub use rentitease_common::{ApiResult, Error, ErrorCode};

pub use self::accounts::AccountService;
pub use self::auth::{CredentialField, CredentialsValidationError, LoginCredentials, Registration};
pub use self::pages::Page;
pub use self::password::PasswordHash;
pub use self::user::{Email, NewUser, Role, User, UserId, UserName, UserRecord, UserValidationError};
