//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod login_service;
mod registration_service;
mod user_profile_query;
mod user_repository;

pub use login_service::LoginService;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use registration_service::RegistrationService;
#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use user_profile_query::UserProfileQuery;
#[cfg(test)]
pub use user_profile_query::MockUserProfileQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
