//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{LoginService, RegistrationService, UserProfileQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn RegistrationService>,
    pub profile: Arc<dyn UserProfileQuery>,
}

impl HttpState {
    /// Bundle the port implementations used by the handlers.
    pub fn new(
        login: Arc<dyn LoginService>,
        registration: Arc<dyn RegistrationService>,
        profile: Arc<dyn UserProfileQuery>,
    ) -> Self {
        Self {
            login,
            registration,
            profile,
        }
    }

    /// Use one service for every port.
    ///
    /// # Examples
    /// ```ignore
    /// let service = AccountService::new(Arc::new(DieselUserRepository::new(pool)));
    /// let state = HttpState::from_service(service);
    /// ```
    pub fn from_service<S>(service: S) -> Self
    where
        S: LoginService + RegistrationService + UserProfileQuery + 'static,
    {
        let service = Arc::new(service);
        Self::new(service.clone(), service.clone(), service)
    }
}
