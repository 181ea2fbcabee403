use std::sync::{Arc, Mutex, MutexGuard};
use tracing::error;

use premium_guide_domain::services::{FormSession, PremiumServiceError, PremiumServiceTrait};

use crate::api::handlers::errors::ErrorResponse;

/// Service type for dependency injection
pub type PremiumServiceHandle = Arc<dyn PremiumServiceTrait>;

/// Shared state handed to every handler
///
/// There is exactly one form session per process.
#[derive(Clone)]
pub struct AppState {
    /// Model, dataset and pricing
    pub service: PremiumServiceHandle,
    session: Arc<Mutex<FormSession>>,
}

impl AppState {
    /// Create state with a fresh session
    pub fn new(service: PremiumServiceHandle) -> Self {
        Self {
            service,
            session: Arc::new(Mutex::new(FormSession::new())),
        }
    }

    /// Lock the session for one interaction pass
    pub fn lock_session(&self) -> Result<MutexGuard<'_, FormSession>, ErrorResponse> {
        self.session.lock().map_err(|e| {
            error!("Session lock poisoned: {}", e);
            ErrorResponse::from(PremiumServiceError::SessionError(e.to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use premium_guide_domain::testing::create_mock_premium_service;

    #[test]
    fn test_poisoned_session_is_internal_error() {
        let state = AppState::new(Arc::new(create_mock_premium_service(5000.0, 5000.0)));

        let session = state.session.clone();
        let _ = std::thread::spawn(move || {
            let _guard = session.lock().unwrap();
            panic!("session holder crashed");
        })
        .join();

        let err = match state.lock_session() {
            Err(err) => err,
            Ok(_) => panic!("expected the poisoned lock to be reported"),
        };
        assert_eq!(err.error, "internal_error");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
