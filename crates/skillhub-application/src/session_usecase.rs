//! Session termination.

use std::sync::Arc;

use skillhub_core::navigation::{Navigator, Route};
use skillhub_core::notification::{Notification, Notifier};
use skillhub_core::remote::AuthService;

pub const LOGGED_OUT: &str = "Logged out successfully";

/// Signs the user out and hands control to the login entry point.
#[derive(Clone)]
pub struct SessionUseCase {
    auth: Arc<dyn AuthService>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl SessionUseCase {
    pub fn new(
        auth: Arc<dyn AuthService>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            auth,
            notifier,
            navigator,
        }
    }

    /// Invalidates the backend session, confirms, and navigates to `/login`.
    ///
    /// A backend failure is logged; the local session is gone either way, so
    /// the user still lands on the login page.
    pub async fn logout(&self) {
        if let Err(e) = self.auth.invalidate_session().await {
            tracing::warn!("[SessionUseCase] Backend sign-out failed: {}", e);
        }
        self.notifier.notify(Notification::success(LOGGED_OUT));
        self.navigator.navigate(Route::Login);
    }
}
