//! Authentication service trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The authenticated principal.
///
/// Distinct from [`crate::user::UserProfile`], which is a row keyed by
/// `Identity::id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
        }
    }
}

/// Session-based authentication provided by the backend.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Returns the identity behind the current session.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Identity))`: A session exists and is valid
    /// - `Ok(None)`: Nobody is signed in
    /// - `Err(_)`: The auth endpoint could not be reached
    async fn current_identity(&self) -> Result<Option<Identity>>;

    /// Invalidates the current session on the backend and locally.
    async fn invalidate_session(&self) -> Result<()>;
}
