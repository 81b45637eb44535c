//! Explicit session context.
//!
//! The identity is resolved once and handed to every synchronization call,
//! instead of each call asking the auth service again.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::remote::{AuthService, Identity};

/// The identity a page is working on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    identity: Identity,
    resolved_at: DateTime<Utc>,
}

impl SessionContext {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            resolved_at: Utc::now(),
        }
    }

    /// Asks the auth service for the current identity.
    ///
    /// Returns `Ok(None)` when nobody is signed in.
    pub async fn resolve(auth: &dyn AuthService) -> Result<Option<Self>> {
        Ok(auth.current_identity().await?.map(Self::new))
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn user_id(&self) -> &str {
        &self.identity.id
    }

    pub fn resolved_at(&self) -> DateTime<Utc> {
        self.resolved_at
    }
}
