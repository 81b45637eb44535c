//! Shared HTTP plumbing.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use skillhub_core::config::BackendConfig;
use skillhub_core::error::{Result, SkillhubError};
use tokio::sync::RwLock;

use crate::session_file::AuthSession;

/// The in-process copy of the current session.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Option<AuthSession>>>,
}

impl SessionHandle {
    pub async fn set(&self, session: AuthSession) {
        *self.inner.write().await = Some(session);
    }

    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }

    pub async fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(|s| s.access_token.clone())
    }
}

/// HTTP client bound to one backend project.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    config: BackendConfig,
    session: SessionHandle,
}

impl RestClient {
    pub fn new(config: BackendConfig, session: SessionHandle) -> Result<Self> {
        config.validate()?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| SkillhubError::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            config,
            session,
        })
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn rest_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url(), collection)
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.base_url(), path)
    }

    /// Adds the project key and the bearer token.
    ///
    /// Without a session the anon key doubles as the bearer, which is what
    /// the backend expects from signed-out clients.
    pub(crate) async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self
            .session
            .access_token()
            .await
            .unwrap_or_else(|| self.config.anon_key.clone());
        request
            .header("apikey", &self.config.anon_key)
            .bearer_auth(bearer)
    }
}

/// Turns a non-2xx response into a store error carrying status and body.
pub(crate) async fn check_status(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    tracing::warn!("[RestClient] {} failed ({}): {}", what, status, body);
    Err(SkillhubError::store(format!(
        "{} failed ({}): {}",
        what, status, body
    )))
}
