//! GoTrue-backed authentication.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use skillhub_core::error::{Result, SkillhubError};
use skillhub_core::remote::{AuthService, Identity};

use super::client::{RestClient, check_status};
use crate::session_file::{AuthSession, SessionFile};

#[derive(Debug, Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    user: Identity,
}

/// Auth service that keeps the session in a [`super::SessionHandle`] and,
/// optionally, mirrors it into a [`SessionFile`].
#[derive(Debug, Clone)]
pub struct RestAuthService {
    client: RestClient,
    session_file: Option<SessionFile>,
}

impl RestAuthService {
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            session_file: None,
        }
    }

    /// Persists sessions to `file` on sign-in and removes it on sign-out.
    pub fn with_session_file(mut self, file: SessionFile) -> Self {
        self.session_file = Some(file);
        self
    }

    /// Loads a previously persisted session into memory.
    ///
    /// Expired or unreadable sessions are discarded. Returns the restored
    /// identity.
    pub async fn restore(&self) -> Result<Option<Identity>> {
        let Some(file) = &self.session_file else {
            return Ok(None);
        };
        let stored = match file.load().await {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("[RestAuthService] Unreadable stored session, discarding: {}", e);
                file.clear().await?;
                return Ok(None);
            }
        };
        match stored {
            Some(session) if !session.is_expired(Utc::now()) => {
                let identity = session.identity.clone();
                self.client.session().set(session).await;
                tracing::debug!("[RestAuthService] Restored session for {}", identity.id);
                Ok(Some(identity))
            }
            Some(_) => {
                tracing::info!("[RestAuthService] Stored session expired, discarding");
                file.clear().await?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Exchanges email and password for a session.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Identity> {
        let request = self
            .client
            .http()
            .post(self.client.auth_url("token"))
            .query(&[("grant_type", "password")])
            .json(&PasswordGrant { email, password });
        let response = self.client.authorize(request).await.send().await?;
        let response = check_status(response, "sign in").await?;
        let token: TokenResponse = response.json().await?;

        let session = AuthSession {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at: token
                .expires_in
                .map(|secs| Utc::now() + Duration::seconds(secs)),
            identity: token.user,
        };
        let identity = session.identity.clone();

        if let Some(file) = &self.session_file {
            file.save(&session).await?;
        }
        self.client.session().set(session).await;

        tracing::info!("[RestAuthService] Signed in as {}", identity.id);
        Ok(identity)
    }

    async fn forget_session(&self) -> Result<()> {
        self.client.session().clear().await;
        if let Some(file) = &self.session_file {
            file.clear().await?;
        }
        Ok(())
    }
}

#[async_trait]
impl AuthService for RestAuthService {
    async fn current_identity(&self) -> Result<Option<Identity>> {
        if self.client.session().access_token().await.is_none() {
            return Ok(None);
        }

        let request = self.client.http().get(self.client.auth_url("user"));
        let response = self.client.authorize(request).await.send().await?;

        // A rejected token means the session is gone, not that the call failed.
        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            tracing::info!("[RestAuthService] Token rejected, treating as signed out");
            self.forget_session().await?;
            return Ok(None);
        }

        let response = check_status(response, "get user").await?;
        Ok(Some(response.json::<Identity>().await?))
    }

    async fn invalidate_session(&self) -> Result<()> {
        if self.client.session().access_token().await.is_none() {
            return self.forget_session().await;
        }

        let request = self.client.http().post(self.client.auth_url("logout"));
        let remote = match self.client.authorize(request).await.send().await {
            Ok(response) => check_status(response, "sign out").await.map(|_| ()),
            Err(e) => Err(SkillhubError::from(e)),
        };

        // The local copy goes regardless of what the backend said.
        self.forget_session().await?;
        remote
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::SkillhubPaths;
    use crate::rest::SessionHandle;
    use crate::rest::test_server::{Reply, TestServer};
    use skillhub_core::config::BackendConfig;

    fn service_at(tmp: &std::path::Path, url: &str) -> RestAuthService {
        let client =
            RestClient::new(BackendConfig::new(url, "anon"), SessionHandle::default()).unwrap();
        let file = SessionFile::new(&SkillhubPaths::new(Some(tmp))).unwrap();
        RestAuthService::new(client).with_session_file(file)
    }

    fn service(tmp: &std::path::Path) -> RestAuthService {
        service_at(tmp, "http://127.0.0.1:9")
    }

    fn live_session() -> AuthSession {
        AuthSession {
            access_token: "live".to_string(),
            refresh_token: None,
            expires_at: None,
            identity: Identity::new("u1"),
        }
    }

    /// Signed-in service whose session is both in memory and on disk.
    async fn signed_in_at(tmp: &std::path::Path, url: &str) -> (RestAuthService, SessionFile) {
        let auth = service_at(tmp, url);
        let file = SessionFile::new(&SkillhubPaths::new(Some(tmp))).unwrap();
        file.save(&live_session()).await.unwrap();
        assert_eq!(auth.restore().await.unwrap(), Some(Identity::new("u1")));
        (auth, file)
    }

    #[test]
    fn test_token_response_shape() {
        let token: TokenResponse = serde_json::from_value(serde_json::json!({
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r",
            "user": { "id": "u1", "email": "ada@example.edu", "aud": "authenticated" }
        }))
        .unwrap();
        assert_eq!(token.user.id, "u1");
        assert_eq!(token.expires_in, Some(3600));
    }

    #[tokio::test]
    async fn test_signed_out_without_network() {
        let tmp = tempfile::tempdir().unwrap();
        let auth = service(tmp.path());
        assert_eq!(auth.restore().await.unwrap(), None);
        assert_eq!(auth.current_identity().await.unwrap(), None);
        auth.invalidate_session().await.unwrap();
    }

    #[tokio::test]
    async fn test_restore_discards_expired_session() {
        let tmp = tempfile::tempdir().unwrap();
        let auth = service(tmp.path());
        let file = SessionFile::new(&SkillhubPaths::new(Some(tmp.path()))).unwrap();
        file.save(&AuthSession {
            access_token: "old".to_string(),
            refresh_token: None,
            expires_at: Some(Utc::now() - Duration::minutes(5)),
            identity: Identity::new("u1"),
        })
        .await
        .unwrap();

        assert_eq!(auth.restore().await.unwrap(), None);
        assert_eq!(file.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_restore_live_session() {
        let tmp = tempfile::tempdir().unwrap();
        let auth = service(tmp.path());
        let file = SessionFile::new(&SkillhubPaths::new(Some(tmp.path()))).unwrap();
        file.save(&AuthSession {
            access_token: "live".to_string(),
            refresh_token: None,
            expires_at: None,
            identity: Identity::new("u1"),
        })
        .await
        .unwrap();

        assert_eq!(auth.restore().await.unwrap(), Some(Identity::new("u1")));
        assert_eq!(
            auth.client.session().access_token().await.as_deref(),
            Some("live")
        );
    }

    #[tokio::test]
    async fn test_restore_discards_unreadable_session() {
        let tmp = tempfile::tempdir().unwrap();
        let auth = service(tmp.path());
        let paths = SkillhubPaths::new(Some(tmp.path()));
        let path = paths.session_file().unwrap();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ truncated").unwrap();

        assert_eq!(auth.restore().await.unwrap(), None);
        assert!(!path.exists());
        assert_eq!(auth.client.session().access_token().await, None);
    }

    #[tokio::test]
    async fn test_sign_in_persists_session() {
        let tmp = tempfile::tempdir().unwrap();
        let server = TestServer::start(vec![Reply::new(
            200,
            r#"{"access_token":"jwt","token_type":"bearer","expires_in":3600,"refresh_token":"r","user":{"id":"u1","email":"ada@example.edu"}}"#,
        )])
        .await;
        let auth = service_at(tmp.path(), server.url());

        let identity = auth
            .sign_in_with_password("ada@example.edu", "secret")
            .await
            .unwrap();
        assert_eq!(identity.id, "u1");

        let request = &server.requests()[0];
        assert_eq!(request.method, "POST");
        assert_eq!(request.target, "/auth/v1/token?grant_type=password");
        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body["email"], "ada@example.edu");

        let file = SessionFile::new(&SkillhubPaths::new(Some(tmp.path()))).unwrap();
        let stored = file.load().await.unwrap().unwrap();
        assert_eq!(stored.access_token, "jwt");
        assert!(stored.expires_at.is_some());
    }

    #[tokio::test]
    async fn test_current_identity_uses_bearer_token() {
        let tmp = tempfile::tempdir().unwrap();
        let server =
            TestServer::start(vec![Reply::new(200, r#"{"id":"u1","email":"ada@example.edu"}"#)])
                .await;
        let (auth, _) = signed_in_at(tmp.path(), server.url()).await;

        let identity = auth.current_identity().await.unwrap().unwrap();
        assert_eq!(identity.email.as_deref(), Some("ada@example.edu"));

        let request = &server.requests()[0];
        assert_eq!(request.target, "/auth/v1/user");
        assert_eq!(request.header("authorization"), Some("Bearer live"));
        assert_eq!(request.header("apikey"), Some("anon"));
    }

    #[tokio::test]
    async fn test_rejected_token_forgets_session() {
        for status in [401, 403] {
            let tmp = tempfile::tempdir().unwrap();
            let server =
                TestServer::start(vec![Reply::new(status, r#"{"message":"invalid JWT"}"#)]).await;
            let (auth, file) = signed_in_at(tmp.path(), server.url()).await;

            assert_eq!(auth.current_identity().await.unwrap(), None);
            assert_eq!(auth.client.session().access_token().await, None);
            assert_eq!(file.load().await.unwrap(), None);
        }
    }

    #[tokio::test]
    async fn test_identity_server_error_is_store_error() {
        let tmp = tempfile::tempdir().unwrap();
        let server = TestServer::start(vec![Reply::new(500, "{}")]).await;
        let (auth, file) = signed_in_at(tmp.path(), server.url()).await;

        assert!(auth.current_identity().await.unwrap_err().is_store());
        // Only a rejected token ends the session.
        assert!(file.load().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_logout_clears_local_session_when_backend_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let server = TestServer::start(vec![Reply::new(500, r#"{"message":"down"}"#)]).await;
        let (auth, file) = signed_in_at(tmp.path(), server.url()).await;

        assert!(auth.invalidate_session().await.unwrap_err().is_store());
        assert_eq!(server.requests()[0].target, "/auth/v1/logout");
        assert_eq!(auth.client.session().access_token().await, None);
        assert_eq!(file.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_logout_success() {
        let tmp = tempfile::tempdir().unwrap();
        let server = TestServer::start(vec![Reply::new(204, "")]).await;
        let (auth, file) = signed_in_at(tmp.path(), server.url()).await;

        auth.invalidate_session().await.unwrap();
        assert_eq!(file.load().await.unwrap(), None);
        assert_eq!(auth.current_identity().await.unwrap(), None);
    }
}
