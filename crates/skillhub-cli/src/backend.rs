//! Backend wiring for one CLI invocation.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::json;
use skillhub_core::remote::{AuthService, Collection, Identity, Row, RowStore};
use skillhub_infrastructure::{
    ConfigService, InMemoryBackend, RestAuthService, RestClient, RestRowStore, SessionFile,
    SessionHandle, SkillhubPaths,
};

const DEMO_USER_ID: &str = "demo-student";

pub enum Backend {
    /// Seeded in-memory data, signed in as the demo student. Nothing
    /// persists between invocations.
    Offline(InMemoryBackend),
    /// The hosted backend, with the session restored from disk.
    Remote {
        auth: RestAuthService,
        store: RestRowStore,
    },
}

impl Backend {
    pub async fn connect(offline: bool) -> Result<Self> {
        if offline {
            return Ok(Backend::Offline(demo_backend().await));
        }

        let paths = SkillhubPaths::default();
        let config_service = ConfigService::new(&paths)?;
        let config = config_service.load_backend().await.with_context(|| {
            format!(
                "No usable backend config in {} (run `skillhub configure` or pass --offline)",
                config_service.path().display()
            )
        })?;

        let client = RestClient::new(config, SessionHandle::default())?;
        let auth = RestAuthService::new(client.clone()).with_session_file(SessionFile::new(&paths)?);
        if let Some(identity) = auth.restore().await? {
            tracing::debug!("[Backend] Restored session for {}", identity.id);
        }

        Ok(Backend::Remote {
            auth,
            store: RestRowStore::new(client),
        })
    }

    pub fn auth(&self) -> Arc<dyn AuthService> {
        match self {
            Backend::Offline(backend) => Arc::new(backend.clone()),
            Backend::Remote { auth, .. } => Arc::new(auth.clone()),
        }
    }

    pub fn store(&self) -> Arc<dyn RowStore> {
        match self {
            Backend::Offline(backend) => Arc::new(backend.clone()),
            Backend::Remote { store, .. } => Arc::new(store.clone()),
        }
    }
}

fn row(value: serde_json::Value) -> Row {
    match value {
        serde_json::Value::Object(map) => map,
        _ => Row::new(),
    }
}

async fn demo_backend() -> InMemoryBackend {
    let backend = InMemoryBackend::new();
    backend
        .sign_in(Identity {
            id: DEMO_USER_ID.to_string(),
            email: Some("ada@example.edu".to_string()),
        })
        .await;

    backend
        .seed(
            Collection::Users,
            row(json!({
                "id": DEMO_USER_ID,
                "email": "ada@example.edu",
                "full_name": "Ada Lovelace",
                "university": "University of London",
                "major": "Mathematics",
                "graduation_year": 2026,
                "bio": "Notes on the analytical engine.",
                "avatar_url": null
            })),
        )
        .await;

    let skills = [
        ("Rust", "Async services and CLIs", "Intermediate", "2024-03-02T09:30:00.000000+00:00"),
        ("Calculus", "Series and limits", "Advanced", "2024-01-15T14:00:00.000000+00:00"),
    ];
    for (i, (title, description, level, created_at)) in skills.into_iter().enumerate() {
        backend
            .seed(
                Collection::Skills,
                row(json!({
                    "id": format!("demo-skill-{}", i + 1),
                    "user_id": DEMO_USER_ID,
                    "title": title,
                    "description": description,
                    "proficiency_level": level,
                    "created_at": created_at
                })),
            )
            .await;
    }

    backend
}
