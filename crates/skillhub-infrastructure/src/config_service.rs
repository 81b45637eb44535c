//! Backend configuration loading.
//!
//! Priority: environment variables > config.toml. Either source may supply
//! any field; the merged result must validate.

use std::path::PathBuf;

use skillhub_core::config::{BackendConfig, ConfigRoot, DEFAULT_REQUEST_TIMEOUT_SECS};
use skillhub_core::error::{Result, SkillhubError};

use crate::paths::SkillhubPaths;

pub const ENV_URL: &str = "SKILLHUB_URL";
pub const ENV_ANON_KEY: &str = "SKILLHUB_ANON_KEY";
pub const ENV_TIMEOUT_SECS: &str = "SKILLHUB_TIMEOUT_SECS";

/// Reads and writes `config.toml`.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(paths: &SkillhubPaths) -> Result<Self> {
        Ok(Self {
            path: paths.config_file()?,
        })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Loads the file. A missing file is an empty config.
    pub async fn load_root(&self) -> Result<ConfigRoot> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("[ConfigService] No config at {:?}", self.path);
                Ok(ConfigRoot::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Loads the backend settings, applying environment overrides.
    pub async fn load_backend(&self) -> Result<BackendConfig> {
        let root = self.load_root().await?;
        let config = merge_env(root.backend, |key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Writes `backend` into the file, creating the directory if needed.
    pub async fn save_backend(&self, backend: BackendConfig) -> Result<()> {
        backend.validate()?;
        let mut root = self.load_root().await?;
        root.backend = Some(backend);

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string_pretty(&root)?;
        tokio::fs::write(&self.path, content).await?;
        tracing::info!("[ConfigService] Saved backend config to {:?}", self.path);
        Ok(())
    }
}

/// Overlays environment values on top of the file values.
fn merge_env(
    file: Option<BackendConfig>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<BackendConfig> {
    let url = lookup(ENV_URL).or_else(|| file.as_ref().map(|c| c.url.clone()));
    let anon_key = lookup(ENV_ANON_KEY).or_else(|| file.as_ref().map(|c| c.anon_key.clone()));
    let timeout = match lookup(ENV_TIMEOUT_SECS) {
        Some(raw) => raw.parse::<u64>().map_err(|_| {
            SkillhubError::config(format!("{} is not a number: '{}'", ENV_TIMEOUT_SECS, raw))
        })?,
        None => file
            .as_ref()
            .map(|c| c.request_timeout_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
    };

    let url = url.ok_or_else(|| {
        SkillhubError::config(format!(
            "backend url not found in config.toml or {}",
            ENV_URL
        ))
    })?;
    let anon_key = anon_key.ok_or_else(|| {
        SkillhubError::config(format!(
            "backend anon_key not found in config.toml or {}",
            ENV_ANON_KEY
        ))
    })?;

    Ok(BackendConfig {
        url,
        anon_key,
        request_timeout_secs: timeout,
    })
}
