//! Backend configuration model.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillhubError};

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigRoot {
    #[serde(default)]
    pub backend: Option<BackendConfig>,
}

/// Where the hosted backend lives and the public key used to reach it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://xyzcompany.supabase.co`
    pub url: String,
    /// Public (anon) API key
    pub anon_key: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// URL without a trailing slash, ready for path joins.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(SkillhubError::config(format!(
                "backend url must start with http:// or https:// (got '{}')",
                self.url
            )));
        }
        if self.anon_key.trim().is_empty() {
            return Err(SkillhubError::config("backend anon_key is empty"));
        }
        if self.request_timeout_secs == 0 {
            return Err(SkillhubError::config("request_timeout_secs must be positive"));
        }
        Ok(())
    }
}
