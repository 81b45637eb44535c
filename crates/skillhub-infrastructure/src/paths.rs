//! Unified path management for skillhub configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/skillhub/          # Config directory
//! ├── config.toml              # Backend URL and anon key
//! └── session.json             # Access token of the signed-in user
//! ```

use std::path::{Path, PathBuf};

use skillhub_core::error::{Result, SkillhubError};

const APP_DIR_NAME: &str = "skillhub";

/// Resolves skillhub file locations.
///
/// A base path overrides the platform config directory, which keeps tests
/// inside a temp dir.
#[derive(Debug, Clone)]
pub struct SkillhubPaths {
    base: Option<PathBuf>,
}

impl SkillhubPaths {
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the skillhub configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: e.g. `~/.config/skillhub/`
    /// - `Err(SkillhubError::Config)`: The platform has no config directory
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| SkillhubError::config("Cannot find config directory"))
    }

    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Path to the persisted session.
    ///
    /// Holds a bearer token; it is written with mode 600 on Unix.
    pub fn session_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("session.json"))
    }
}

impl Default for SkillhubPaths {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_override() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = SkillhubPaths::new(Some(tmp.path()));
        assert_eq!(paths.config_file().unwrap(), tmp.path().join("config.toml"));
        assert_eq!(paths.session_file().unwrap(), tmp.path().join("session.json"));
    }
}
