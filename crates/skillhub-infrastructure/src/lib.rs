//! Infrastructure adapters for SkillHub.
//!
//! Concrete implementations of the backend seams defined in `skillhub-core`:
//! REST adapters for the hosted backend, an in-memory backend, and the
//! on-disk configuration and session files.

pub mod config_service;
pub mod in_memory;
pub mod paths;
pub mod rest;
pub mod session_file;

pub use crate::config_service::ConfigService;
pub use crate::in_memory::{InMemoryBackend, StoreOperation};
pub use crate::paths::SkillhubPaths;
pub use crate::rest::{RestAuthService, RestClient, RestRowStore, SessionHandle};
pub use crate::session_file::{AuthSession, SessionFile};
