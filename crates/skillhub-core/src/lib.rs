//! Domain layer for SkillHub.
//!
//! Holds the profile and skill models, the seams to the hosted backend
//! (authentication and row storage), the notification and navigation
//! surfaces, and the shared error type.

pub mod config;
pub mod error;
pub mod navigation;
pub mod notification;
pub mod remote;
pub mod session;
pub mod skill;
pub mod user;

// Re-export common error type
pub use error::SkillhubError;
