//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: User profile domain model and presentation helpers

mod model;

// Re-export public API
pub use model::{DEFAULT_COVER_URL, INITIALS_AVATAR_BASE_URL, UserProfile};
