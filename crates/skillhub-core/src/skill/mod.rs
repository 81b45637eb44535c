//! Skill domain module.
//!
//! # Module Structure
//!
//! - `model`: Stored skill entries and the proficiency scale
//! - `draft`: The new-skill form and its required-field checks

mod draft;
mod model;

// Re-export public API
pub use draft::SkillDraft;
pub use model::{NewSkillRow, ProficiencyLevel, SkillEntry};
