//! The new-skill form.

use serde::{Deserialize, Serialize};

use super::model::{NewSkillRow, ProficiencyLevel};
use crate::error::{Result, SkillhubError};

/// Candidate input for a new skill.
///
/// Kept by the page between submissions: a failed insert leaves it as typed,
/// a successful one resets it to [`SkillDraft::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDraft {
    pub title: String,
    pub description: String,
    pub proficiency_level: ProficiencyLevel,
}

impl SkillDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        proficiency_level: ProficiencyLevel,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            proficiency_level,
        }
    }

    /// Required-field check run before anything is sent.
    ///
    /// Blank (whitespace-only) values count as empty.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(SkillhubError::validation("title", "Title is required"));
        }
        if self.description.trim().is_empty() {
            return Err(SkillhubError::validation(
                "description",
                "Description is required",
            ));
        }
        Ok(())
    }

    /// Builds the insert payload for `user_id`. Values are sent as typed.
    pub fn to_row(&self, user_id: &str) -> NewSkillRow {
        NewSkillRow {
            user_id: user_id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            proficiency_level: self.proficiency_level,
        }
    }

    /// Clears the form back to `("", "", Beginner)`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
