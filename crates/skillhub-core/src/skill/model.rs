//! Skill domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// How well a student claims to know a skill.
///
/// Stored and displayed as the bare variant name (`"Beginner"`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum ProficiencyLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// One row of the `skills` collection.
///
/// Never updated or deleted by this application. `id` and `created_at` are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: String,
    /// Owning profile; many skills to one user
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub proficiency_level: ProficiencyLevel,
    pub created_at: DateTime<Utc>,
}

/// The columns the client supplies when inserting a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSkillRow {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub proficiency_level: ProficiencyLevel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_levels_in_form_order() {
        let names: Vec<String> = ProficiencyLevel::iter().map(|l| l.to_string()).collect();
        assert_eq!(names, ["Beginner", "Intermediate", "Advanced", "Expert"]);
    }

    #[test]
    fn test_level_wire_format_matches_display() {
        for level in ProficiencyLevel::iter() {
            let json = serde_json::to_value(level).unwrap();
            assert_eq!(json, serde_json::Value::String(level.to_string()));
            assert_eq!(ProficiencyLevel::from_str(level.as_ref()).unwrap(), level);
        }
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        assert!(ProficiencyLevel::from_str("Guru").is_err());
        assert!(serde_json::from_str::<ProficiencyLevel>("\"Guru\"").is_err());
    }

    #[test]
    fn test_decode_store_row() {
        let row = serde_json::json!({
            "id": "s1",
            "user_id": "u1",
            "title": "Guitar",
            "description": "Lessons",
            "proficiency_level": "Intermediate",
            "created_at": "2024-03-01T10:15:30.123456+00:00"
        });
        let entry: SkillEntry = serde_json::from_value(row).unwrap();
        assert_eq!(entry.proficiency_level, ProficiencyLevel::Intermediate);
        assert_eq!(entry.created_at.to_rfc3339(), "2024-03-01T10:15:30.123456+00:00");
    }
}
