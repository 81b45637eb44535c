//! UserProfile domain model.
//!
//! One row of the `users` collection, keyed by the authenticated identity id.
//! Created by the registration flow; read-only here.

use reqwest::Url;
use serde::{Deserialize, Deserializer, Serialize};

/// Cover image shown when a profile has no avatar of its own.
pub const DEFAULT_COVER_URL: &str = "https://source.unsplash.com/random/800x200/?university";

/// Initials avatar generator; the profile's full name is the seed.
pub const INITIALS_AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/initials/svg";

/// User profile domain model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Same value as the identity id
    pub id: String,
    pub email: String,
    /// Display name
    pub full_name: String,
    /// Institution
    pub university: String,
    /// Field of study
    pub major: String,
    pub graduation_year: i32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

// The column is nullable for profiles created before bio existed.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl UserProfile {
    /// Returns the avatar reference, or the stock cover image when none is set.
    pub fn cover_image_url(&self) -> &str {
        self.avatar_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_COVER_URL)
    }

    /// Returns the generated initials avatar for this profile.
    pub fn initials_avatar_url(&self) -> String {
        Url::parse_with_params(INITIALS_AVATAR_BASE_URL, &[("seed", self.full_name.as_str())])
            .map(String::from)
            .unwrap_or_else(|_| INITIALS_AVATAR_BASE_URL.to_string())
    }

    /// `"<university> • <major>"`
    pub fn headline(&self) -> String {
        format!("{} • {}", self.university, self.major)
    }

    /// `"Class of <graduation_year>"`
    pub fn class_of(&self) -> String {
        format!("Class of {}", self.graduation_year)
    }
}
