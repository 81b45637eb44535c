//! Page-local copy of the profile and its skills.

use skillhub_core::skill::SkillEntry;
use skillhub_core::user::UserProfile;

/// What the profile page renders.
///
/// Both fields are only ever replaced wholesale; the store is the source of
/// truth and this is a possibly-stale snapshot of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileViewModel {
    profile: Option<UserProfile>,
    skills: Vec<SkillEntry>,
}

impl ProfileViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Skills in display order (newest first).
    pub fn skills(&self) -> &[SkillEntry] {
        &self.skills
    }

    pub fn replace_profile(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }

    pub fn replace_skills(&mut self, skills: Vec<SkillEntry>) {
        self.skills = skills;
    }
}
