//! The profile page controller.
//!
//! Owns the view-model, the new-skill draft and the session context for one
//! displayed page, and runs the synchronization flow against the backend:
//!
//! - `enter`: resolve the identity once, then load profile and skills
//! - `load_profile` / `load_skills`: full re-reads that replace local state
//! - `submit_skill`: validate, insert, then re-read the skill list in full
//!
//! Every store failure ends the same way: an error notification, and local
//! state exactly as it was before the call.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use skillhub_core::error::SkillhubError;
use skillhub_core::navigation::{Navigator, Route};
use skillhub_core::notification::{Notification, Notifier};
use skillhub_core::remote::{AuthService, RowStore};
use skillhub_core::session::SessionContext;
use skillhub_core::skill::SkillDraft;
use tokio::sync::RwLock;

use crate::in_flight::InFlightGuard;
use crate::page_state::PageState;
use crate::session_usecase::SessionUseCase;
use crate::skill_sync::SkillSync;
use crate::view_model::ProfileViewModel;

pub const ERROR_FETCHING_USER: &str = "Error fetching user data";
pub const ERROR_FETCHING_SKILLS: &str = "Error fetching skills";
pub const ERROR_ADDING_SKILL: &str = "Error adding skill";
pub const SKILL_ADDED: &str = "Skill added successfully";

/// Result of one add-skill submission.
#[derive(Debug, Clone)]
pub enum AddSkillOutcome {
    /// Inserted and the list was re-read.
    Added,
    /// The draft failed its required-field check; nothing was sent.
    Invalid(SkillhubError),
    /// No signed-in identity; nothing was sent.
    NoSession,
    /// Another submission is still running; nothing was sent.
    AlreadyInFlight,
    /// The insert failed; the draft is kept as typed.
    Failed(SkillhubError),
}

impl AddSkillOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddSkillOutcome::Added)
    }
}

pub struct ProfilePage {
    auth: Arc<dyn AuthService>,
    sync: SkillSync,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    session_usecase: SessionUseCase,
    session: RwLock<Option<SessionContext>>,
    state: RwLock<PageState>,
    view: RwLock<ProfileViewModel>,
    draft: RwLock<SkillDraft>,
    add_in_flight: AtomicBool,
}

impl ProfilePage {
    pub fn new(
        auth: Arc<dyn AuthService>,
        store: Arc<dyn RowStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let session_usecase =
            SessionUseCase::new(auth.clone(), notifier.clone(), navigator.clone());
        Self {
            auth,
            sync: SkillSync::new(store),
            notifier,
            navigator,
            session_usecase,
            session: RwLock::new(None),
            state: RwLock::new(PageState::default()),
            view: RwLock::new(ProfileViewModel::default()),
            draft: RwLock::new(SkillDraft::default()),
            add_in_flight: AtomicBool::new(false),
        }
    }

    // ============================================================================
    // Snapshots
    // ============================================================================

    pub async fn state(&self) -> PageState {
        *self.state.read().await
    }

    pub async fn view(&self) -> ProfileViewModel {
        self.view.read().await.clone()
    }

    pub async fn draft(&self) -> SkillDraft {
        self.draft.read().await.clone()
    }

    pub async fn session(&self) -> Option<SessionContext> {
        self.session.read().await.clone()
    }

    // ============================================================================
    // Lifecycle
    // ============================================================================

    /// Re-reads the current identity from the auth service.
    ///
    /// An unreachable auth service is treated like a signed-out one.
    pub async fn refresh_session(&self) -> Option<SessionContext> {
        let resolved = match SessionContext::resolve(self.auth.as_ref()).await {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!("[ProfilePage] Failed to resolve identity: {}", e);
                None
            }
        };
        *self.session.write().await = resolved.clone();
        resolved
    }

    /// Page entry: resolve the identity, then load profile and skills.
    ///
    /// Without an identity the page stays `Unauthenticated` and navigates to
    /// `/login`.
    pub async fn enter(&self) -> PageState {
        let Some(session) = self.refresh_session().await else {
            tracing::info!("[ProfilePage] No identity, redirecting to login");
            self.set_state(PageState::Unauthenticated).await;
            self.navigator.navigate(Route::Login);
            return PageState::Unauthenticated;
        };

        tracing::debug!("[ProfilePage] Loading page for {}", session.user_id());
        self.set_state(PageState::Loading).await;
        tokio::join!(self.load_profile(), self.load_skills());
        self.set_state(PageState::Ready).await;
        PageState::Ready
    }

    /// Signs out and leaves the page `Unauthenticated`.
    pub async fn logout(&self) {
        self.session_usecase.logout().await;
        *self.session.write().await = None;
        self.set_state(PageState::Unauthenticated).await;
    }

    async fn set_state(&self, next: PageState) {
        let mut state = self.state.write().await;
        if !state.can_transition_to(next) {
            tracing::debug!("[ProfilePage] Unusual transition {:?} -> {:?}", *state, next);
        }
        *state = next;
    }

    // ============================================================================
    // Synchronization flow
    // ============================================================================

    /// Replaces the profile with the stored row.
    ///
    /// No session: nothing happens. Failure: notify, keep the old profile.
    pub async fn load_profile(&self) {
        let Some(session) = self.session().await else {
            return;
        };

        match self.sync.fetch_profile(&session).await {
            Ok(profile) => self.view.write().await.replace_profile(profile),
            Err(e) => {
                tracing::warn!("[ProfilePage] Failed to load profile: {}", e);
                self.notifier.notify(Notification::error(ERROR_FETCHING_USER));
            }
        }
    }

    /// Replaces the skill list with the stored rows, newest first.
    ///
    /// No session: nothing happens. Failure: notify, keep the old list. Zero
    /// rows is a successful, empty list.
    pub async fn load_skills(&self) {
        let Some(session) = self.session().await else {
            return;
        };

        match self.sync.fetch_skills(&session).await {
            Ok(skills) => {
                tracing::debug!("[ProfilePage] Loaded {} skills", skills.len());
                self.view.write().await.replace_skills(skills);
            }
            Err(e) => {
                tracing::warn!("[ProfilePage] Failed to load skills: {}", e);
                self.notifier
                    .notify(Notification::error(ERROR_FETCHING_SKILLS));
            }
        }
    }

    /// Replaces the form contents.
    pub async fn set_draft(&self, draft: SkillDraft) {
        *self.draft.write().await = draft;
    }

    /// Sets the form to `draft` and submits it.
    pub async fn add_skill(&self, draft: SkillDraft) -> AddSkillOutcome {
        self.set_draft(draft).await;
        self.submit_skill().await
    }

    /// Submits the current form.
    ///
    /// On success the form is reset and the skill list re-read from the
    /// store; the inserted row is never appended locally.
    pub async fn submit_skill(&self) -> AddSkillOutcome {
        let draft = self.draft().await;
        if let Err(e) = draft.validate() {
            return AddSkillOutcome::Invalid(e);
        }

        let Some(_guard) = InFlightGuard::try_claim(&self.add_in_flight) else {
            tracing::debug!("[ProfilePage] Add skill already in flight, ignoring submit");
            return AddSkillOutcome::AlreadyInFlight;
        };

        let Some(session) = self.session().await else {
            return AddSkillOutcome::NoSession;
        };

        if let Err(e) = self.sync.insert_skill(&session, &draft).await {
            tracing::warn!("[ProfilePage] Failed to add skill: {}", e);
            self.notifier.notify(Notification::error(ERROR_ADDING_SKILL));
            return AddSkillOutcome::Failed(e);
        }

        self.notifier.notify(Notification::success(SKILL_ADDED));
        self.draft.write().await.reset();
        self.load_skills().await;
        AddSkillOutcome::Added
    }
}
