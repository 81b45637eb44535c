//! Typed round trips against the row store.
//!
//! Each call is one request; none of them touch page state. The page decides
//! what to do with the result.

use std::sync::Arc;

use skillhub_core::error::Result;
use skillhub_core::remote::{
    Collection, Filter, OrderBy, RowStore, decode_row, decode_rows, encode_row,
};
use skillhub_core::session::SessionContext;
use skillhub_core::skill::{SkillDraft, SkillEntry};
use skillhub_core::user::UserProfile;

const SKILLS_ORDER_COLUMN: &str = "created_at";

#[derive(Clone)]
pub struct SkillSync {
    store: Arc<dyn RowStore>,
}

impl SkillSync {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self { store }
    }

    /// The `users` row whose id equals the session's identity id.
    pub async fn fetch_profile(&self, session: &SessionContext) -> Result<UserProfile> {
        let row = self
            .store
            .select_one(Collection::Users, &Filter::eq("id", session.user_id()))
            .await?;
        decode_row(row)
    }

    /// Every `skills` row owned by the session's identity, newest first.
    pub async fn fetch_skills(&self, session: &SessionContext) -> Result<Vec<SkillEntry>> {
        let rows = self
            .store
            .select_many(
                Collection::Skills,
                &Filter::eq("user_id", session.user_id()),
                Some(&OrderBy::desc(SKILLS_ORDER_COLUMN)),
            )
            .await?;
        decode_rows(rows)
    }

    /// Inserts `draft` as a skill owned by the session's identity.
    ///
    /// Does not validate; callers check the draft first.
    pub async fn insert_skill(&self, session: &SessionContext, draft: &SkillDraft) -> Result<()> {
        let row = encode_row(&draft.to_row(session.user_id()))?;
        self.store.insert(Collection::Skills, row).await
    }
}
