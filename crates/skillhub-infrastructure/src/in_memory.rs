//! In-memory backend.
//!
//! Implements both backend seams over a process-local table map. The CLI runs
//! against it in offline mode and the application tests use it to observe
//! exactly which store calls a flow makes.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde_json::Value;
use skillhub_core::error::{Result, SkillhubError};
use skillhub_core::remote::{
    AuthService, Collection, Filter, Identity, OrderBy, Row, RowStore, SortDirection,
};
use tokio::sync::{Mutex, Notify};

/// Store calls that can be counted or made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    SelectOne,
    SelectMany,
    Insert,
}

#[derive(Debug, Default)]
struct State {
    identity: Option<Identity>,
    tables: HashMap<Collection, Vec<Row>>,
    last_created_at: Option<DateTime<Utc>>,
    calls: HashMap<StoreOperation, usize>,
    pending_failures: HashMap<StoreOperation, usize>,
    sign_outs: usize,
}

impl State {
    fn record(&mut self, op: StoreOperation) -> Result<()> {
        *self.calls.entry(op).or_default() += 1;
        if let Some(left) = self.pending_failures.get_mut(&op)
            && *left > 0
        {
            *left -= 1;
            return Err(SkillhubError::store(format!("injected {:?} failure", op)));
        }
        Ok(())
    }

    /// Strictly increasing creation time, so equal-instant inserts still
    /// order deterministically.
    fn next_created_at(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let next = match self.last_created_at {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_created_at = Some(next);
        next
    }
}

/// A self-contained stand-in for the hosted backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    state: Arc<Mutex<State>>,
    insert_gate: Arc<Mutex<Option<Arc<Notify>>>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `identity` the signed-in user.
    pub async fn sign_in(&self, identity: Identity) {
        self.state.lock().await.identity = Some(identity);
    }

    /// Adds a row as-is, bypassing call counting and ownership checks.
    pub async fn seed(&self, collection: Collection, row: Row) {
        self.state
            .lock()
            .await
            .tables
            .entry(collection)
            .or_default()
            .push(row);
    }

    /// Makes the next `count` calls of `op` fail with a store error.
    pub async fn fail_next(&self, op: StoreOperation, count: usize) {
        *self
            .state
            .lock()
            .await
            .pending_failures
            .entry(op)
            .or_default() += count;
    }

    /// Number of times `op` has been called, failures included.
    pub async fn calls(&self, op: StoreOperation) -> usize {
        self.state
            .lock()
            .await
            .calls
            .get(&op)
            .copied()
            .unwrap_or_default()
    }

    pub async fn sign_outs(&self) -> usize {
        self.state.lock().await.sign_outs
    }

    /// Snapshot of a table in insertion order.
    pub async fn rows(&self, collection: Collection) -> Vec<Row> {
        self.state
            .lock()
            .await
            .tables
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Holds every subsequent insert until the returned handle is notified.
    ///
    /// The call is counted before it blocks, so a caller can observe that an
    /// insert is in flight.
    pub async fn hold_inserts(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.insert_gate.lock().await = Some(gate.clone());
        gate
    }

    pub async fn release_inserts(&self) {
        if let Some(gate) = self.insert_gate.lock().await.take() {
            gate.notify_waiters();
            gate.notify_one();
        }
    }
}

fn compare_rows(a: &Row, b: &Row, order: &OrderBy) -> std::cmp::Ordering {
    let key = |row: &Row| match row.get(&order.column) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    let ordering = key(a).cmp(&key(b));
    match order.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

#[async_trait]
impl AuthService for InMemoryBackend {
    async fn current_identity(&self) -> Result<Option<Identity>> {
        Ok(self.state.lock().await.identity.clone())
    }

    async fn invalidate_session(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        state.identity = None;
        state.sign_outs += 1;
        Ok(())
    }
}

#[async_trait]
impl RowStore for InMemoryBackend {
    async fn select_one(&self, collection: Collection, filter: &Filter) -> Result<Row> {
        let mut state = self.state.lock().await;
        state.record(StoreOperation::SelectOne)?;

        let mut matches = state
            .tables
            .get(&collection)
            .into_iter()
            .flatten()
            .filter(|row| filter.matches(row));
        match (matches.next(), matches.next()) {
            (Some(row), None) => Ok(row.clone()),
            _ => Err(SkillhubError::not_found(
                collection.name(),
                filter.value.clone(),
            )),
        }
    }

    async fn select_many(
        &self,
        collection: Collection,
        filter: &Filter,
        order: Option<&OrderBy>,
    ) -> Result<Vec<Row>> {
        let mut state = self.state.lock().await;
        state.record(StoreOperation::SelectMany)?;

        let mut rows: Vec<Row> = state
            .tables
            .get(&collection)
            .into_iter()
            .flatten()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect();
        if let Some(order) = order {
            rows.sort_by(|a, b| compare_rows(a, b, order));
        }
        Ok(rows)
    }

    async fn insert(&self, collection: Collection, mut row: Row) -> Result<()> {
        {
            let mut state = self.state.lock().await;
            state.record(StoreOperation::Insert)?;

            // Mirrors the backend's ownership policy on user-owned rows.
            let owner = row.get("user_id").and_then(Value::as_str);
            let caller = state.identity.as_ref().map(|i| i.id.as_str());
            if owner.is_some() && owner != caller {
                return Err(SkillhubError::store(
                    "new row violates row-level security policy",
                ));
            }
        }

        let gate = self.insert_gate.lock().await.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let mut state = self.state.lock().await;
        let created_at = state.next_created_at();
        row.entry("id")
            .or_insert_with(|| Value::String(uuid::Uuid::new_v4().to_string()));
        row.insert(
            "created_at".to_string(),
            Value::String(created_at.to_rfc3339_opts(SecondsFormat::Micros, false)),
        );
        state.tables.entry(collection).or_default().push(row);
        Ok(())
    }
}
