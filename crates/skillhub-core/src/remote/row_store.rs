//! Row store trait and query primitives.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

use crate::error::Result;

/// A row as the store hands it over: column name to JSON value.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Named collections used by the application.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Users,
    Skills,
}

impl Collection {
    /// Name of the collection on the backend.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Equality predicate on one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Whether `row` satisfies the predicate. String columns compare
    /// directly; other JSON scalars compare by their rendered form.
    pub fn matches(&self, row: &Row) -> bool {
        match row.get(&self.column) {
            Some(serde_json::Value::String(s)) => *s == self.value,
            Some(serde_json::Value::Null) | None => false,
            Some(other) => other.to_string() == self.value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Single-column ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub column: String,
    pub direction: SortDirection,
}

impl OrderBy {
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Relational row storage provided by the backend.
///
/// Row-level security is the backend's business; the client only narrows
/// what it asks for with filters.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Selects exactly one row.
    ///
    /// # Returns
    ///
    /// - `Ok(Row)`: One row matched
    /// - `Err(SkillhubError::NotFound)`: No row matched
    /// - `Err(_)`: Any other store failure
    async fn select_one(&self, collection: Collection, filter: &Filter) -> Result<Row>;

    /// Selects every matching row, optionally ordered.
    ///
    /// Zero matches is `Ok(vec![])`, not an error.
    async fn select_many(
        &self,
        collection: Collection,
        filter: &Filter,
        order: Option<&OrderBy>,
    ) -> Result<Vec<Row>>;

    /// Inserts one row. The store assigns `id` and `created_at`.
    async fn insert(&self, collection: Collection, row: Row) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_collection_names() {
        assert_eq!(Collection::Users.name(), "users");
        assert_eq!(Collection::Skills.to_string(), "skills");
    }

    #[test]
    fn test_filter_matches_strings_and_numbers() {
        let r = row(json!({ "user_id": "u1", "graduation_year": 2026, "bio": null }));
        assert!(Filter::eq("user_id", "u1").matches(&r));
        assert!(!Filter::eq("user_id", "u2").matches(&r));
        assert!(Filter::eq("graduation_year", "2026").matches(&r));
        assert!(!Filter::eq("bio", "null").matches(&r));
        assert!(!Filter::eq("missing", "x").matches(&r));
    }

    #[test]
    fn test_order_helpers() {
        assert_eq!(OrderBy::desc("created_at").direction, SortDirection::Descending);
        assert_eq!(SortDirection::Ascending.as_ref(), "ascending");
    }
}
