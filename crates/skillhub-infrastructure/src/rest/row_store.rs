//! PostgREST-backed row store.

use async_trait::async_trait;
use reqwest::StatusCode;
use skillhub_core::error::{Result, SkillhubError};
use skillhub_core::remote::{Collection, Filter, OrderBy, Row, RowStore, SortDirection};

use super::client::{RestClient, check_status};

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Row store speaking the PostgREST query dialect.
#[derive(Debug, Clone)]
pub struct RestRowStore {
    client: RestClient,
}

impl RestRowStore {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

/// `select=*`, one `column=eq.value` pair, and an optional `order` pair.
fn select_query(filter: &Filter, order: Option<&OrderBy>) -> Vec<(String, String)> {
    let mut query = vec![
        ("select".to_string(), "*".to_string()),
        (filter.column.clone(), format!("eq.{}", filter.value)),
    ];
    if let Some(order) = order {
        let direction = match order.direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        query.push(("order".to_string(), format!("{}.{}", order.column, direction)));
    }
    query
}

#[async_trait]
impl RowStore for RestRowStore {
    async fn select_one(&self, collection: Collection, filter: &Filter) -> Result<Row> {
        let request = self
            .client
            .http()
            .get(self.client.rest_url(collection.name()))
            .query(&select_query(filter, None))
            .header("Accept", SINGLE_OBJECT);
        let response = self.client.authorize(request).await.send().await?;

        // PostgREST answers 406 when the object form matches zero or many rows.
        if response.status() == StatusCode::NOT_ACCEPTABLE {
            return Err(SkillhubError::not_found(
                collection.name(),
                filter.value.clone(),
            ));
        }

        let response = check_status(response, &format!("select {}", collection)).await?;
        Ok(response.json::<Row>().await?)
    }

    async fn select_many(
        &self,
        collection: Collection,
        filter: &Filter,
        order: Option<&OrderBy>,
    ) -> Result<Vec<Row>> {
        let request = self
            .client
            .http()
            .get(self.client.rest_url(collection.name()))
            .query(&select_query(filter, order));
        let response = self.client.authorize(request).await.send().await?;
        let response = check_status(response, &format!("select {}", collection)).await?;

        // A JSON `null` body is treated as an empty result.
        let rows: Option<Vec<Row>> = response.json().await?;
        Ok(rows.unwrap_or_default())
    }

    async fn insert(&self, collection: Collection, row: Row) -> Result<()> {
        let request = self
            .client
            .http()
            .post(self.client.rest_url(collection.name()))
            .header("Prefer", "return=minimal")
            .json(&vec![row]);
        let response = self.client.authorize(request).await.send().await?;
        check_status(response, &format!("insert into {}", collection)).await?;
        tracing::debug!("[RestRowStore] Inserted one row into {}", collection);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::SessionHandle;
    use crate::rest::test_server::{Reply, TestServer};
    use serde_json::json;
    use skillhub_core::config::BackendConfig;

    fn store(server: &TestServer) -> RestRowStore {
        let client =
            RestClient::new(BackendConfig::new(server.url(), "anon"), SessionHandle::default())
                .unwrap();
        RestRowStore::new(client)
    }

    #[test]
    fn test_select_query_with_order() {
        let q = select_query(&Filter::eq("user_id", "u1"), Some(&OrderBy::desc("created_at")));
        assert_eq!(
            q,
            vec![
                ("select".to_string(), "*".to_string()),
                ("user_id".to_string(), "eq.u1".to_string()),
                ("order".to_string(), "created_at.desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_select_query_without_order() {
        let q = select_query(&Filter::eq("id", "u1"), None);
        assert_eq!(q.len(), 2);
        assert_eq!(q[1], ("id".to_string(), "eq.u1".to_string()));
    }

    #[tokio::test]
    async fn test_select_one_returns_object() {
        let server = TestServer::start(vec![Reply::new(200, r#"{"id":"u1","full_name":"Ada"}"#)]).await;
        let row = store(&server)
            .select_one(Collection::Users, &Filter::eq("id", "u1"))
            .await
            .unwrap();
        assert_eq!(row["full_name"], "Ada");

        let requests = server.requests();
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].target, "/rest/v1/users?select=*&id=eq.u1");
        assert_eq!(requests[0].header("accept"), Some(SINGLE_OBJECT));
    }

    #[tokio::test]
    async fn test_select_one_not_acceptable_is_not_found() {
        let server = TestServer::start(vec![Reply::new(
            406,
            r#"{"code":"PGRST116","message":"JSON object requested, multiple (or no) rows returned"}"#,
        )])
        .await;
        let err = store(&server)
            .select_one(Collection::Users, &Filter::eq("id", "ghost"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_select_many_null_body_is_empty() {
        let server = TestServer::start(vec![Reply::new(200, "null")]).await;
        let rows = store(&server)
            .select_many(
                Collection::Skills,
                &Filter::eq("user_id", "u1"),
                Some(&OrderBy::desc("created_at")),
            )
            .await
            .unwrap();
        assert!(rows.is_empty());
        assert_eq!(
            server.requests()[0].target,
            "/rest/v1/skills?select=*&user_id=eq.u1&order=created_at.desc"
        );
    }

    #[tokio::test]
    async fn test_select_many_error_status_is_store_error() {
        let server = TestServer::start(vec![Reply::new(500, r#"{"message":"boom"}"#)]).await;
        let err = store(&server)
            .select_many(Collection::Skills, &Filter::eq("user_id", "u1"), None)
            .await
            .unwrap_err();
        assert!(err.is_store());
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_insert_sends_single_row_array() {
        let server = TestServer::start(vec![Reply::new(201, "")]).await;
        let row = json!({ "user_id": "u1", "title": "Guitar" })
            .as_object()
            .cloned()
            .unwrap();
        store(&server).insert(Collection::Skills, row).await.unwrap();

        let request = &server.requests()[0];
        assert_eq!(request.method, "POST");
        assert_eq!(request.target, "/rest/v1/skills");
        assert_eq!(request.header("prefer"), Some("return=minimal"));
        assert_eq!(request.header("apikey"), Some("anon"));
        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body, json!([{ "user_id": "u1", "title": "Guitar" }]));
    }

    #[tokio::test]
    async fn test_insert_rejected_row_is_store_error() {
        let server = TestServer::start(vec![Reply::new(
            403,
            r#"{"message":"new row violates row-level security policy"}"#,
        )])
        .await;
        let row = json!({ "user_id": "someone-else" }).as_object().cloned().unwrap();
        let err = store(&server).insert(Collection::Skills, row).await.unwrap_err();
        assert!(err.is_store());
    }
}
