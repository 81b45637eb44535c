//! Conversions between typed models and untyped rows.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::row_store::Row;
use crate::error::{Result, SkillhubError};

/// Decodes one row into a domain model.
pub fn decode_row<T: DeserializeOwned>(row: Row) -> Result<T> {
    serde_json::from_value(serde_json::Value::Object(row))
        .map_err(|e| SkillhubError::row(e.to_string()))
}

/// Decodes every row, failing on the first one that does not fit.
pub fn decode_rows<T: DeserializeOwned>(rows: Vec<Row>) -> Result<Vec<T>> {
    rows.into_iter().map(decode_row).collect()
}

/// Encodes a model as a row. The model must serialize to a JSON object.
pub fn encode_row<T: Serialize>(value: &T) -> Result<Row> {
    match serde_json::to_value(value)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(SkillhubError::row(format!(
            "expected an object, got {}",
            other
        ))),
    }
}
