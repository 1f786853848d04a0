//! Envelopes and models shared by every resource family.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            limit: None,
            offset: None,
            total_count: None,
        }
    }
}

/// A complete, unpaged list of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListHolder<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> ListHolder<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for ListHolder<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// Identifier returned by create calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId {
    pub id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIds {
    #[serde(default)]
    pub items: Vec<ResourceId>,
}

/// Error payload sent with non-2xx responses.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    pub http_status_code: Option<u16>,
    /// `internalCode` on the wire; some deployments send a string `code`.
    #[serde(default, alias = "internalCode", deserialize_with = "string_or_number")]
    pub code: Option<String>,
    pub message: Option<String>,
    pub developer_message: Option<String>,
    pub help_link: Option<String>,
}

fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    })
}

impl_model! {
    ResourceId => ResourceId,
    ResourceIds => ResourceIds,
    ErrorMessage => ErrorMessage,
}

request! {
    /// Paged request for the sub-resources of one entity, e.g. the batches of
    /// a broadcast.
    pub struct GetByIdRequest => GetByIdRequestBuilder {
        path {
            id: i64,
        }
        limit: i64,
        offset: i64,
        fields: String,
    }
}
