//! Per-resource façades and their models.
//!
//! Every façade holds one shared `RestApiClient`. A call validates its
//! required identifiers, templates the path, collects query pairs, resolves
//! the response descriptor and delegates. Validation failures are returned
//! before the transport is touched.

pub mod account;
pub mod callstexts;
pub mod campaigns;
pub mod common;
pub mod contacts;
pub mod keywords;
pub mod media;
pub mod numbers;
pub mod webhooks;

use crate::error::ClientError;
use crate::query::{QueryPairs, add_if_set};

/// Unwrap a required value or report it as missing under `name`.
pub(crate) fn require<T>(value: Option<T>, name: &str) -> Result<T, ClientError> {
    value.ok_or_else(|| ClientError::missing(name))
}

/// Reject an empty or whitespace-only string identifier.
pub(crate) fn require_text<'a>(value: &'a str, name: &str) -> Result<&'a str, ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::BlankField(name.to_string()));
    }
    Ok(value)
}

/// Query pairs for calls whose only option is `fields`.
pub(crate) fn fields_query(fields: Option<&str>) -> QueryPairs {
    let mut query = QueryPairs::new();
    add_if_set(&mut query, "fields", fields);
    query
}
