//! Query parameter building.
//!
//! Two entry points share one rendering of values:
//!
//! - [add_if_set] appends a single pair when the candidate is set. Façades use
//!   it for loose arguments such as `fields` or `start`.
//! - [to_query_pairs] flattens a request object. Request objects serialize
//!   only the fields the caller set, so unset filters never reach the wire.
//!
//! Pairs keep the order in which they were produced. Lists render as one
//! comma-separated value, which is what the API expects for `fields`,
//! `numbers`, `states` and friends. Escaping is left to the transport.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;

pub type QueryPairs = Vec<(String, String)>;

/// Values that can be rendered as a single query parameter.
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

impl QueryValue for str {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl QueryValue for bool {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for i32 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for i64 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

/// Timestamps travel as epoch milliseconds.
impl QueryValue for DateTime<Utc> {
    fn to_query_value(&self) -> String {
        self.timestamp_millis().to_string()
    }
}

impl<T: QueryValue> QueryValue for [T] {
    fn to_query_value(&self) -> String {
        self.iter()
            .map(QueryValue::to_query_value)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<T: QueryValue> QueryValue for Vec<T> {
    fn to_query_value(&self) -> String {
        self.as_slice().to_query_value()
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_value(&self) -> String {
        (**self).to_query_value()
    }
}

/// Append `name=value` to `pairs` when `value` is set.
pub fn add_if_set<T: QueryValue>(pairs: &mut QueryPairs, name: &str, value: Option<T>) {
    if let Some(value) = value {
        pairs.push((name.to_string(), value.to_query_value()));
    }
}

/// Flatten a request object into query pairs, in field declaration order.
///
/// Nested objects produce dotted names (`parent.child`), arrays a single
/// comma-separated value. Nulls and empty arrays are skipped.
pub fn to_query_pairs<T: Serialize + ?Sized>(request: &T) -> Result<QueryPairs, ClientError> {
    let value = serde_json::to_value(request).map_err(ClientError::Serialization)?;
    let mut pairs = QueryPairs::new();
    flatten(&mut pairs, None, value);
    Ok(pairs)
}

fn flatten(pairs: &mut QueryPairs, name: Option<&str>, value: Value) {
    match (name, value) {
        (prefix, Value::Object(object)) => {
            for (key, value) in object {
                let key = match prefix {
                    Some(prefix) => format!("{prefix}.{key}"),
                    None => key,
                };
                flatten(pairs, Some(&key), value);
            }
        }
        (_, Value::Null) | (None, _) => {}
        (Some(name), Value::Array(items)) => {
            let items: Vec<String> = items.into_iter().filter_map(scalar).collect();
            if !items.is_empty() {
                pairs.push((name.to_string(), items.join(",")));
            }
        }
        (Some(name), value) => {
            if let Some(value) = scalar(value) {
                pairs.push((name.to_string(), value));
            }
        }
    }
}

fn scalar(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn add_if_set_skips_unset_values() {
        let mut pairs = QueryPairs::new();
        add_if_set(&mut pairs, "fields", None::<&str>);
        add_if_set(&mut pairs, "start", None::<bool>);
        assert!(pairs.is_empty());
    }

    #[test]
    fn add_if_set_preserves_call_order() {
        let mut pairs = QueryPairs::new();
        add_if_set(&mut pairs, "start", Some(true));
        add_if_set(&mut pairs, "fields", Some("id,name"));
        add_if_set(&mut pairs, "limit", Some(10_i64));
        assert_eq!(
            pairs,
            vec![
                ("start".to_string(), "true".to_string()),
                ("fields".to_string(), "id,name".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn lists_and_timestamps() {
        let mut pairs = QueryPairs::new();
        add_if_set(&mut pairs, "numbers", Some(vec!["1213", "1214"]));
        let begin = Utc.timestamp_millis_opt(1_445_276_000_000).unwrap();
        add_if_set(&mut pairs, "begin", Some(begin));
        assert_eq!(pairs[0].1, "1213,1214");
        assert_eq!(pairs[1].1, "1445276000000");
    }

    #[test]
    fn flattens_objects_in_declaration_order() {
        let value = json!({
            "name": "hook",
            "limit": 5,
            "enabled": false,
            "unset": null,
            "numbers": ["1", "2"],
            "empty": [],
            "nested": {"a": 1},
        });
        let pairs = to_query_pairs(&value).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("name".to_string(), "hook".to_string()),
                ("limit".to_string(), "5".to_string()),
                ("enabled".to_string(), "false".to_string()),
                ("numbers".to_string(), "1,2".to_string()),
                ("nested.a".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn top_level_scalars_produce_nothing() {
        assert!(to_query_pairs(&json!(42)).unwrap().is_empty());
    }
}
