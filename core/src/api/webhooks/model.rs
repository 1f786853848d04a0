use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A callback registration for resource events.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    pub id: Option<i64>,
    pub name: Option<String>,
    /// Resource the webhook listens on, e.g. `CallBroadcast`.
    pub resource: Option<String>,
    /// Event names such as `start`, `stop` or `finished`.
    pub events: Option<Vec<String>>,
    pub callback: Option<String>,
    pub secret: Option<String>,
    pub single_use: Option<bool>,
    pub enabled: Option<bool>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A resource that can be subscribed to and the events it emits.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResource {
    pub resource: Option<String>,
    #[serde(default)]
    pub supported_events: Vec<String>,
}

impl_model! {
    Webhook => Webhook,
    WebhookResource => WebhookResource,
}

request! {
    /// Filters for `WebhooksApi::find`.
    pub struct FindWebhooksRequest => FindWebhooksRequestBuilder {
        limit: i64,
        offset: i64,
        fields: String,
        name: String,
        resource: String,
        event: String,
        callback: String,
        enabled: bool,
    }
}
