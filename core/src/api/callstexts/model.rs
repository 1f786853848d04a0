use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery state of a call or text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionState {
    Ready,
    Selected,
    Callback,
    Finished,
    Disabled,
    Dnc,
    Dup,
    Invalid,
    Timeout,
    PeriodLimit,
    /// A value this client does not know yet, kept as sent.
    #[serde(untagged)]
    UnknownValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallResult {
    La,
    Am,
    Busy,
    Dnc,
    Xfer,
    XferLeg,
    NoAns,
    Undialed,
    Sent,
    Received,
    Dnt,
    TooBig,
    InternalError,
    CarrierError,
    CarrierTempError,
    Sd,
    PostponedSd,
    Abandoned,
    Skipped,
    /// A value this client does not know yet, kept as sent.
    #[serde(untagged)]
    UnknownValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextResult {
    Sent,
    Received,
    Dnt,
    TooBig,
    InternalError,
    CarrierError,
    CarrierTempError,
    Undialed,
    /// A value this client does not know yet, kept as sent.
    #[serde(untagged)]
    UnknownValue(String),
}

/// One dial attempt of a call.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    pub id: Option<i64>,
    pub billed_amount: Option<f64>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub finish_time: Option<DateTime<Utc>>,
    pub call_result: Option<CallResult>,
    #[serde(default)]
    pub recordings: Vec<CallRecording>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub id: Option<i64>,
    pub from_number: Option<String>,
    pub to_number: Option<String>,
    pub state: Option<ActionState>,
    pub campaign_id: Option<i64>,
    pub batch_id: Option<i64>,
    pub inbound: Option<bool>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub modified: Option<DateTime<Utc>>,
    pub final_call_result: Option<CallResult>,
    pub agent_call: Option<bool>,
    pub labels: Option<Vec<String>>,
    pub attributes: Option<BTreeMap<String, String>>,
    pub records: Option<Vec<CallRecord>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    pub id: Option<i64>,
    pub from_number: Option<String>,
    pub to_number: Option<String>,
    pub state: Option<ActionState>,
    pub campaign_id: Option<i64>,
    pub batch_id: Option<i64>,
    pub inbound: Option<bool>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub modified: Option<DateTime<Utc>>,
    pub message: Option<String>,
    pub final_text_result: Option<TextResult>,
    pub labels: Option<Vec<String>>,
    pub attributes: Option<BTreeMap<String, String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecording {
    pub id: Option<i64>,
    pub call_id: Option<i64>,
    pub campaign_id: Option<i64>,
    pub name: Option<String>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub length_in_bytes: Option<i64>,
    pub length_in_seconds: Option<i64>,
    pub hash: Option<String>,
    pub state: Option<String>,
    pub mp3_url: Option<String>,
}

/// Recipient of an ad-hoc call, with per-recipient messages.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecipient {
    pub contact_id: Option<i64>,
    pub phone_number: Option<String>,
    pub from_number: Option<String>,
    pub live_message: Option<String>,
    pub live_message_sound_id: Option<i64>,
    pub machine_message: Option<String>,
    pub machine_message_sound_id: Option<i64>,
    pub transfer_message: Option<String>,
    pub transfer_message_sound_id: Option<i64>,
    pub transfer_digit: Option<String>,
    pub transfer_number: Option<String>,
    pub voice: Option<String>,
    pub dialplan_xml: Option<String>,
    pub attributes: Option<BTreeMap<String, String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRecipient {
    pub contact_id: Option<i64>,
    pub phone_number: Option<String>,
    pub from_number: Option<String>,
    pub message: Option<String>,
    pub attributes: Option<BTreeMap<String, String>>,
}

impl_model! {
    Call => Call,
    Text => Text,
    CallRecording => CallRecording,
}

request! {
    /// Filters for `CallsApi::find`.
    pub struct FindCallsRequest => FindCallsRequestBuilder {
        limit: i64,
        offset: i64,
        fields: String,
        id: Vec<i64>,
        campaign_id: i64,
        batch_id: i64,
        from_number: String,
        to_number: String,
        label: String,
        states: Vec<ActionState>,
        results: Vec<CallResult>,
        inbound: bool,
        #[serde(with = "chrono::serde::ts_milliseconds_option")]
        interval_begin: DateTime<Utc>,
        #[serde(with = "chrono::serde::ts_milliseconds_option")]
        interval_end: DateTime<Utc>,
    }
}

request! {
    /// Filters for `TextsApi::find`.
    pub struct FindTextsRequest => FindTextsRequestBuilder {
        limit: i64,
        offset: i64,
        fields: String,
        id: Vec<i64>,
        campaign_id: i64,
        batch_id: i64,
        from_number: String,
        to_number: String,
        label: String,
        states: Vec<ActionState>,
        results: Vec<TextResult>,
        inbound: bool,
        #[serde(with = "chrono::serde::ts_milliseconds_option")]
        interval_begin: DateTime<Utc>,
        #[serde(with = "chrono::serde::ts_milliseconds_option")]
        interval_end: DateTime<Utc>,
    }
}
