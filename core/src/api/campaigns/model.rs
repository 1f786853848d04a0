use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::callstexts::TextRecipient;

/// Server-side lifecycle of a broadcast. Transitions happen on the server
/// and are observed by polling `get`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BroadcastStatus {
    Test,
    Setup,
    StartPending,
    Running,
    Scheduled,
    Stopped,
    Archived,
    Finished,
    Validating,
    /// A value this client does not know yet, kept as sent.
    #[serde(untagged)]
    UnknownValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnsweringMachineConfig {
    AmOnly,
    AmAndLive,
    LiveWithAmd,
    LiveImmediate,
    /// A value this client does not know yet, kept as sent.
    #[serde(untagged)]
    UnknownValue(String),
}

/// Broadcast recipient: a phone number or an existing contact.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub contact_id: Option<i64>,
    pub phone_number: Option<String>,
    pub from_number: Option<String>,
    pub attributes: Option<BTreeMap<String, String>>,
}

impl Recipient {
    pub fn phone(number: impl Into<String>) -> Self {
        Self {
            phone_number: Some(number.into()),
            ..Default::default()
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallBroadcastSounds {
    pub live_sound_text: Option<String>,
    pub live_sound_text_voice: Option<String>,
    pub live_sound_id: Option<i64>,
    pub machine_sound_text: Option<String>,
    pub machine_sound_text_voice: Option<String>,
    pub machine_sound_id: Option<i64>,
    pub transfer_sound_text: Option<String>,
    pub transfer_sound_id: Option<i64>,
    pub transfer_digit: Option<String>,
    pub transfer_number: Option<String>,
    pub dnc_sound_text: Option<String>,
    pub dnc_sound_id: Option<i64>,
    pub dnc_digit: Option<String>,
}

/// Voice broadcast. `recipients` is accepted on create but not returned by
/// `get`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallBroadcast {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub status: Option<BroadcastStatus>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub last_modified: Option<DateTime<Utc>>,
    pub from_number: Option<String>,
    pub labels: Option<Vec<String>>,
    pub max_active: Option<i32>,
    pub resume_next_day: Option<bool>,
    pub answering_machine_config: Option<AnsweringMachineConfig>,
    pub sounds: Option<CallBroadcastSounds>,
    pub recipients: Option<Vec<Recipient>>,
}

/// Text broadcast. `recipients` is accepted on create but not returned by
/// `get`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBroadcast {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub status: Option<BroadcastStatus>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub last_modified: Option<DateTime<Utc>>,
    pub from_number: Option<String>,
    pub labels: Option<Vec<String>>,
    pub resume_next_day: Option<bool>,
    pub message: Option<String>,
    /// `TRIM`, `SEND_MULTIPLE` or `DO_NOT_SEND`.
    pub big_message_strategy: Option<String>,
    pub recipients: Option<Vec<TextRecipient>>,
}

/// IVR broadcast driven by a dialplan document.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IvrBroadcast {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub status: Option<BroadcastStatus>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub last_modified: Option<DateTime<Utc>>,
    pub from_number: Option<String>,
    pub labels: Option<Vec<String>>,
    pub max_active: Option<i32>,
    pub resume_next_day: Option<bool>,
    pub dialplan_xml: Option<String>,
    pub recipients: Option<Vec<Recipient>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallBroadcastStats {
    pub total_outbound_count: Option<i64>,
    pub remaining_outbound_count: Option<i64>,
    pub billed_amount: Option<f64>,
    pub calls_attempted: Option<i64>,
    pub calls_placed: Option<i64>,
    pub calls_duration: Option<i64>,
    pub billed_duration: Option<i64>,
    pub response_rate_percent: Option<f64>,
    pub calls_remaining: Option<i64>,
    pub calls_awaiting_redial: Option<i64>,
    pub calls_live_answer: Option<i64>,
    pub total_count: Option<i64>,
    pub answering_machine_count: Option<i64>,
    pub busy_count: Option<i64>,
    pub do_not_call_count: Option<i64>,
    pub error_count: Option<i64>,
    pub live_count: Option<i64>,
    pub no_answer_count: Option<i64>,
    pub transfer_count: Option<i64>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBroadcastStats {
    pub total_outbound_count: Option<i64>,
    pub remaining_outbound_count: Option<i64>,
    pub billed_amount: Option<f64>,
    pub sent_count: Option<i64>,
    pub unsent_count: Option<i64>,
    pub received_count: Option<i64>,
    pub do_not_text_count: Option<i64>,
    pub too_big_count: Option<i64>,
    pub error_count: Option<i64>,
}

/// A group of recipients added to a broadcast in one step.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub id: Option<i64>,
    pub name: Option<String>,
    /// `NEW`, `VALIDATING`, `ERRORS`, `SOURCE_ERROR` or `ACTIVE`.
    pub status: Option<String>,
    pub broadcast_id: Option<i64>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub size: Option<i64>,
    pub remaining: Option<i64>,
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SoundStatus {
    Uploaded,
    Recording,
    Active,
    Failed,
    Archived,
    /// A value this client does not know yet, kept as sent.
    #[serde(untagged)]
    UnknownValue(String),
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSound {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub length_in_seconds: Option<i64>,
    pub status: Option<SoundStatus>,
    pub duplicate: Option<bool>,
}

/// Input for a sound generated from text.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextToSpeech {
    pub message: Option<String>,
    /// Voice name such as `MALE1` or `FEMALE1`.
    pub voice: Option<String>,
}

impl TextToSpeech {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            voice: None,
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAutoReply {
    pub id: Option<i64>,
    pub number: Option<String>,
    pub keyword: Option<String>,
    /// Text the inbound message must contain; `match` on the wire.
    #[serde(rename = "match")]
    pub match_text: Option<String>,
    pub message: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: Option<i64>,
    pub enabled: Option<bool>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub group_ids: Option<Vec<i64>>,
    pub active_session_id: Option<i64>,
}

/// One login period of an agent on a call center campaign.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSession {
    pub id: Option<i64>,
    pub agent_id: Option<i64>,
    pub agent_email: Option<String>,
    pub campaign_id: Option<i64>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub end: Option<DateTime<Utc>>,
    pub call_count: Option<i64>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentGroup {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub campaign_ids: Option<Vec<i64>>,
    pub agent_ids: Option<Vec<i64>>,
    pub agent_emails: Option<Vec<String>>,
}

/// Call center campaign worked by agents.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CccCampaign {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub status: Option<BroadcastStatus>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub last_modified: Option<DateTime<Utc>>,
    pub from_number: Option<String>,
    pub labels: Option<Vec<String>>,
    pub agent_group_ids: Option<Vec<i64>>,
}

impl_model! {
    CallBroadcast => CallBroadcast,
    CallBroadcastStats => CallBroadcastStats,
    TextBroadcast => TextBroadcast,
    TextBroadcastStats => TextBroadcastStats,
    IvrBroadcast => IvrBroadcast,
    Batch => Batch,
    CampaignSound => CampaignSound,
    TextAutoReply => TextAutoReply,
    Agent => Agent,
    AgentGroup => AgentGroup,
    AgentSession => AgentSession,
    CccCampaign => CccCampaign,
}

request! {
    /// Filters shared by the call, text and IVR broadcast searches.
    pub struct FindBroadcastsRequest => FindBroadcastsRequestBuilder {
        limit: i64,
        offset: i64,
        fields: String,
        name: String,
        label: String,
        running: bool,
        scheduled: bool,
    }
}

request! {
    /// Calls or texts of one broadcast, optionally narrowed to a batch.
    pub struct FindBroadcastItemsRequest => FindBroadcastItemsRequestBuilder {
        path {
            id: i64,
        }
        limit: i64,
        offset: i64,
        fields: String,
        batch_id: i64,
    }
}

request! {
    /// Body of `add_batch`. `campaign_id` selects the broadcast.
    pub struct AddBatchRequest => AddBatchRequestBuilder {
        path {
            campaign_id: i64,
        }
        name: String,
        recipients: Vec<Recipient>,
        contact_list_id: i64,
        scrub_duplicates: bool,
    }
}

request! {
    pub struct FindSoundsRequest => FindSoundsRequestBuilder {
        limit: i64,
        offset: i64,
        fields: String,
        filter: String,
        include_archived: bool,
        include_pending: bool,
        include_scrubbed: bool,
    }
}

request! {
    pub struct FindTextAutoRepliesRequest => FindTextAutoRepliesRequestBuilder {
        limit: i64,
        offset: i64,
        fields: String,
        number: String,
    }
}

request! {
    pub struct FindAgentGroupsRequest => FindAgentGroupsRequestBuilder {
        limit: i64,
        offset: i64,
        fields: String,
        name: String,
        campaign_id: i64,
        agent_id: i64,
        agent_email: String,
    }
}

request! {
    pub struct FindCccCampaignsRequest => FindCccCampaignsRequestBuilder {
        limit: i64,
        offset: i64,
        fields: String,
        name: String,
        label: String,
    }
}
