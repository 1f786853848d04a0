use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub prefix: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub country: Option<String>,
    pub lata: Option<String>,
    pub rate_center: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub time_zone: Option<String>,
}

/// A number available for purchase.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Number {
    pub number: Option<String>,
    pub national_format: Option<String>,
    pub toll_free: Option<bool>,
    pub region: Option<Region>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureStatus {
    Unsupported,
    Pending,
    Disabled,
    Enabled,
    /// A value this client does not know yet, kept as sent.
    #[serde(untagged)]
    UnknownValue(String),
}

/// A number owned by the account.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberLease {
    pub number: Option<String>,
    pub national_format: Option<String>,
    pub toll_free: Option<bool>,
    pub region: Option<Region>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub lease_begin: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub lease_end: Option<DateTime<Utc>>,
    pub auto_renew: Option<bool>,
    pub status: Option<String>,
    pub call_feature_status: Option<FeatureStatus>,
    pub text_feature_status: Option<FeatureStatus>,
    pub labels: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberConfigType {
    Ivr,
    Tracking,
    /// A value this client does not know yet, kept as sent.
    #[serde(untagged)]
    UnknownValue(String),
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallTrackingConfig {
    pub screen: Option<bool>,
    pub recorded: Option<bool>,
    pub transfer_numbers: Option<Vec<String>>,
    pub voicemail: Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IvrInboundConfig {
    pub dialplan_xml: Option<String>,
}

/// Inbound handling of a leased number.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberConfig {
    pub number: Option<String>,
    pub config_type: Option<NumberConfigType>,
    pub call_tracking_config: Option<CallTrackingConfig>,
    pub ivr_inbound_config: Option<IvrInboundConfig>,
}

impl_model! {
    Region => Region,
    Number => Number,
    NumberLease => NumberLease,
    NumberConfig => NumberConfig,
}

request! {
    pub struct FindNumbersLocalRequest => FindNumbersLocalRequestBuilder {
        limit: i64,
        fields: String,
        prefix: String,
        city: String,
        state: String,
        zipcode: String,
        lata: String,
        rate_center: String,
        latitude: f64,
        longitude: f64,
        time_zone: String,
    }
}

request! {
    pub struct FindTollfreeNumbersRequest => FindTollfreeNumbersRequestBuilder {
        limit: i64,
        fields: String,
        pattern: String,
    }
}

request! {
    pub struct FindNumberRegionsRequest => FindNumberRegionsRequestBuilder {
        limit: i64,
        offset: i64,
        fields: String,
        prefix: String,
        city: String,
        state: String,
        zipcode: String,
        lata: String,
        rate_center: String,
    }
}

request! {
    /// Filters shared by the lease and lease config searches.
    pub struct FindNumberLeasesRequest => FindNumberLeasesRequestBuilder {
        limit: i64,
        offset: i64,
        fields: String,
        prefix: String,
        city: String,
        state: String,
        zipcode: String,
        lata: String,
        rate_center: String,
        label_name: String,
    }
}
