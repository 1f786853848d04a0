use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub permissions: Option<Vec<String>>,
}

/// API login pair. `password` is only returned on create.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCredentials {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub enabled: Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPlanUsage {
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub interval_start: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub interval_end: Option<DateTime<Utc>>,
    pub remaining_pay_as_you_go_credits: Option<f64>,
    pub remaining_plan_credits: Option<f64>,
    pub total_remaining_credits: Option<f64>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditsUsage {
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub interval_begin: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub interval_end: Option<DateTime<Utc>>,
    pub texts_sent: Option<i64>,
    pub calls_duration_minutes: Option<i64>,
    pub credits_used: Option<f64>,
}

/// A verified number that may be used as caller id.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerId {
    pub phone_number: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub ordered: Option<i64>,
    pub unit_cost: Option<f64>,
    #[serde(default)]
    pub fulfilled: Vec<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberOrder {
    pub id: Option<i64>,
    /// `NEW`, `PROCESSING`, `FINISHED`, `PARTIAL`, `APPROVE_TIER_ONE`, ...
    pub status: Option<String>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub total_cost: Option<f64>,
    pub local_numbers: Option<OrderItem>,
    pub toll_free_numbers: Option<OrderItem>,
    pub keywords: Option<OrderItem>,
}

impl_model! {
    Account => Account,
    ApiCredentials => ApiCredentials,
    BillingPlanUsage => BillingPlanUsage,
    CreditsUsage => CreditsUsage,
    CallerId => CallerId,
    NumberOrder => NumberOrder,
}

request! {
    pub struct CreditsUsageRequest => CreditsUsageRequestBuilder {
        #[serde(with = "chrono::serde::ts_milliseconds_option")]
        interval_begin: DateTime<Utc>,
        #[serde(with = "chrono::serde::ts_milliseconds_option")]
        interval_end: DateTime<Utc>,
    }
}

request! {
    pub struct CallerIdVerificationRequest => CallerIdVerificationRequestBuilder {
        path {
            caller_id: String,
        }
        verification_code: String,
    }
}

request! {
    pub struct FindApiCredentialsRequest => FindApiCredentialsRequestBuilder {
        limit: i64,
        offset: i64,
        fields: String,
    }
}

request! {
    pub struct KeywordPurchaseRequest => KeywordPurchaseRequestBuilder {
        keywords: Vec<String>,
    }
}

request! {
    /// Either explicit `numbers` or a count with region filters.
    pub struct NumberPurchaseRequest => NumberPurchaseRequestBuilder {
        numbers: Vec<String>,
        local_count: i32,
        toll_free_count: i32,
        prefix: String,
        city: String,
        state: String,
        zipcode: String,
        lata: String,
        rate_center: String,
    }
}
