use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::callstexts::{Call, Text};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub zipcode: Option<String>,
    pub home_phone: Option<String>,
    pub work_phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub external_id: Option<String>,
    pub external_system: Option<String>,
    pub deleted: Option<bool>,
    pub properties: Option<BTreeMap<String, String>>,
}

/// Calls and texts exchanged with a contact.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactHistory {
    pub id: Option<i64>,
    #[serde(default)]
    pub calls: Vec<Call>,
    #[serde(default)]
    pub texts: Vec<Text>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactList {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub size: Option<i64>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// `NEW`, `VALIDATING`, `IMPORTING`, `ACTIVE`, `ERRORS` or `FAILED`.
    pub status: Option<String>,
}

/// A number on the account's do-not-contact list.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoNotContact {
    pub number: Option<String>,
    pub call: Option<bool>,
    pub text: Option<bool>,
    pub campaign_id: Option<i64>,
    pub source: Option<String>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub updated: Option<DateTime<Utc>>,
}

/// Carrier-wide do-not-contact status between two numbers.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversalDnc {
    pub to_number: Option<String>,
    pub from_number: Option<String>,
    pub inbound_call: Option<bool>,
    pub inbound_text: Option<bool>,
    pub outbound_call: Option<bool>,
    pub outbound_text: Option<bool>,
}

impl_model! {
    Contact => Contact,
    ContactHistory => ContactHistory,
    ContactList => ContactList,
    DoNotContact => DoNotContact,
    UniversalDnc => UniversalDnc,
}

request! {
    pub struct FindContactsRequest => FindContactsRequestBuilder {
        limit: i64,
        offset: i64,
        fields: String,
        contact_list_id: i64,
        property_name: String,
        property_value: String,
        number: Vec<String>,
        id: Vec<i64>,
    }
}

request! {
    pub struct FindContactListsRequest => FindContactListsRequestBuilder {
        limit: i64,
        offset: i64,
        fields: String,
        name: String,
    }
}

request! {
    /// New list seeded from existing contacts, raw numbers or new contacts.
    pub struct CreateContactListRequest => CreateContactListRequestBuilder {
        name: String,
        contact_ids: Vec<i64>,
        contact_numbers: Vec<String>,
        contacts: Vec<Contact>,
    }
}

request! {
    pub struct UpdateContactListRequest => UpdateContactListRequestBuilder {
        path {
            id: i64,
        }
        name: String,
    }
}

request! {
    pub struct AddContactListItemsRequest => AddContactListItemsRequestBuilder {
        path {
            contact_list_id: i64,
        }
        contact_ids: Vec<i64>,
        contact_numbers: Vec<String>,
        contacts: Vec<Contact>,
    }
}

request! {
    pub struct FindDncNumbersRequest => FindDncNumbersRequestBuilder {
        limit: i64,
        offset: i64,
        fields: String,
        prefix: String,
        campaign_id: i64,
        source: String,
        call: bool,
        text: bool,
        numbers: Vec<String>,
    }
}

request! {
    /// Numbers to add to the do-not-contact list.
    pub struct CreateDncsRequest => CreateDncsRequestBuilder {
        numbers: Vec<String>,
        call: bool,
        text: bool,
        source: String,
    }
}

request! {
    pub struct UpdateDncRequest => UpdateDncRequestBuilder {
        path {
            number: String,
        }
        call: bool,
        text: bool,
        campaign_id: i64,
    }
}

request! {
    pub struct FindUniversalDncsRequest => FindUniversalDncsRequestBuilder {
        path {
            to_number: String,
        }
        from_number: String,
        fields: String,
    }
}
