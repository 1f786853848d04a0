//! Text keywords and keyword leases.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::common::Page;
use crate::api::{fields_query, require, require_text};
use crate::error::Result;
use crate::model_type::ModelType;
use crate::path::replace_placeholder;
use crate::query::{QueryPairs, add_if_set, to_query_pairs};
use crate::rest::RestApiClient;

const KEYWORDS_PATH: &str = "/keywords";
const KEYWORDS_AVAILABLE_PATH: &str = "/keywords/{}/available";
const LEASES_PATH: &str = "/keywords/leases";
const LEASES_ITEM_PATH: &str = "/keywords/leases/{}";

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    pub short_code: Option<String>,
    pub keyword: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordLease {
    pub short_code: Option<String>,
    pub keyword: Option<String>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub lease_begin: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub lease_end: Option<DateTime<Utc>>,
    pub auto_renew: Option<bool>,
    pub status: Option<String>,
}

impl_model! {
    Keyword => Keyword,
    KeywordLease => KeywordLease,
}

request! {
    pub struct FindKeywordLeasesRequest => FindKeywordLeasesRequestBuilder {
        limit: i64,
        offset: i64,
        fields: String,
    }
}

#[derive(Debug, Clone)]
pub struct KeywordsApi {
    client: Arc<RestApiClient>,
}

impl KeywordsApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    /// Availability of each keyword for purchase.
    pub fn find(&self, keywords: &[String]) -> Result<Vec<Keyword>> {
        let mut query = QueryPairs::new();
        add_if_set(
            &mut query,
            "keywords",
            Some(keywords).filter(|k| !k.is_empty()),
        );
        let holder = self.client.get(
            KEYWORDS_PATH,
            ModelType::list_holder_of::<Keyword>()?,
            &query,
        )?;
        Ok(holder.items)
    }

    pub fn is_available(&self, keyword: &str) -> Result<bool> {
        let keyword = require_text(keyword, "keyword")?;
        let path = replace_placeholder(KEYWORDS_AVAILABLE_PATH, keyword)?;
        self.client.get(&path, ModelType::of::<bool>()?, &[])
    }
}

#[derive(Debug, Clone)]
pub struct KeywordLeasesApi {
    client: Arc<RestApiClient>,
}

impl KeywordLeasesApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    pub fn find(&self, request: &FindKeywordLeasesRequest) -> Result<Page<KeywordLease>> {
        let query = to_query_pairs(request)?;
        self.client
            .get(LEASES_PATH, ModelType::page_of::<KeywordLease>()?, &query)
    }

    pub fn get(&self, keyword: &str, fields: Option<&str>) -> Result<KeywordLease> {
        let keyword = require_text(keyword, "keyword")?;
        let path = replace_placeholder(LEASES_ITEM_PATH, keyword)?;
        self.client
            .get(&path, ModelType::of::<KeywordLease>()?, &fields_query(fields))
    }

    /// Only `autoRenew` is writable.
    pub fn update(&self, lease: &KeywordLease) -> Result<()> {
        let keyword = require(lease.keyword.as_deref(), "lease.keyword")?;
        let keyword = require_text(keyword, "lease.keyword")?;
        let path = replace_placeholder(LEASES_ITEM_PATH, keyword)?;
        self.client.put(&path, ModelType::void(), Some(lease), &[])
    }
}
