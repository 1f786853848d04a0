//! Media files attached to texts and broadcasts.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::common::Page;
use crate::api::fields_query;
use crate::error::Result;
use crate::model_type::ModelType;
use crate::path::replace_placeholder;
use crate::query::to_query_pairs;
use crate::rest::RestApiClient;

const MEDIA_PATH: &str = "/media";
const MEDIA_ITEM_PATH: &str = "/media/{}";
const MEDIA_ITEM_FILE_PATH: &str = "/media/{}/file";

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub length_in_bytes: Option<i64>,
    /// MIME type, e.g. `image/jpeg`.
    pub media_type: Option<String>,
    pub public_url: Option<String>,
}

impl_model! {
    Media => Media,
}

request! {
    pub struct FindMediaRequest => FindMediaRequestBuilder {
        limit: i64,
        offset: i64,
        fields: String,
        filter: String,
    }
}

#[derive(Debug, Clone)]
pub struct MediaApi {
    client: Arc<RestApiClient>,
}

impl MediaApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    pub fn find(&self, request: &FindMediaRequest) -> Result<Page<Media>> {
        let query = to_query_pairs(request)?;
        self.client
            .get(MEDIA_PATH, ModelType::page_of::<Media>()?, &query)
    }

    pub fn get(&self, id: i64, fields: Option<&str>) -> Result<Media> {
        let path = replace_placeholder(MEDIA_ITEM_PATH, &id.to_string())?;
        self.client
            .get(&path, ModelType::of::<Media>()?, &fields_query(fields))
    }

    /// Raw file content.
    pub fn get_data(&self, id: i64) -> Result<Vec<u8>> {
        let path = replace_placeholder(MEDIA_ITEM_FILE_PATH, &id.to_string())?;
        self.client.get(&path, ModelType::stream(), &[])
    }
}
