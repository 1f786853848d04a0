//! Individual calls and texts, and call recordings.

mod model;

pub use model::*;

use std::sync::Arc;

use crate::api::common::Page;
use crate::api::fields_query;
use crate::error::Result;
use crate::model_type::ModelType;
use crate::path::replace_placeholder;
use crate::query::{QueryPairs, add_if_set, to_query_pairs};
use crate::rest::RestApiClient;

const CALLS_PATH: &str = "/calls";
const CALLS_ITEM_PATH: &str = "/calls/{}";
const CALLS_ITEM_RECORDINGS_PATH: &str = "/calls/{}/recordings";
const CALLS_RECORDING_PATH: &str = "/calls/recordings/{}";
const CALLS_RECORDING_MP3_PATH: &str = "/calls/recordings/{}.mp3";
const TEXTS_PATH: &str = "/texts";
const TEXTS_ITEM_PATH: &str = "/texts/{}";

fn send_query(campaign_id: Option<i64>, fields: Option<&str>) -> QueryPairs {
    let mut query = QueryPairs::new();
    add_if_set(&mut query, "campaignId", campaign_id);
    add_if_set(&mut query, "fields", fields);
    query
}

#[derive(Debug, Clone)]
pub struct CallsApi {
    client: Arc<RestApiClient>,
}

impl CallsApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    /// Calls sent or received, newest first.
    pub fn find(&self, request: &FindCallsRequest) -> Result<Page<Call>> {
        let query = to_query_pairs(request)?;
        self.client
            .get(CALLS_PATH, ModelType::page_of::<Call>()?, &query)
    }

    pub fn get(&self, id: i64, fields: Option<&str>) -> Result<Call> {
        let path = replace_placeholder(CALLS_ITEM_PATH, &id.to_string())?;
        self.client
            .get(&path, ModelType::of::<Call>()?, &fields_query(fields))
    }

    /// Send calls to `recipients`, optionally through an existing campaign.
    pub fn send(
        &self,
        recipients: &[CallRecipient],
        campaign_id: Option<i64>,
        fields: Option<&str>,
    ) -> Result<Vec<Call>> {
        let holder = self.client.post(
            CALLS_PATH,
            ModelType::list_holder_of::<Call>()?,
            Some(recipients),
            &send_query(campaign_id, fields),
        )?;
        Ok(holder.items)
    }

    pub fn get_call_recordings(&self, id: i64, fields: Option<&str>) -> Result<Vec<CallRecording>> {
        let path = replace_placeholder(CALLS_ITEM_RECORDINGS_PATH, &id.to_string())?;
        let holder = self.client.get(
            &path,
            ModelType::list_holder_of::<CallRecording>()?,
            &fields_query(fields),
        )?;
        Ok(holder.items)
    }

    pub fn get_call_recording(&self, id: i64, fields: Option<&str>) -> Result<CallRecording> {
        let path = replace_placeholder(CALLS_RECORDING_PATH, &id.to_string())?;
        self.client
            .get(&path, ModelType::of::<CallRecording>()?, &fields_query(fields))
    }

    /// Raw mp3 bytes of a recording.
    pub fn get_call_recording_mp3(&self, id: i64) -> Result<Vec<u8>> {
        let path = replace_placeholder(CALLS_RECORDING_MP3_PATH, &id.to_string())?;
        self.client.get(&path, ModelType::stream(), &[])
    }
}

#[derive(Debug, Clone)]
pub struct TextsApi {
    client: Arc<RestApiClient>,
}

impl TextsApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    pub fn find(&self, request: &FindTextsRequest) -> Result<Page<Text>> {
        let query = to_query_pairs(request)?;
        self.client
            .get(TEXTS_PATH, ModelType::page_of::<Text>()?, &query)
    }

    pub fn get(&self, id: i64, fields: Option<&str>) -> Result<Text> {
        let path = replace_placeholder(TEXTS_ITEM_PATH, &id.to_string())?;
        self.client
            .get(&path, ModelType::of::<Text>()?, &fields_query(fields))
    }

    pub fn send(
        &self,
        recipients: &[TextRecipient],
        campaign_id: Option<i64>,
        fields: Option<&str>,
    ) -> Result<Vec<Text>> {
        let holder = self.client.post(
            TEXTS_PATH,
            ModelType::list_holder_of::<Text>()?,
            Some(recipients),
            &send_query(campaign_id, fields),
        )?;
        Ok(holder.items)
    }
}
