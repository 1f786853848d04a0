use std::sync::Arc;

use super::model::{FindTextAutoRepliesRequest, TextAutoReply};
use crate::api::common::{Page, ResourceId};
use crate::api::fields_query;
use crate::error::Result;
use crate::model_type::ModelType;
use crate::path::replace_placeholder;
use crate::query::to_query_pairs;
use crate::rest::RestApiClient;

const AUTO_REPLIES_PATH: &str = "/texts/auto-replys";
const AUTO_REPLIES_ITEM_PATH: &str = "/texts/auto-replys/{}";

/// Automatic replies to inbound texts.
#[derive(Debug, Clone)]
pub struct TextAutoRepliesApi {
    client: Arc<RestApiClient>,
}

impl TextAutoRepliesApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    pub fn find(&self, request: &FindTextAutoRepliesRequest) -> Result<Page<TextAutoReply>> {
        let query = to_query_pairs(request)?;
        self.client
            .get(AUTO_REPLIES_PATH, ModelType::page_of::<TextAutoReply>()?, &query)
    }

    pub fn get(&self, id: i64, fields: Option<&str>) -> Result<TextAutoReply> {
        let path = replace_placeholder(AUTO_REPLIES_ITEM_PATH, &id.to_string())?;
        self.client
            .get(&path, ModelType::of::<TextAutoReply>()?, &fields_query(fields))
    }

    pub fn create(&self, reply: &TextAutoReply) -> Result<ResourceId> {
        self.client.post(
            AUTO_REPLIES_PATH,
            ModelType::of::<ResourceId>()?,
            Some(reply),
            &[],
        )
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let path = replace_placeholder(AUTO_REPLIES_ITEM_PATH, &id.to_string())?;
        self.client.delete(&path, ModelType::void(), &[])
    }
}
