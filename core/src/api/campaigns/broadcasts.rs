//! Call, text and IVR broadcasts.
//!
//! The three broadcast families expose the same operations under different
//! base paths, so one generic façade serves all of them. The [Broadcast]
//! trait supplies the base path, the recipient type and the item model
//! (calls or texts) for each family.

use std::marker::PhantomData;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::model::{
    AddBatchRequest, Batch, CallBroadcast, CallBroadcastStats, FindBroadcastItemsRequest,
    FindBroadcastsRequest, IvrBroadcast, Recipient, TextBroadcast, TextBroadcastStats,
};
use crate::api::callstexts::{Call, Text, TextRecipient};
use crate::api::common::{GetByIdRequest, Page, ResourceId};
use crate::api::{fields_query, require};
use crate::error::Result;
use crate::model_type::{Model, ModelType};
use crate::path::{PLACEHOLDER, replace_placeholder};
use crate::query::{QueryPairs, add_if_set, to_query_pairs};
use crate::rest::{NO_BODY, RestApiClient};

/// A broadcast family served by [BroadcastsApi].
pub trait Broadcast: Model + Serialize {
    /// Base path, e.g. `/calls/broadcasts`.
    const PATH: &'static str;
    /// Sub-resource holding the sent items, `calls` or `texts`.
    const ITEMS: &'static str;
    /// Name used in validation messages.
    const NAME: &'static str;

    type Recipient: Serialize;
    type Item: Model;

    fn id(&self) -> Option<i64>;
}

/// Broadcast families that report delivery statistics.
pub trait BroadcastWithStats: Broadcast {
    type Stats: Model;
}

impl Broadcast for CallBroadcast {
    const PATH: &'static str = "/calls/broadcasts";
    const ITEMS: &'static str = "calls";
    const NAME: &'static str = "broadcast";
    type Recipient = Recipient;
    type Item = Call;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl BroadcastWithStats for CallBroadcast {
    type Stats = CallBroadcastStats;
}

impl Broadcast for TextBroadcast {
    const PATH: &'static str = "/texts/broadcasts";
    const ITEMS: &'static str = "texts";
    const NAME: &'static str = "broadcast";
    type Recipient = TextRecipient;
    type Item = Text;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl BroadcastWithStats for TextBroadcast {
    type Stats = TextBroadcastStats;
}

impl Broadcast for IvrBroadcast {
    const PATH: &'static str = "/campaigns/ivrs";
    const ITEMS: &'static str = "calls";
    const NAME: &'static str = "broadcast";
    type Recipient = Recipient;
    type Item = Call;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

pub type CallBroadcastsApi = BroadcastsApi<CallBroadcast>;
pub type TextBroadcastsApi = BroadcastsApi<TextBroadcast>;
pub type IvrBroadcastsApi = BroadcastsApi<IvrBroadcast>;

pub struct BroadcastsApi<B> {
    client: Arc<RestApiClient>,
    _broadcast: PhantomData<fn() -> B>,
}

impl<B> Clone for BroadcastsApi<B> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            _broadcast: PhantomData,
        }
    }
}

impl<B: Broadcast> std::fmt::Debug for BroadcastsApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BroadcastsApi")
            .field("path", &B::PATH)
            .finish_non_exhaustive()
    }
}

impl<B: Broadcast> BroadcastsApi<B> {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self {
            client,
            _broadcast: PhantomData,
        }
    }

    /// `{base}/{id}{suffix}`
    fn item_path(id: i64, suffix: &str) -> Result<String> {
        let template = format!("{}/{PLACEHOLDER}{suffix}", B::PATH);
        Ok(replace_placeholder(&template, &id.to_string())?)
    }

    pub fn find(&self, request: &FindBroadcastsRequest) -> Result<Page<B>> {
        let query = to_query_pairs(request)?;
        self.client.get(B::PATH, ModelType::page_of::<B>()?, &query)
    }

    /// Create a broadcast, starting it right away when `start` is set.
    pub fn create(&self, broadcast: &B, start: Option<bool>) -> Result<ResourceId> {
        let mut query = QueryPairs::new();
        add_if_set(&mut query, "start", start);
        self.client
            .post(B::PATH, ModelType::of::<ResourceId>()?, Some(broadcast), &query)
    }

    pub fn get(&self, id: i64, fields: Option<&str>) -> Result<B> {
        let path = Self::item_path(id, "")?;
        self.client
            .get(&path, ModelType::of::<B>()?, &fields_query(fields))
    }

    pub fn update(&self, broadcast: &B) -> Result<()> {
        let id = require(broadcast.id(), &format!("{}.id", B::NAME))?;
        let path = Self::item_path(id, "")?;
        self.client
            .put(&path, ModelType::void(), Some(broadcast), &[])
    }

    pub fn get_batches(&self, request: &GetByIdRequest) -> Result<Page<Batch>> {
        let id = require(request.id().copied(), "request.id")?;
        let path = Self::item_path(id, "/batches")?;
        let query = to_query_pairs(request)?;
        self.client
            .get(&path, ModelType::page_of::<Batch>()?, &query)
    }

    pub fn add_batch(&self, request: &AddBatchRequest) -> Result<ResourceId> {
        let id = require(request.campaign_id().copied(), "request.campaignId")?;
        let path = Self::item_path(id, "/batches")?;
        self.client
            .post(&path, ModelType::of::<ResourceId>()?, Some(request), &[])
    }

    /// Calls or texts sent by the broadcast.
    pub fn get_items(&self, request: &GetByIdRequest) -> Result<Page<B::Item>> {
        let id = require(request.id().copied(), "request.id")?;
        let path = Self::item_path(id, &format!("/{}", B::ITEMS))?;
        let query = to_query_pairs(request)?;
        self.client
            .get(&path, ModelType::page_of::<B::Item>()?, &query)
    }

    /// Like [Self::get_items], with a batch filter.
    pub fn find_items(&self, request: &FindBroadcastItemsRequest) -> Result<Page<B::Item>> {
        let id = require(request.id().copied(), "request.id")?;
        let path = Self::item_path(id, &format!("/{}", B::ITEMS))?;
        let query = to_query_pairs(request)?;
        self.client
            .get(&path, ModelType::page_of::<B::Item>()?, &query)
    }

    pub fn start(&self, id: i64) -> Result<()> {
        self.transition(id, "/start")
    }

    pub fn stop(&self, id: i64) -> Result<()> {
        self.transition(id, "/stop")
    }

    pub fn archive(&self, id: i64) -> Result<()> {
        self.transition(id, "/archive")
    }

    fn transition(&self, id: i64, suffix: &str) -> Result<()> {
        let path = Self::item_path(id, suffix)?;
        self.client.post(&path, ModelType::void(), NO_BODY, &[])
    }

    /// Add recipients to a running broadcast; returns the created items.
    pub fn add_recipients(
        &self,
        id: i64,
        recipients: &[B::Recipient],
        fields: Option<&str>,
    ) -> Result<Vec<B::Item>> {
        let path = Self::item_path(id, "/recipients")?;
        let holder = self.client.post(
            &path,
            ModelType::list_holder_of::<B::Item>()?,
            Some(recipients),
            &fields_query(fields),
        )?;
        Ok(holder.items)
    }
}

impl<B: BroadcastWithStats> BroadcastsApi<B> {
    /// Delivery statistics, optionally limited to `[begin, end]`.
    pub fn get_stats(
        &self,
        id: i64,
        fields: Option<&str>,
        begin: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<B::Stats> {
        let path = Self::item_path(id, "/stats")?;
        let mut query = QueryPairs::new();
        add_if_set(&mut query, "fields", fields);
        add_if_set(&mut query, "begin", begin);
        add_if_set(&mut query, "end", end);
        self.client
            .get(&path, ModelType::of::<B::Stats>()?, &query)
    }
}
