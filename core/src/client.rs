//! Client entry point.
//!
//! # Design
//! `CallfireClient` owns one `RestApiClient` behind an `Arc` and hands out
//! façades that share it. Façades are cheap to create and hold no state of
//! their own, so callers may keep them or ask for a new one per call.

use std::sync::Arc;

use crate::api::account::{MeApi, OrdersApi};
use crate::api::callstexts::{CallsApi, TextsApi};
use crate::api::campaigns::{
    AgentGroupsApi, BatchesApi, CallBroadcastsApi, CampaignSoundsApi, CccCampaignsApi,
    IvrBroadcastsApi, TextAutoRepliesApi, TextBroadcastsApi,
};
use crate::api::contacts::{ContactListsApi, ContactsApi, DncApi};
use crate::api::keywords::{KeywordLeasesApi, KeywordsApi};
use crate::api::media::MediaApi;
use crate::api::numbers::{NumberLeasesApi, NumbersApi};
use crate::api::webhooks::WebhooksApi;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::Transport;
use crate::rest::RestApiClient;

/// Synchronous client for the CallFire v2 API.
#[derive(Debug, Clone)]
pub struct CallfireClient {
    rest: Arc<RestApiClient>,
}

impl CallfireClient {
    /// Client for the default endpoint using `login` and `password`.
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(login, password))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            rest: Arc::new(RestApiClient::new(&config)),
        }
    }

    /// Client configured from `CALLFIRE_*` environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        Ok(Self::from_config(ClientConfig::from_env()?))
    }

    /// Client that sends every request through `transport`.
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            rest: Arc::new(RestApiClient::with_transport(&config, transport)),
        }
    }

    pub fn rest_api_client(&self) -> &RestApiClient {
        &self.rest
    }

    pub fn call_broadcasts_api(&self) -> CallBroadcastsApi {
        CallBroadcastsApi::new(self.shared())
    }

    pub fn text_broadcasts_api(&self) -> TextBroadcastsApi {
        TextBroadcastsApi::new(self.shared())
    }

    pub fn ivr_broadcasts_api(&self) -> IvrBroadcastsApi {
        IvrBroadcastsApi::new(self.shared())
    }

    pub fn batches_api(&self) -> BatchesApi {
        BatchesApi::new(self.shared())
    }

    pub fn campaign_sounds_api(&self) -> CampaignSoundsApi {
        CampaignSoundsApi::new(self.shared())
    }

    pub fn text_auto_replies_api(&self) -> TextAutoRepliesApi {
        TextAutoRepliesApi::new(self.shared())
    }

    pub fn agent_groups_api(&self) -> AgentGroupsApi {
        AgentGroupsApi::new(self.shared())
    }

    pub fn ccc_campaigns_api(&self) -> CccCampaignsApi {
        CccCampaignsApi::new(self.shared())
    }

    pub fn calls_api(&self) -> CallsApi {
        CallsApi::new(self.shared())
    }

    pub fn texts_api(&self) -> TextsApi {
        TextsApi::new(self.shared())
    }

    pub fn contacts_api(&self) -> ContactsApi {
        ContactsApi::new(self.shared())
    }

    pub fn contact_lists_api(&self) -> ContactListsApi {
        ContactListsApi::new(self.shared())
    }

    pub fn dnc_api(&self) -> DncApi {
        DncApi::new(self.shared())
    }

    pub fn webhooks_api(&self) -> WebhooksApi {
        WebhooksApi::new(self.shared())
    }

    pub fn numbers_api(&self) -> NumbersApi {
        NumbersApi::new(self.shared())
    }

    pub fn number_leases_api(&self) -> NumberLeasesApi {
        NumberLeasesApi::new(self.shared())
    }

    pub fn keywords_api(&self) -> KeywordsApi {
        KeywordsApi::new(self.shared())
    }

    pub fn keyword_leases_api(&self) -> KeywordLeasesApi {
        KeywordLeasesApi::new(self.shared())
    }

    pub fn me_api(&self) -> MeApi {
        MeApi::new(self.shared())
    }

    pub fn orders_api(&self) -> OrdersApi {
        OrdersApi::new(self.shared())
    }

    pub fn media_api(&self) -> MediaApi {
        MediaApi::new(self.shared())
    }

    fn shared(&self) -> Arc<RestApiClient> {
        Arc::clone(&self.rest)
    }
}
