//! Campaigns: broadcasts, batches, sounds, auto-replies, agent groups and
//! call center campaigns.

mod agents;
mod auto_replies;
mod batches;
mod broadcasts;
mod model;
mod sounds;

pub use agents::{AgentGroupsApi, CccCampaignsApi};
pub use auto_replies::TextAutoRepliesApi;
pub use batches::BatchesApi;
pub use broadcasts::{
    Broadcast, BroadcastWithStats, BroadcastsApi, CallBroadcastsApi, IvrBroadcastsApi,
    TextBroadcastsApi,
};
pub use model::*;
pub use sounds::CampaignSoundsApi;
