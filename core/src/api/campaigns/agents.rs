use std::sync::Arc;

use super::model::{Agent, AgentGroup, CccCampaign, FindAgentGroupsRequest, FindCccCampaignsRequest};
use crate::api::common::{Page, ResourceId};
use crate::api::{fields_query, require};
use crate::error::Result;
use crate::model_type::ModelType;
use crate::path::replace_placeholder;
use crate::query::to_query_pairs;
use crate::rest::RestApiClient;

const AGENT_GROUPS_PATH: &str = "/campaigns/agent-groups";
const AGENT_GROUPS_ITEM_PATH: &str = "/campaigns/agent-groups/{}";
const CCCS_PATH: &str = "/campaigns/cccs";
const CCCS_ITEM_PATH: &str = "/campaigns/cccs/{}";
const CCCS_ITEM_AGENTS_PATH: &str = "/campaigns/cccs/{}/agents";
const CCCS_ITEM_AGENT_GROUPS_PATH: &str = "/campaigns/cccs/{}/agent-groups";

#[derive(Debug, Clone)]
pub struct AgentGroupsApi {
    client: Arc<RestApiClient>,
}

impl AgentGroupsApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    pub fn find(&self, request: &FindAgentGroupsRequest) -> Result<Page<AgentGroup>> {
        let query = to_query_pairs(request)?;
        self.client
            .get(AGENT_GROUPS_PATH, ModelType::page_of::<AgentGroup>()?, &query)
    }

    pub fn get(&self, id: i64, fields: Option<&str>) -> Result<AgentGroup> {
        let path = replace_placeholder(AGENT_GROUPS_ITEM_PATH, &id.to_string())?;
        self.client
            .get(&path, ModelType::of::<AgentGroup>()?, &fields_query(fields))
    }

    pub fn create(&self, group: &AgentGroup) -> Result<ResourceId> {
        self.client.post(
            AGENT_GROUPS_PATH,
            ModelType::of::<ResourceId>()?,
            Some(group),
            &[],
        )
    }

    pub fn update(&self, group: &AgentGroup) -> Result<()> {
        let id = require(group.id, "agentGroup.id")?;
        let path = replace_placeholder(AGENT_GROUPS_ITEM_PATH, &id.to_string())?;
        self.client.put(&path, ModelType::void(), Some(group), &[])
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let path = replace_placeholder(AGENT_GROUPS_ITEM_PATH, &id.to_string())?;
        self.client.delete(&path, ModelType::void(), &[])
    }
}

/// Call center campaigns and the agents assigned to them.
#[derive(Debug, Clone)]
pub struct CccCampaignsApi {
    client: Arc<RestApiClient>,
}

impl CccCampaignsApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    pub fn find(&self, request: &FindCccCampaignsRequest) -> Result<Page<CccCampaign>> {
        let query = to_query_pairs(request)?;
        self.client
            .get(CCCS_PATH, ModelType::page_of::<CccCampaign>()?, &query)
    }

    pub fn get(&self, id: i64, fields: Option<&str>) -> Result<CccCampaign> {
        let path = replace_placeholder(CCCS_ITEM_PATH, &id.to_string())?;
        self.client
            .get(&path, ModelType::of::<CccCampaign>()?, &fields_query(fields))
    }

    /// Agents of a campaign, as a bare JSON array.
    pub fn get_agents(&self, id: i64, fields: Option<&str>) -> Result<Vec<Agent>> {
        let path = replace_placeholder(CCCS_ITEM_AGENTS_PATH, &id.to_string())?;
        self.client
            .get(&path, ModelType::list_of::<Agent>()?, &fields_query(fields))
    }

    /// Agent groups of a campaign, as a bare JSON array.
    pub fn get_agent_groups(&self, id: i64, fields: Option<&str>) -> Result<Vec<AgentGroup>> {
        let path = replace_placeholder(CCCS_ITEM_AGENT_GROUPS_PATH, &id.to_string())?;
        self.client
            .get(&path, ModelType::list_of::<AgentGroup>()?, &fields_query(fields))
    }
}
