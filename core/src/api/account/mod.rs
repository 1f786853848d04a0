//! The caller's own account, API credentials and orders.

mod model;

pub use model::*;

use std::sync::Arc;

use crate::api::common::{Page, ResourceId};
use crate::api::{fields_query, require, require_text};
use crate::error::Result;
use crate::model_type::ModelType;
use crate::path::replace_placeholder;
use crate::query::to_query_pairs;
use crate::rest::{NO_BODY, RestApiClient};

const ME_ACCOUNT_PATH: &str = "/me/account";
const ME_BILLING_PLAN_USAGE_PATH: &str = "/me/billing/plan-usage";
const ME_BILLING_CREDIT_USAGE_PATH: &str = "/me/billing/credit-usage";
const ME_CALLERIDS_PATH: &str = "/me/callerids";
const ME_CALLERIDS_CODE_PATH: &str = "/me/callerids/{}";
const ME_CALLERIDS_VERIFY_PATH: &str = "/me/callerids/{}/verification-code";
const ME_API_CREDS_PATH: &str = "/me/api/credentials";
const ME_API_CREDS_ITEM_PATH: &str = "/me/api/credentials/{}";
const ORDERS_KEYWORDS_PATH: &str = "/orders/keywords";
const ORDERS_NUMBERS_PATH: &str = "/orders/numbers";
const ORDERS_ITEM_PATH: &str = "/orders/{}";

#[derive(Debug, Clone)]
pub struct MeApi {
    client: Arc<RestApiClient>,
}

impl MeApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    pub fn get_account(&self, fields: Option<&str>) -> Result<Account> {
        self.client
            .get(ME_ACCOUNT_PATH, ModelType::of::<Account>()?, &fields_query(fields))
    }

    pub fn get_billing_plan_usage(&self, fields: Option<&str>) -> Result<BillingPlanUsage> {
        self.client.get(
            ME_BILLING_PLAN_USAGE_PATH,
            ModelType::of::<BillingPlanUsage>()?,
            &fields_query(fields),
        )
    }

    pub fn get_credit_usage(&self, request: &CreditsUsageRequest) -> Result<CreditsUsage> {
        let query = to_query_pairs(request)?;
        self.client.get(
            ME_BILLING_CREDIT_USAGE_PATH,
            ModelType::of::<CreditsUsage>()?,
            &query,
        )
    }

    pub fn get_caller_ids(&self) -> Result<Vec<CallerId>> {
        let holder = self.client.get(
            ME_CALLERIDS_PATH,
            ModelType::list_holder_of::<CallerId>()?,
            &[],
        )?;
        Ok(holder.items)
    }

    /// Ask the server to call or text a verification code to `caller_id`.
    pub fn send_verification_code(&self, caller_id: &str) -> Result<()> {
        let caller_id = require_text(caller_id, "callerId")?;
        let path = replace_placeholder(ME_CALLERIDS_CODE_PATH, caller_id)?;
        self.client
            .post(&path, ModelType::void(), NO_BODY, &[])
    }

    /// `true` when the code matched and the caller id is now verified.
    pub fn verify_caller_id(&self, request: &CallerIdVerificationRequest) -> Result<bool> {
        let caller_id = require(request.caller_id(), "request.callerId")?;
        let caller_id = require_text(caller_id, "request.callerId")?;
        let path = replace_placeholder(ME_CALLERIDS_VERIFY_PATH, caller_id)?;
        self.client
            .post(&path, ModelType::of::<bool>()?, Some(request), &[])
    }

    pub fn create_api_credentials(
        &self,
        credentials: &ApiCredentials,
        fields: Option<&str>,
    ) -> Result<ApiCredentials> {
        self.client.post(
            ME_API_CREDS_PATH,
            ModelType::of::<ApiCredentials>()?,
            Some(credentials),
            &fields_query(fields),
        )
    }

    pub fn find_api_credentials(
        &self,
        request: &FindApiCredentialsRequest,
    ) -> Result<Page<ApiCredentials>> {
        let query = to_query_pairs(request)?;
        self.client
            .get(ME_API_CREDS_PATH, ModelType::page_of::<ApiCredentials>()?, &query)
    }

    pub fn get_api_credentials(&self, id: i64, fields: Option<&str>) -> Result<ApiCredentials> {
        let path = replace_placeholder(ME_API_CREDS_ITEM_PATH, &id.to_string())?;
        self.client
            .get(&path, ModelType::of::<ApiCredentials>()?, &fields_query(fields))
    }

    pub fn delete_api_credentials(&self, id: i64) -> Result<()> {
        let path = replace_placeholder(ME_API_CREDS_ITEM_PATH, &id.to_string())?;
        self.client.delete(&path, ModelType::void(), &[])
    }
}

/// Purchases of keywords and numbers.
#[derive(Debug, Clone)]
pub struct OrdersApi {
    client: Arc<RestApiClient>,
}

impl OrdersApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    pub fn order_keywords(&self, request: &KeywordPurchaseRequest) -> Result<ResourceId> {
        self.client.post(
            ORDERS_KEYWORDS_PATH,
            ModelType::of::<ResourceId>()?,
            Some(request),
            &[],
        )
    }

    pub fn order_numbers(&self, request: &NumberPurchaseRequest) -> Result<ResourceId> {
        self.client.post(
            ORDERS_NUMBERS_PATH,
            ModelType::of::<ResourceId>()?,
            Some(request),
            &[],
        )
    }

    pub fn get_order(&self, id: i64, fields: Option<&str>) -> Result<NumberOrder> {
        let path = replace_placeholder(ORDERS_ITEM_PATH, &id.to_string())?;
        self.client
            .get(&path, ModelType::of::<NumberOrder>()?, &fields_query(fields))
    }
}
