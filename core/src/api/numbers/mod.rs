//! Number search and number leases.

mod model;

pub use model::*;

use std::sync::Arc;

use crate::api::common::Page;
use crate::api::{fields_query, require, require_text};
use crate::error::Result;
use crate::model_type::ModelType;
use crate::path::replace_placeholder;
use crate::query::to_query_pairs;
use crate::rest::RestApiClient;

const NUMBERS_LOCAL_PATH: &str = "/numbers/local";
const NUMBERS_TOLLFREE_PATH: &str = "/numbers/tollfree";
const NUMBERS_REGIONS_PATH: &str = "/numbers/regions";
const LEASES_PATH: &str = "/numbers/leases";
const LEASES_ITEM_PATH: &str = "/numbers/leases/{}";
const LEASES_CONFIGS_PATH: &str = "/numbers/leases/configs";
const LEASES_CONFIGS_ITEM_PATH: &str = "/numbers/leases/configs/{}";

/// Numbers available for purchase.
#[derive(Debug, Clone)]
pub struct NumbersApi {
    client: Arc<RestApiClient>,
}

impl NumbersApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    pub fn find_numbers_local(&self, request: &FindNumbersLocalRequest) -> Result<Vec<Number>> {
        let query = to_query_pairs(request)?;
        let holder = self.client.get(
            NUMBERS_LOCAL_PATH,
            ModelType::list_holder_of::<Number>()?,
            &query,
        )?;
        Ok(holder.items)
    }

    pub fn find_numbers_tollfree(
        &self,
        request: &FindTollfreeNumbersRequest,
    ) -> Result<Vec<Number>> {
        let query = to_query_pairs(request)?;
        let holder = self.client.get(
            NUMBERS_TOLLFREE_PATH,
            ModelType::list_holder_of::<Number>()?,
            &query,
        )?;
        Ok(holder.items)
    }

    pub fn find_number_regions(&self, request: &FindNumberRegionsRequest) -> Result<Page<Region>> {
        let query = to_query_pairs(request)?;
        self.client
            .get(NUMBERS_REGIONS_PATH, ModelType::page_of::<Region>()?, &query)
    }
}

/// Numbers leased by the account and their inbound configuration.
#[derive(Debug, Clone)]
pub struct NumberLeasesApi {
    client: Arc<RestApiClient>,
}

impl NumberLeasesApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    pub fn find(&self, request: &FindNumberLeasesRequest) -> Result<Page<NumberLease>> {
        let query = to_query_pairs(request)?;
        self.client
            .get(LEASES_PATH, ModelType::page_of::<NumberLease>()?, &query)
    }

    pub fn get(&self, number: &str, fields: Option<&str>) -> Result<NumberLease> {
        let number = require_text(number, "number")?;
        let path = replace_placeholder(LEASES_ITEM_PATH, number)?;
        self.client
            .get(&path, ModelType::of::<NumberLease>()?, &fields_query(fields))
    }

    pub fn update(&self, lease: &NumberLease) -> Result<()> {
        let number = require(lease.number.as_deref(), "lease.number")?;
        let number = require_text(number, "lease.number")?;
        let path = replace_placeholder(LEASES_ITEM_PATH, number)?;
        self.client.put(&path, ModelType::void(), Some(lease), &[])
    }

    pub fn find_configs(&self, request: &FindNumberLeasesRequest) -> Result<Page<NumberConfig>> {
        let query = to_query_pairs(request)?;
        self.client
            .get(LEASES_CONFIGS_PATH, ModelType::page_of::<NumberConfig>()?, &query)
    }

    pub fn get_config(&self, number: &str, fields: Option<&str>) -> Result<NumberConfig> {
        let number = require_text(number, "number")?;
        let path = replace_placeholder(LEASES_CONFIGS_ITEM_PATH, number)?;
        self.client
            .get(&path, ModelType::of::<NumberConfig>()?, &fields_query(fields))
    }

    pub fn update_config(&self, config: &NumberConfig) -> Result<()> {
        let number = require(config.number.as_deref(), "config.number")?;
        let number = require_text(number, "config.number")?;
        let path = replace_placeholder(LEASES_CONFIGS_ITEM_PATH, number)?;
        self.client.put(&path, ModelType::void(), Some(config), &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{MockTransport, test_client};

    #[test]
    fn local_numbers_are_a_list_holder() {
        let transport = MockTransport::respond(
            200,
            r#"{"items":[{"number":"13105551100","tollFree":false,"region":{"state":"CA","zipcode":"90401"}}]}"#,
        );
        let request = FindNumbersLocalRequest::builder()
            .state("CA")
            .limit(2)
            .build();
        let numbers = test_client(&transport)
            .numbers_api()
            .find_numbers_local(&request)
            .unwrap();
        assert_eq!(numbers[0].region.as_ref().unwrap().zipcode.as_deref(), Some("90401"));
        let req = transport.last_request();
        assert_eq!(req.url, "https://api.test/v2/numbers/local");
        assert_eq!(
            req.query,
            vec![
                ("limit".to_string(), "2".to_string()),
                ("state".to_string(), "CA".to_string()),
            ]
        );
    }

    #[test]
    fn regions_are_paged() {
        let transport = MockTransport::respond(
            200,
            r#"{"items":[{"prefix":"1310","city":"Santa Monica"}],"totalCount":1}"#,
        );
        let page = test_client(&transport)
            .numbers_api()
            .find_number_regions(&FindNumberRegionsRequest::builder().prefix("1310").build())
            .unwrap();
        assert_eq!(page.items[0].city.as_deref(), Some("Santa Monica"));
    }

    #[test]
    fn tollfree() {
        let transport = MockTransport::respond(200, r#"{"items":[{"tollFree":true}]}"#);
        let numbers = test_client(&transport)
            .numbers_api()
            .find_numbers_tollfree(&FindTollfreeNumbersRequest::builder().pattern("88*").build())
            .unwrap();
        assert_eq!(numbers[0].toll_free, Some(true));
        assert_eq!(transport.last_request().query_param("pattern"), Some("88*"));
    }

    #[test]
    fn lease_update_requires_number() {
        let transport = MockTransport::default();
        let api = test_client(&transport).number_leases_api();
        let err = api.update(&NumberLease::default()).unwrap_err();
        assert_eq!(err.to_string(), "lease.number cannot be null");
        let err = api.update_config(&NumberConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "config.number cannot be null");
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn configs() {
        let transport = MockTransport::respond(
            200,
            r#"{"number":"13105551100","configType":"TRACKING","callTrackingConfig":{"recorded":true}}"#,
        );
        let api = test_client(&transport).number_leases_api();
        let mut config = api.get_config("13105551100", None).unwrap();
        assert_eq!(config.config_type, Some(NumberConfigType::Tracking));

        config.config_type = Some(NumberConfigType::Ivr);
        config.call_tracking_config = None;
        config.ivr_inbound_config = Some(IvrInboundConfig {
            dialplan_xml: Some("<dialplan/>".to_string()),
        });
        api.update_config(&config).unwrap();
        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "https://api.test/v2/numbers/leases/configs/13105551100");
        assert_eq!(
            req.body.as_deref(),
            Some(r#"{"number":"13105551100","configType":"IVR","ivrInboundConfig":{"dialplanXml":"<dialplan/>"}}"#)
        );
    }
}
