use std::sync::Arc;

use super::model::{
    CreateDncsRequest, DoNotContact, FindDncNumbersRequest, FindUniversalDncsRequest,
    UniversalDnc, UpdateDncRequest,
};
use crate::api::common::Page;
use crate::api::{require, require_text};
use crate::error::Result;
use crate::model_type::ModelType;
use crate::path::replace_placeholder;
use crate::query::to_query_pairs;
use crate::rest::RestApiClient;

const DNCS_PATH: &str = "/contacts/dncs";
const DNCS_ITEM_PATH: &str = "/contacts/dncs/{}";
const DNCS_SOURCE_PATH: &str = "/contacts/dncs/sources/{}";
const DNCS_UNIVERSAL_PATH: &str = "/contacts/dncs/universals/{}";

/// Do-not-contact lists.
#[derive(Debug, Clone)]
pub struct DncApi {
    client: Arc<RestApiClient>,
}

impl DncApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    pub fn find(&self, request: &FindDncNumbersRequest) -> Result<Page<DoNotContact>> {
        let query = to_query_pairs(request)?;
        self.client
            .get(DNCS_PATH, ModelType::page_of::<DoNotContact>()?, &query)
    }

    pub fn get(&self, number: &str) -> Result<DoNotContact> {
        let number = require_text(number, "number")?;
        let path = replace_placeholder(DNCS_ITEM_PATH, number)?;
        self.client
            .get(&path, ModelType::of::<DoNotContact>()?, &[])
    }

    pub fn create(&self, request: &CreateDncsRequest) -> Result<()> {
        self.client
            .post(DNCS_PATH, ModelType::void(), Some(request), &[])
    }

    pub fn update(&self, request: &UpdateDncRequest) -> Result<()> {
        let number = require(request.number(), "request.number")?;
        let number = require_text(number, "request.number")?;
        let path = replace_placeholder(DNCS_ITEM_PATH, number)?;
        self.client
            .put(&path, ModelType::void(), Some(request), &[])
    }

    pub fn delete(&self, number: &str) -> Result<()> {
        let number = require_text(number, "number")?;
        let path = replace_placeholder(DNCS_ITEM_PATH, number)?;
        self.client.delete(&path, ModelType::void(), &[])
    }

    /// Remove every number that was added with `source`.
    pub fn delete_dncs_from_source(&self, source: &str) -> Result<()> {
        let source = require_text(source, "source")?;
        let path = replace_placeholder(DNCS_SOURCE_PATH, source)?;
        self.client.delete(&path, ModelType::void(), &[])
    }

    pub fn find_universal_dncs(&self, request: &FindUniversalDncsRequest) -> Result<Vec<UniversalDnc>> {
        let to_number = require(request.to_number(), "request.toNumber")?;
        let to_number = require_text(to_number, "request.toNumber")?;
        let path = replace_placeholder(DNCS_UNIVERSAL_PATH, to_number)?;
        let query = to_query_pairs(request)?;
        let holder = self.client.get(
            &path,
            ModelType::list_holder_of::<UniversalDnc>()?,
            &query,
        )?;
        Ok(holder.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{MockTransport, test_client};

    #[test]
    fn find_by_numbers() {
        let transport = MockTransport::respond(
            200,
            r#"{"items":[{"number":"12135551189","call":true,"text":true}],"limit":1}"#,
        );
        let request = FindDncNumbersRequest::builder()
            .text(true)
            .limit(1)
            .numbers(vec!["12135551189".to_string()])
            .build();
        let page = test_client(&transport).dnc_api().find(&request).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(
            transport.last_request().query,
            vec![
                ("limit".to_string(), "1".to_string()),
                ("text".to_string(), "true".to_string()),
                ("numbers".to_string(), "12135551189".to_string()),
            ]
        );
    }

    #[test]
    fn crud_by_number() {
        let transport = MockTransport::default();
        transport.push(200, "");
        transport.push(200, r#"{"number":"12135551188","call":true,"text":true}"#);
        transport.push(200, "");
        transport.push(200, "");
        let api = test_client(&transport).dnc_api();

        api.create(
            &CreateDncsRequest::builder()
                .call(true)
                .text(true)
                .numbers(vec!["12135551188".to_string()])
                .source("testSource")
                .build(),
        )
        .unwrap();
        let dnc = api.get("12135551188").unwrap();
        assert_eq!(dnc.number.as_deref(), Some("12135551188"));
        assert_eq!(dnc.call, Some(true));

        api.update(
            &UpdateDncRequest::builder()
                .number("12135551188")
                .call(true)
                .text(false)
                .build(),
        )
        .unwrap();
        api.delete("12135551188").unwrap();

        let requests = transport.requests();
        let create_body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            create_body,
            serde_json::json!({"numbers": ["12135551188"], "call": true, "text": true, "source": "testSource"})
        );
        assert_eq!(requests[2].method, HttpMethod::Put);
        assert_eq!(requests[2].url, "https://api.test/v2/contacts/dncs/12135551188");
        assert_eq!(requests[2].body.as_deref(), Some(r#"{"call":true,"text":false}"#));
        assert_eq!(requests[3].method, HttpMethod::Delete);
    }

    #[test]
    fn number_is_validated_before_any_call() {
        let transport = MockTransport::default();
        let api = test_client(&transport).dnc_api();

        let err = api.get("").unwrap_err();
        assert_eq!(err.to_string(), "number cannot be blank");

        let err = api
            .update(&UpdateDncRequest::builder().call(false).build())
            .unwrap_err();
        assert_eq!(err.to_string(), "request.number cannot be null");

        let err = api.delete_dncs_from_source(" ").unwrap_err();
        assert_eq!(err.to_string(), "source cannot be blank");

        let err = api
            .find_universal_dncs(&FindUniversalDncsRequest::builder().from_number("1").build())
            .unwrap_err();
        assert_eq!(err.to_string(), "request.toNumber cannot be null");

        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn delete_from_source() {
        let transport = MockTransport::default();
        test_client(&transport)
            .dnc_api()
            .delete_dncs_from_source("testSourceForDeleteDncs")
            .unwrap();
        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(
            req.url,
            "https://api.test/v2/contacts/dncs/sources/testSourceForDeleteDncs"
        );
    }

    #[test]
    fn universal_dncs() {
        let transport = MockTransport::respond(
            200,
            r#"{"items":[{"toNumber":"12135551188","fromNumber":"18442800143","inboundCall":false,"outboundCall":true,"inboundText":false,"outboundText":true}]}"#,
        );
        let request = FindUniversalDncsRequest::builder()
            .to_number("12135551188")
            .from_number("18442800143")
            .build();
        let dncs = test_client(&transport)
            .dnc_api()
            .find_universal_dncs(&request)
            .unwrap();
        assert_eq!(dncs[0].from_number.as_deref(), Some("18442800143"));
        assert_eq!(dncs[0].outbound_call, Some(true));

        let req = transport.last_request();
        assert_eq!(
            req.url,
            "https://api.test/v2/contacts/dncs/universals/12135551188"
        );
        assert_eq!(
            req.query,
            vec![("fromNumber".to_string(), "18442800143".to_string())]
        );
    }

    #[test]
    fn number_cannot_add_query_or_segments() {
        let transport = MockTransport::default();
        let api = test_client(&transport).dnc_api();

        api.delete("1213?x=1").unwrap();
        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "https://api.test/v2/contacts/dncs/1213%3Fx=1");
        assert!(req.query.is_empty());

        api.delete_dncs_from_source("lists/7").unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://api.test/v2/contacts/dncs/sources/lists%2F7"
        );
    }
}
