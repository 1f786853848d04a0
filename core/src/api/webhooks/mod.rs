//! Webhook registrations and the resources they can watch.

mod model;

pub use model::*;

use std::sync::Arc;

use crate::api::common::{Page, ResourceId};
use crate::api::{fields_query, require, require_text};
use crate::error::Result;
use crate::model_type::ModelType;
use crate::path::replace_placeholder;
use crate::query::to_query_pairs;
use crate::rest::RestApiClient;

const WEBHOOKS_PATH: &str = "/webhooks";
const WEBHOOKS_ITEM_PATH: &str = "/webhooks/{}";
const WEBHOOKS_RESOURCES_PATH: &str = "/webhooks/resources";
const WEBHOOKS_RESOURCE_PATH: &str = "/webhooks/resources/{}";

#[derive(Debug, Clone)]
pub struct WebhooksApi {
    client: Arc<RestApiClient>,
}

impl WebhooksApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    pub fn find(&self, request: &FindWebhooksRequest) -> Result<Page<Webhook>> {
        let query = to_query_pairs(request)?;
        self.client
            .get(WEBHOOKS_PATH, ModelType::page_of::<Webhook>()?, &query)
    }

    pub fn get(&self, id: i64, fields: Option<&str>) -> Result<Webhook> {
        let path = replace_placeholder(WEBHOOKS_ITEM_PATH, &id.to_string())?;
        self.client
            .get(&path, ModelType::of::<Webhook>()?, &fields_query(fields))
    }

    pub fn create(&self, webhook: &Webhook) -> Result<ResourceId> {
        self.client.post(
            WEBHOOKS_PATH,
            ModelType::of::<ResourceId>()?,
            Some(webhook),
            &[],
        )
    }

    pub fn update(&self, webhook: &Webhook) -> Result<()> {
        let id = require(webhook.id, "webhook.id")?;
        let path = replace_placeholder(WEBHOOKS_ITEM_PATH, &id.to_string())?;
        self.client
            .put(&path, ModelType::void(), Some(webhook), &[])
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let path = replace_placeholder(WEBHOOKS_ITEM_PATH, &id.to_string())?;
        self.client.delete(&path, ModelType::void(), &[])
    }

    /// Every resource that supports webhooks.
    pub fn find_webhook_resources(&self, fields: Option<&str>) -> Result<Vec<WebhookResource>> {
        let holder = self.client.get(
            WEBHOOKS_RESOURCES_PATH,
            ModelType::list_holder_of::<WebhookResource>()?,
            &fields_query(fields),
        )?;
        Ok(holder.items)
    }

    pub fn find_webhook_resource(
        &self,
        resource: &str,
        fields: Option<&str>,
    ) -> Result<WebhookResource> {
        let resource = require_text(resource, "resource")?;
        let path = replace_placeholder(WEBHOOKS_RESOURCE_PATH, resource)?;
        self.client
            .get(&path, ModelType::of::<WebhookResource>()?, &fields_query(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{MockTransport, test_client};

    #[test]
    fn find_sends_only_set_filters_in_order() {
        let transport = MockTransport::respond(
            200,
            r#"{"items":[{"id":1,"name":"hook","enabled":true}],"limit":5,"offset":0,"totalCount":1}"#,
        );
        let request = FindWebhooksRequest::builder()
            .limit(5)
            .name("hook")
            .enabled(true)
            .build();
        let page = test_client(&transport).webhooks_api().find(&request).unwrap();

        assert_eq!(page.items[0].name.as_deref(), Some("hook"));
        assert_eq!(page.total_count, Some(1));
        let req = transport.last_request();
        assert_eq!(req.url, "https://api.test/v2/webhooks");
        assert_eq!(
            req.query,
            vec![
                ("limit".to_string(), "5".to_string()),
                ("name".to_string(), "hook".to_string()),
                ("enabled".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn get_with_fields() {
        let transport = MockTransport::respond(
            200,
            r#"{"id":11,"name":"hook","createdAt":1445276000000}"#,
        );
        let webhook = test_client(&transport)
            .webhooks_api()
            .get(11, Some("id,name"))
            .unwrap();
        assert_eq!(webhook.id, Some(11));
        assert_eq!(
            webhook.created_at.map(|t| t.timestamp_millis()),
            Some(1_445_276_000_000)
        );
        let req = transport.last_request();
        assert_eq!(req.url, "https://api.test/v2/webhooks/11");
        assert_eq!(req.query_param("fields"), Some("id,name"));
    }

    #[test]
    fn create_posts_the_webhook() {
        let transport = MockTransport::respond(200, r#"{"id":21}"#);
        let webhook = Webhook {
            name: Some("hook".to_string()),
            resource: Some("TextBroadcast".to_string()),
            events: Some(vec!["start".to_string()]),
            callback: Some("https://example.com/cb".to_string()),
            ..Default::default()
        };
        let id = test_client(&transport).webhooks_api().create(&webhook).unwrap();
        assert_eq!(id.id, 21);

        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Post);
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "hook",
                "resource": "TextBroadcast",
                "events": ["start"],
                "callback": "https://example.com/cb",
            })
        );
    }

    #[test]
    fn update_requires_id() {
        let transport = MockTransport::default();
        let err = test_client(&transport)
            .webhooks_api()
            .update(&Webhook::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "webhook.id cannot be null");
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn update_and_delete_target_the_item() {
        let transport = MockTransport::default();
        let api = test_client(&transport).webhooks_api();
        api.update(&Webhook {
            id: Some(4),
            enabled: Some(false),
            ..Default::default()
        })
        .unwrap();
        api.delete(4).unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Put);
        assert_eq!(requests[0].url, "https://api.test/v2/webhooks/4");
        assert_eq!(requests[1].method, HttpMethod::Delete);
        assert_eq!(requests[1].url, "https://api.test/v2/webhooks/4");
    }

    #[test]
    fn resources() {
        let transport = MockTransport::respond(
            200,
            r#"{"items":[{"resource":"CallBroadcast","supportedEvents":["start","stop"]}]}"#,
        );
        transport.push(200, r#"{"resource":"Contact","supportedEvents":["created"]}"#);
        let api = test_client(&transport).webhooks_api();

        let resources = api.find_webhook_resources(None).unwrap();
        assert_eq!(resources[0].supported_events, vec!["start", "stop"]);

        let contact = api.find_webhook_resource("Contact", Some("resource")).unwrap();
        assert_eq!(contact.resource.as_deref(), Some("Contact"));
        assert_eq!(
            transport.last_request().url,
            "https://api.test/v2/webhooks/resources/Contact"
        );
    }

    #[test]
    fn blank_resource_is_rejected() {
        let transport = MockTransport::default();
        let err = test_client(&transport)
            .webhooks_api()
            .find_webhook_resource("", None)
            .unwrap_err();
        assert_eq!(err.to_string(), "resource cannot be blank");
        assert_eq!(transport.calls(), 0);
    }
}
