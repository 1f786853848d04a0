use std::sync::Arc;

use super::model::Batch;
use crate::api::{fields_query, require};
use crate::error::Result;
use crate::model_type::ModelType;
use crate::path::replace_placeholder;
use crate::rest::RestApiClient;

const BATCH_ITEM_PATH: &str = "/campaigns/batches/{}";

/// Batches of any broadcast, addressed by batch id.
#[derive(Debug, Clone)]
pub struct BatchesApi {
    client: Arc<RestApiClient>,
}

impl BatchesApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    pub fn get(&self, id: i64, fields: Option<&str>) -> Result<Batch> {
        let path = replace_placeholder(BATCH_ITEM_PATH, &id.to_string())?;
        self.client
            .get(&path, ModelType::of::<Batch>()?, &fields_query(fields))
    }

    /// Only `enabled` is writable.
    pub fn update(&self, batch: &Batch) -> Result<()> {
        let id = require(batch.id, "batch.id")?;
        let path = replace_placeholder(BATCH_ITEM_PATH, &id.to_string())?;
        self.client.put(&path, ModelType::void(), Some(batch), &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{MockTransport, test_client};

    #[test]
    fn get_and_update() {
        let transport = MockTransport::respond(200, r#"{"id":3,"enabled":true,"size":10}"#);
        let api = test_client(&transport).batches_api();
        let mut batch = api.get(3, None).unwrap();
        assert_eq!(batch.size, Some(10));

        batch.enabled = Some(false);
        api.update(&batch).unwrap();
        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "https://api.test/v2/campaigns/batches/3");
    }

    #[test]
    fn update_requires_id() {
        let transport = MockTransport::default();
        let err = test_client(&transport)
            .batches_api()
            .update(&Batch::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "batch.id cannot be null");
        assert_eq!(transport.calls(), 0);
    }
}
