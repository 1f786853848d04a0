//! Contacts, contact lists and do-not-contact lists.

mod dnc;
mod lists;
mod model;

pub use dnc::DncApi;
pub use lists::ContactListsApi;
pub use model::*;

use std::sync::Arc;

use crate::api::common::{GetByIdRequest, Page, ResourceId};
use crate::api::{fields_query, require};
use crate::error::Result;
use crate::model_type::ModelType;
use crate::path::replace_placeholder;
use crate::query::to_query_pairs;
use crate::rest::RestApiClient;

const CONTACTS_PATH: &str = "/contacts";
const CONTACTS_ITEM_PATH: &str = "/contacts/{}";
const CONTACTS_HISTORY_PATH: &str = "/contacts/{}/history";

#[derive(Debug, Clone)]
pub struct ContactsApi {
    client: Arc<RestApiClient>,
}

impl ContactsApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    pub fn find(&self, request: &FindContactsRequest) -> Result<Page<Contact>> {
        let query = to_query_pairs(request)?;
        self.client
            .get(CONTACTS_PATH, ModelType::page_of::<Contact>()?, &query)
    }

    pub fn get(&self, id: i64, fields: Option<&str>) -> Result<Contact> {
        let path = replace_placeholder(CONTACTS_ITEM_PATH, &id.to_string())?;
        self.client
            .get(&path, ModelType::of::<Contact>()?, &fields_query(fields))
    }

    /// Create contacts in bulk; ids come back in input order.
    pub fn create(&self, contacts: &[Contact]) -> Result<Vec<ResourceId>> {
        let holder = self.client.post(
            CONTACTS_PATH,
            ModelType::list_holder_of::<ResourceId>()?,
            Some(contacts),
            &[],
        )?;
        Ok(holder.items)
    }

    pub fn update(&self, contact: &Contact) -> Result<()> {
        let id = require(contact.id, "contact.id")?;
        let path = replace_placeholder(CONTACTS_ITEM_PATH, &id.to_string())?;
        self.client
            .put(&path, ModelType::void(), Some(contact), &[])
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let path = replace_placeholder(CONTACTS_ITEM_PATH, &id.to_string())?;
        self.client.delete(&path, ModelType::void(), &[])
    }

    pub fn get_history(&self, request: &GetByIdRequest) -> Result<ContactHistory> {
        let id = require(request.id().copied(), "request.id")?;
        let path = replace_placeholder(CONTACTS_HISTORY_PATH, &id.to_string())?;
        let query = to_query_pairs(request)?;
        self.client
            .get(&path, ModelType::of::<ContactHistory>()?, &query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockTransport, test_client};

    #[test]
    fn bulk_create_returns_ids() {
        let transport = MockTransport::respond(200, r#"{"items":[{"id":1},{"id":2}]}"#);
        let contacts = vec![
            Contact {
                first_name: Some("Ann".to_string()),
                home_phone: Some("12135551100".to_string()),
                ..Default::default()
            },
            Contact {
                first_name: Some("Bob".to_string()),
                ..Default::default()
            },
        ];
        let ids = test_client(&transport)
            .contacts_api()
            .create(&contacts)
            .unwrap();
        assert_eq!(ids, vec![ResourceId { id: 1 }, ResourceId { id: 2 }]);
        assert_eq!(
            transport.last_request().body.as_deref(),
            Some(r#"[{"firstName":"Ann","homePhone":"12135551100"},{"firstName":"Bob"}]"#)
        );
    }

    #[test]
    fn find_by_property() {
        let transport = MockTransport::respond(200, r#"{"items":[]}"#);
        let request = FindContactsRequest::builder()
            .property_name("zipcode")
            .property_value("90401")
            .build();
        test_client(&transport).contacts_api().find(&request).unwrap();
        assert_eq!(
            transport.last_request().query,
            vec![
                ("propertyName".to_string(), "zipcode".to_string()),
                ("propertyValue".to_string(), "90401".to_string()),
            ]
        );
    }

    #[test]
    fn update_requires_id() {
        let transport = MockTransport::default();
        let err = test_client(&transport)
            .contacts_api()
            .update(&Contact::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "contact.id cannot be null");
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn history() {
        let transport = MockTransport::respond(
            200,
            r#"{"id":5,"calls":[{"id":10}],"texts":[{"id":11},{"id":12}]}"#,
        );
        let request = GetByIdRequest::builder().id(5).limit(2).build();
        let history = test_client(&transport)
            .contacts_api()
            .get_history(&request)
            .unwrap();
        assert_eq!(history.calls.len(), 1);
        assert_eq!(history.texts.len(), 2);
        let req = transport.last_request();
        assert_eq!(req.url, "https://api.test/v2/contacts/5/history");
        assert_eq!(req.query_param("limit"), Some("2"));
    }
}
