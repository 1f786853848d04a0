use std::sync::Arc;

use super::model::{
    AddContactListItemsRequest, Contact, ContactList, CreateContactListRequest,
    FindContactListsRequest, UpdateContactListRequest,
};
use crate::api::common::{GetByIdRequest, Page, ResourceId};
use crate::api::{fields_query, require};
use crate::error::Result;
use crate::model_type::ModelType;
use crate::path::replace_placeholder;
use crate::query::{QueryPairs, add_if_set, to_query_pairs};
use crate::rest::RestApiClient;

const LISTS_PATH: &str = "/contacts/lists";
const LISTS_ITEM_PATH: &str = "/contacts/lists/{}";
const LISTS_ITEMS_PATH: &str = "/contacts/lists/{}/items";
const LISTS_ITEMS_CONTACT_PATH: &str = "/contacts/lists/{}/items/{}";

#[derive(Debug, Clone)]
pub struct ContactListsApi {
    client: Arc<RestApiClient>,
}

impl ContactListsApi {
    pub(crate) fn new(client: Arc<RestApiClient>) -> Self {
        Self { client }
    }

    pub fn find(&self, request: &FindContactListsRequest) -> Result<Page<ContactList>> {
        let query = to_query_pairs(request)?;
        self.client
            .get(LISTS_PATH, ModelType::page_of::<ContactList>()?, &query)
    }

    pub fn get(&self, id: i64, fields: Option<&str>) -> Result<ContactList> {
        let path = replace_placeholder(LISTS_ITEM_PATH, &id.to_string())?;
        self.client
            .get(&path, ModelType::of::<ContactList>()?, &fields_query(fields))
    }

    pub fn create(&self, request: &CreateContactListRequest) -> Result<ResourceId> {
        self.client.post(
            LISTS_PATH,
            ModelType::of::<ResourceId>()?,
            Some(request),
            &[],
        )
    }

    pub fn update(&self, request: &UpdateContactListRequest) -> Result<()> {
        let id = require(request.id().copied(), "request.id")?;
        let path = replace_placeholder(LISTS_ITEM_PATH, &id.to_string())?;
        self.client
            .put(&path, ModelType::void(), Some(request), &[])
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let path = replace_placeholder(LISTS_ITEM_PATH, &id.to_string())?;
        self.client.delete(&path, ModelType::void(), &[])
    }

    /// Contacts on a list.
    pub fn get_list_items(&self, request: &GetByIdRequest) -> Result<Page<Contact>> {
        let id = require(request.id().copied(), "request.id")?;
        let path = replace_placeholder(LISTS_ITEMS_PATH, &id.to_string())?;
        let query = to_query_pairs(request)?;
        self.client
            .get(&path, ModelType::page_of::<Contact>()?, &query)
    }

    pub fn add_list_items(&self, request: &AddContactListItemsRequest) -> Result<()> {
        let id = require(request.contact_list_id().copied(), "request.contactListId")?;
        let path = replace_placeholder(LISTS_ITEMS_PATH, &id.to_string())?;
        self.client
            .post(&path, ModelType::void(), Some(request), &[])
    }

    pub fn remove_list_item(&self, list_id: i64, contact_id: i64) -> Result<()> {
        let path = replace_placeholder(LISTS_ITEMS_CONTACT_PATH, &list_id.to_string())?;
        let path = replace_placeholder(&path, &contact_id.to_string())?;
        self.client.delete(&path, ModelType::void(), &[])
    }

    pub fn remove_list_items(&self, list_id: i64, contact_ids: &[i64]) -> Result<()> {
        let path = replace_placeholder(LISTS_ITEMS_PATH, &list_id.to_string())?;
        let mut query = QueryPairs::new();
        add_if_set(
            &mut query,
            "contactId",
            Some(contact_ids).filter(|ids| !ids.is_empty()),
        );
        self.client.delete(&path, ModelType::void(), &query)
    }
}
