//! In-memory stand-in for a slice of the CallFire v2 API.
//!
//! Serves webhooks, do-not-contact numbers and IVR broadcasts under `/v2`,
//! behind HTTP basic auth. Errors use the service's JSON error envelope.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub const LOGIN: &str = "login";
pub const PASSWORD: &str = "password";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub resource: Option<String>,
    pub events: Option<Vec<String>>,
    pub callback: Option<String>,
    pub secret: Option<String>,
    pub single_use: Option<bool>,
    pub enabled: Option<bool>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dnc {
    pub number: String,
    pub call: bool,
    pub text: bool,
    pub source: Option<String>,
    pub created: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDncs {
    pub numbers: Vec<String>,
    #[serde(default = "enabled")]
    pub call: bool,
    #[serde(default = "enabled")]
    pub text: bool,
    pub source: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateDnc {
    pub call: Option<bool>,
    pub text: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IvrBroadcast {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub from_number: Option<String>,
    pub dialplan_xml: Option<String>,
    pub recipients: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub limit: usize,
    pub offset: usize,
    pub total_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceId {
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    pub http_status_code: u16,
    pub internal_code: i64,
    pub message: String,
}

#[derive(Deserialize)]
pub struct PageParams {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Deserialize)]
pub struct StartParam {
    pub start: Option<bool>,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    webhooks: BTreeMap<i64, Webhook>,
    dncs: BTreeMap<String, Dnc>,
    ivrs: BTreeMap<i64, IvrBroadcast>,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type Db = Arc<RwLock<Store>>;

/// Error reply in the service's envelope.
#[derive(Debug)]
pub struct Failure(StatusCode, String);

impl Failure {
    fn not_found(what: impl std::fmt::Display) -> Self {
        Self(StatusCode::NOT_FOUND, format!("{what} not found"))
    }

    fn bad_request(message: impl Into<String>) -> Self {
        Self(StatusCode::BAD_REQUEST, message.into())
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let body = ErrorMessage {
            http_status_code: self.0.as_u16(),
            internal_code: 0,
            message: self.1,
        };
        (self.0, Json(body)).into_response()
    }
}

const DEFAULT_LIMIT: usize = 100;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    let api = Router::new()
        .route("/webhooks", get(find_webhooks).post(create_webhook))
        .route(
            "/webhooks/{id}",
            get(get_webhook).put(update_webhook).delete(delete_webhook),
        )
        .route("/contacts/dncs", get(find_dncs).post(create_dncs))
        .route(
            "/contacts/dncs/{number}",
            get(get_dnc).put(update_dnc).delete(delete_dnc),
        )
        .route("/campaigns/ivrs", post(create_ivr))
        .route("/campaigns/ivrs/{id}", get(get_ivr))
        .route("/campaigns/ivrs/{id}/{action}", post(transition_ivr))
        .layer(middleware::from_fn(require_basic_auth))
        .with_state(db);
    Router::new().nest("/v2", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_basic_auth(request: Request, next: Next) -> Response {
    let expected = format!("Basic {}", STANDARD.encode(format!("{LOGIN}:{PASSWORD}")));
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected);
    if !authorized {
        tracing::debug!(uri = %request.uri(), "rejected credentials");
        return Failure(StatusCode::UNAUTHORIZED, "Unauthorized".to_string()).into_response();
    }
    next.run(request).await
}

fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

fn enabled() -> bool {
    true
}

fn paginate<T: Clone>(items: impl Iterator<Item = T>, params: &PageParams) -> Page<T> {
    let all: Vec<T> = items.collect();
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let offset = params.offset.unwrap_or(0);
    Page {
        items: all.iter().skip(offset).take(limit).cloned().collect(),
        limit,
        offset,
        total_count: all.len(),
    }
}

async fn find_webhooks(
    State(db): State<Db>,
    Query(params): Query<PageParams>,
) -> Json<Page<Webhook>> {
    let store = db.read().await;
    Json(paginate(store.webhooks.values().cloned(), &params))
}

async fn create_webhook(
    State(db): State<Db>,
    Json(mut input): Json<Webhook>,
) -> Result<Json<ResourceId>, Failure> {
    if input.callback.as_deref().is_none_or(str::is_empty) {
        return Err(Failure::bad_request("callback is required"));
    }
    let mut store = db.write().await;
    let id = store.next_id();
    input.id = Some(id);
    input.enabled.get_or_insert(true);
    input.created_at = Some(now_millis());
    store.webhooks.insert(id, input);
    tracing::debug!(id, "created webhook");
    Ok(Json(ResourceId { id }))
}

async fn get_webhook(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Webhook>, Failure> {
    let store = db.read().await;
    store
        .webhooks
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| Failure::not_found(format!("webhook {id}")))
}

async fn update_webhook(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<Webhook>,
) -> Result<StatusCode, Failure> {
    let mut store = db.write().await;
    let webhook = store
        .webhooks
        .get_mut(&id)
        .ok_or_else(|| Failure::not_found(format!("webhook {id}")))?;
    if input.name.is_some() {
        webhook.name = input.name;
    }
    if input.events.is_some() {
        webhook.events = input.events;
    }
    if input.callback.is_some() {
        webhook.callback = input.callback;
    }
    if input.enabled.is_some() {
        webhook.enabled = input.enabled;
    }
    webhook.updated_at = Some(now_millis());
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_webhook(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Failure> {
    let mut store = db.write().await;
    store
        .webhooks
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| Failure::not_found(format!("webhook {id}")))
}

async fn find_dncs(State(db): State<Db>, Query(params): Query<PageParams>) -> Json<Page<Dnc>> {
    let store = db.read().await;
    Json(paginate(store.dncs.values().cloned(), &params))
}

async fn create_dncs(
    State(db): State<Db>,
    Json(input): Json<CreateDncs>,
) -> Result<StatusCode, Failure> {
    if input.numbers.is_empty() {
        return Err(Failure::bad_request("numbers cannot be empty"));
    }
    let mut store = db.write().await;
    let created = now_millis();
    for number in input.numbers {
        let dnc = Dnc {
            number: number.clone(),
            call: input.call,
            text: input.text,
            source: input.source.clone(),
            created: Some(created),
        };
        store.dncs.insert(number, dnc);
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn get_dnc(
    State(db): State<Db>,
    Path(number): Path<String>,
) -> Result<Json<Dnc>, Failure> {
    let store = db.read().await;
    store
        .dncs
        .get(&number)
        .cloned()
        .map(Json)
        .ok_or_else(|| Failure::not_found(format!("dnc {number}")))
}

async fn update_dnc(
    State(db): State<Db>,
    Path(number): Path<String>,
    Json(input): Json<UpdateDnc>,
) -> Result<StatusCode, Failure> {
    let mut store = db.write().await;
    let dnc = store
        .dncs
        .get_mut(&number)
        .ok_or_else(|| Failure::not_found(format!("dnc {number}")))?;
    if let Some(call) = input.call {
        dnc.call = call;
    }
    if let Some(text) = input.text {
        dnc.text = text;
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_dnc(
    State(db): State<Db>,
    Path(number): Path<String>,
) -> Result<StatusCode, Failure> {
    let mut store = db.write().await;
    store
        .dncs
        .remove(&number)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| Failure::not_found(format!("dnc {number}")))
}

async fn create_ivr(
    State(db): State<Db>,
    Query(params): Query<StartParam>,
    Json(mut input): Json<IvrBroadcast>,
) -> Result<Json<ResourceId>, Failure> {
    if input.dialplan_xml.as_deref().is_none_or(str::is_empty) {
        return Err(Failure::bad_request("dialplanXml is required"));
    }
    let mut store = db.write().await;
    let id = store.next_id();
    input.id = Some(id);
    let status = if params.start == Some(true) { "RUNNING" } else { "SETUP" };
    input.status = Some(status.to_string());
    store.ivrs.insert(id, input);
    tracing::debug!(id, status, "created ivr broadcast");
    Ok(Json(ResourceId { id }))
}

async fn get_ivr(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<IvrBroadcast>, Failure> {
    let store = db.read().await;
    store
        .ivrs
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| Failure::not_found(format!("broadcast {id}")))
}

async fn transition_ivr(
    State(db): State<Db>,
    Path((id, action)): Path<(i64, String)>,
) -> Result<StatusCode, Failure> {
    let status = match action.as_str() {
        "start" => "RUNNING",
        "stop" => "STOPPED",
        "archive" => "ARCHIVED",
        other => return Err(Failure::not_found(format!("action {other}"))),
    };
    let mut store = db.write().await;
    let broadcast = store
        .ivrs
        .get_mut(&id)
        .ok_or_else(|| Failure::not_found(format!("broadcast {id}")))?;
    if broadcast.status.as_deref() == Some("ARCHIVED") {
        return Err(Failure::bad_request("broadcast is archived"));
    }
    broadcast.status = Some(status.to_string());
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webhook_uses_camel_case() {
        let webhook = Webhook {
            id: Some(1),
            single_use: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&webhook).unwrap();
        assert_eq!(json["singleUse"], true);
        assert!(json["createdAt"].is_null());
    }

    #[test]
    fn create_dncs_defaults_to_both_channels() {
        let input: CreateDncs = serde_json::from_str(r#"{"numbers":["1"]}"#).unwrap();
        assert!(input.call);
        assert!(input.text);
        assert!(input.source.is_none());
    }

    #[test]
    fn paginate_reports_total_count() {
        let params = PageParams {
            limit: Some(2),
            offset: Some(1),
        };
        let page = paginate(1..=5, &params);
        assert_eq!(page.items, vec![2, 3]);
        assert_eq!(page.total_count, 5);
        assert_eq!(page.limit, 2);
    }

    #[test]
    fn failure_renders_error_envelope() {
        let response = Failure::not_found("webhook 9").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_ids_are_sequential() {
        let mut store = Store::default();
        assert_eq!(store.next_id(), 1);
        assert_eq!(store.next_id(), 2);
    }
}
