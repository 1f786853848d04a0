use axum::http::{self, Request, StatusCode};
use base64::{engine::general_purpose::STANDARD, Engine};
use http_body_util::BodyExt;
use mock_server::{app, Dnc, ErrorMessage, IvrBroadcast, Page, ResourceId, Webhook, LOGIN, PASSWORD};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn auth() -> String {
    format!("Basic {}", STANDARD.encode(format!("{LOGIN}:{PASSWORD}")))
}

fn request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::AUTHORIZATION, auth())
        .body(String::new())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::AUTHORIZATION, auth())
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- auth ---

#[tokio::test]
async fn missing_credentials_return_401() {
    let resp = app()
        .oneshot(Request::builder().uri("/v2/webhooks").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let error: ErrorMessage = body_json(resp).await;
    assert_eq!(error.http_status_code, 401);
}

#[tokio::test]
async fn wrong_password_returns_401() {
    let bad = format!("Basic {}", STANDARD.encode("login:nope"));
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/v2/webhooks")
                .header(http::header::AUTHORIZATION, bad)
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// --- webhooks ---

#[tokio::test]
async fn find_webhooks_empty_page() {
    let resp = app().oneshot(request("GET", "/v2/webhooks")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: Page<Webhook> = body_json(resp).await;
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 0);
    assert_eq!(page.offset, 0);
}

#[tokio::test]
async fn create_webhook_returns_id() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/v2/webhooks",
            r#"{"name":"hook","resource":"CallBroadcast","events":["start"],"callback":"https://cb"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let id: ResourceId = body_json(resp).await;
    assert_eq!(id.id, 1);
}

#[tokio::test]
async fn create_webhook_without_callback_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/v2/webhooks", r#"{"name":"hook"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorMessage = body_json(resp).await;
    assert_eq!(error.message, "callback is required");
}

#[tokio::test]
async fn webhook_lifecycle() {
    let app = app();

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v2/webhooks",
            r#"{"name":"hook","callback":"https://cb"}"#,
        ))
        .await
        .unwrap();
    let id: ResourceId = body_json(resp).await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/v2/webhooks/{}", id.id),
            r#"{"id":1,"enabled":false}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    let resp = app
        .clone()
        .oneshot(request("GET", &format!("/v2/webhooks/{}", id.id)))
        .await
        .unwrap();
    let webhook: Webhook = body_json(resp).await;
    assert_eq!(webhook.name.as_deref(), Some("hook"));
    assert_eq!(webhook.enabled, Some(false));
    assert!(webhook.created_at.is_some());
    assert!(webhook.updated_at.is_some());

    let resp = app
        .clone()
        .oneshot(request("DELETE", &format!("/v2/webhooks/{}", id.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .oneshot(request("GET", &format!("/v2/webhooks/{}", id.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorMessage = body_json(resp).await;
    assert_eq!(error.message, "webhook 1 not found");
}

#[tokio::test]
async fn find_webhooks_paginates() {
    let app = app();
    for name in ["a", "b", "c"] {
        app.clone()
            .oneshot(json_request(
                "POST",
                "/v2/webhooks",
                &format!(r#"{{"name":"{name}","callback":"https://cb"}}"#),
            ))
            .await
            .unwrap();
    }

    let resp = app
        .oneshot(request("GET", "/v2/webhooks?limit=2&offset=1"))
        .await
        .unwrap();
    let page: Page<Webhook> = body_json(resp).await;
    assert_eq!(page.total_count, 3);
    let names: Vec<_> = page.items.iter().filter_map(|w| w.name.as_deref()).collect();
    assert_eq!(names, ["b", "c"]);
}

#[tokio::test]
async fn webhook_id_must_be_numeric() {
    let resp = app()
        .oneshot(request("GET", "/v2/webhooks/not-a-number"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- dnc ---

#[tokio::test]
async fn dnc_lifecycle() {
    let app = app();

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v2/contacts/dncs",
            r#"{"numbers":["12135551100","12135551101"],"text":false,"source":"import"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .clone()
        .oneshot(request("GET", "/v2/contacts/dncs/12135551100"))
        .await
        .unwrap();
    let dnc: Dnc = body_json(resp).await;
    assert!(dnc.call);
    assert!(!dnc.text);
    assert_eq!(dnc.source.as_deref(), Some("import"));

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/v2/contacts/dncs/12135551100",
            r#"{"number":"12135551100","text":true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .clone()
        .oneshot(request("DELETE", "/v2/contacts/dncs/12135551101"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .oneshot(request("GET", "/v2/contacts/dncs"))
        .await
        .unwrap();
    let page: Page<Dnc> = body_json(resp).await;
    assert_eq!(page.total_count, 1);
    assert!(page.items[0].text);
}

#[tokio::test]
async fn create_dncs_requires_numbers() {
    let resp = app()
        .oneshot(json_request("POST", "/v2/contacts/dncs", r#"{"numbers":[]}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- ivr broadcasts ---

#[tokio::test]
async fn ivr_created_with_start_is_running() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v2/campaigns/ivrs?start=true",
            r#"{"name":"ivr","dialplanXml":"<dialplan/>"}"#,
        ))
        .await
        .unwrap();
    let id: ResourceId = body_json(resp).await;

    let resp = app
        .oneshot(request("GET", &format!("/v2/campaigns/ivrs/{}", id.id)))
        .await
        .unwrap();
    let ivr: IvrBroadcast = body_json(resp).await;
    assert_eq!(ivr.status.as_deref(), Some("RUNNING"));
}

#[tokio::test]
async fn ivr_transitions() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v2/campaigns/ivrs",
            r#"{"name":"ivr","dialplanXml":"<dialplan/>"}"#,
        ))
        .await
        .unwrap();
    let id: ResourceId = body_json(resp).await;

    for action in ["start", "stop", "archive"] {
        let resp = app
            .clone()
            .oneshot(request("POST", &format!("/v2/campaigns/ivrs/{}/{action}", id.id)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT, "{action}");
    }

    let resp = app
        .clone()
        .oneshot(request("POST", &format!("/v2/campaigns/ivrs/{}/start", id.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .oneshot(request("POST", &format!("/v2/campaigns/ivrs/{}/pause", id.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ivr_requires_dialplan() {
    let resp = app()
        .oneshot(json_request("POST", "/v2/campaigns/ivrs", r#"{"name":"ivr"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
