//! Shared REST dispatcher.
//!
//! # Design
//! `RestApiClient` owns the base URL, the auth header and one `Transport`.
//! Each call is split into `build_request`, one `Transport::execute`, and
//! `parse_response`, so the I/O boundary stays explicit and both halves can
//! be used on their own.
//!
//! There is no retry and no client-side timeout; a timeout, if any, belongs
//! to the transport.

use serde::Serialize;

use crate::api::common::ErrorMessage;
use crate::config::ClientConfig;
use crate::error::{ApiError, ClientError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::model_type::{Descriptor, Shape};

/// Body argument for calls that send none.
pub const NO_BODY: Option<&()> = None;

/// Performs HTTP calls against the configured API endpoint.
#[derive(Debug)]
pub struct RestApiClient {
    base_url: String,
    authorization: String,
    user_agent: String,
    transport: Box<dyn Transport>,
}

impl RestApiClient {
    /// Dispatcher over a `ureq` transport configured from `config`.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new(config.timeout))
    }

    pub fn with_transport(config: &ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authorization: config.credentials.basic_auth_header(),
            user_agent: config.user_agent.clone(),
            transport: Box::new(transport),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get<R>(
        &self,
        path: &str,
        descriptor: Descriptor<R>,
        query: &[(String, String)],
    ) -> Result<R> {
        self.dispatch(HttpMethod::Get, path, descriptor, query, None)
    }

    pub fn post<R, B>(
        &self,
        path: &str,
        descriptor: Descriptor<R>,
        body: Option<&B>,
        query: &[(String, String)],
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
    {
        let body = body.map(encode_body).transpose()?;
        self.dispatch(HttpMethod::Post, path, descriptor, query, body)
    }

    pub fn put<R, B>(
        &self,
        path: &str,
        descriptor: Descriptor<R>,
        body: Option<&B>,
        query: &[(String, String)],
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
    {
        let body = body.map(encode_body).transpose()?;
        self.dispatch(HttpMethod::Put, path, descriptor, query, body)
    }

    pub fn delete<R>(
        &self,
        path: &str,
        descriptor: Descriptor<R>,
        query: &[(String, String)],
    ) -> Result<R> {
        self.dispatch(HttpMethod::Delete, path, descriptor, query, None)
    }

    /// Describe a request against `path` without sending it.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(String, String)],
        body: Option<String>,
    ) -> HttpRequest {
        let mut headers = vec![
            ("Authorization".to_string(), self.authorization.clone()),
            ("User-Agent".to_string(), self.user_agent.clone()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            query: query.to_vec(),
            headers,
            body,
        }
    }

    /// Turn a response into the value described by `descriptor`, or into an
    /// `ApiError` for non-2xx statuses.
    pub fn parse_response<R>(&self, descriptor: Descriptor<R>, response: HttpResponse) -> Result<R> {
        if !response.is_success() {
            return Err(to_api_error(&response).into());
        }
        if response.body.is_empty() && !matches!(descriptor.shape(), Shape::Void | Shape::Stream)
        {
            return Err(ClientError::Deserialization(serde::de::Error::custom(format!(
                "empty response body, expected {} {}",
                descriptor.kind(),
                descriptor.shape()
            )))
            .into());
        }
        Ok(descriptor.decode(&response.body)?)
    }

    fn dispatch<R>(
        &self,
        method: HttpMethod,
        path: &str,
        descriptor: Descriptor<R>,
        query: &[(String, String)],
        body: Option<String>,
    ) -> Result<R> {
        let request = self.build_request(method, path, query, body);
        tracing::debug!(
            %method,
            url = %request.url,
            query = ?request.query,
            kind = %descriptor.kind(),
            shape = %descriptor.shape(),
            "sending request"
        );
        let response = self.transport.execute(request).inspect_err(|e| {
            tracing::debug!(%method, path, error = %e, "transport failure");
        })?;
        tracing::debug!(%method, path, status = response.status, "received response");
        self.parse_response(descriptor, response).inspect_err(|e| {
            if let Some(api) = e.as_api() {
                tracing::warn!(
                    %method,
                    path,
                    status = api.status(),
                    message = api.message(),
                    "api error"
                );
            }
        })
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> std::result::Result<String, ClientError> {
    serde_json::to_string(body).map_err(ClientError::Serialization)
}

/// Best-effort parse of the error payload; the raw body becomes the message
/// when it is not a JSON error envelope.
fn to_api_error(response: &HttpResponse) -> ApiError {
    let mut message = serde_json::from_slice::<ErrorMessage>(&response.body)
        .ok()
        .filter(|m| m.message.is_some() || m.code.is_some())
        .unwrap_or_else(|| ErrorMessage {
            message: Some(response.text()).filter(|t| !t.is_empty()),
            ..Default::default()
        });
    message.http_status_code.get_or_insert(response.status);
    ApiError::new(response.status, message)
}
