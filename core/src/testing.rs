//! Test doubles shared by the unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::client::CallfireClient;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{HttpRequest, HttpResponse, Transport};

pub(crate) fn test_config() -> ClientConfig {
    ClientConfig::new("login", "password").with_base_url("https://api.test/v2")
}

pub(crate) fn test_client(transport: &MockTransport) -> CallfireClient {
    CallfireClient::with_transport(test_config(), transport.clone())
}

#[derive(Debug, Default)]
struct State {
    responses: VecDeque<HttpResponse>,
    requests: Vec<HttpRequest>,
}

/// Records every request and replays queued responses. Replies `200` with an
/// empty body once the queue runs dry.
#[derive(Debug, Clone, Default)]
pub(crate) struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    pub(crate) fn respond(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let transport = Self::default();
        transport.push(status, body);
        transport
    }

    pub(crate) fn push(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.state
            .lock()
            .unwrap()
            .responses
            .push_back(HttpResponse::new(status, body));
    }

    pub(crate) fn calls(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.state
            .lock()
            .unwrap()
            .requests
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        Ok(state
            .responses
            .pop_front()
            .unwrap_or_else(|| HttpResponse::new(200, Vec::new())))
    }
}

/// Fails every exchange as if the connection was refused.
#[derive(Debug)]
pub(crate) struct FailingTransport;

impl Transport for FailingTransport {
    fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ClientError> {
        Err(ClientError::transport(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}
