//! Typed, synchronous client for the CallFire v2 REST API.
//!
//! # Overview
//! Covers campaigns (call, text and IVR broadcasts, batches, sounds,
//! auto-replies, agent groups and call center campaigns), calls and texts,
//! contacts and do-not-contact lists, webhooks, numbers, keywords, the
//! account and orders.
//!
//! ```no_run
//! use callfire_core::CallfireClient;
//! use callfire_core::api::webhooks::FindWebhooksRequest;
//!
//! let client = CallfireClient::new("login", "password");
//! let request = FindWebhooksRequest::builder().limit(10).build();
//! let page = client.webhooks_api().find(&request)?;
//! # Ok::<(), callfire_core::Error>(())
//! ```
//!
//! # Design
//! - Façades (`client.*_api()`) validate required identifiers, then hand one
//!   call to the shared `RestApiClient`.
//! - Request objects are built with builders that only record fields the
//!   caller set; unset fields never reach the wire.
//! - Response shapes come from a closed registry (`model_type`), so a
//!   façade asking for an unsupported `(kind, shape)` fails before any I/O.
//! - All network access goes through the `Transport` trait; the default is
//!   backed by `ureq`.
//! - Model structs are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

#[macro_use]
mod macros;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod model_type;
pub mod path;
pub mod query;
pub mod rest;

#[cfg(test)]
mod testing;

pub use api::common::{ErrorMessage, ListHolder, Page, ResourceId, ResourceIds};
pub use client::CallfireClient;
pub use config::{ClientConfig, Credentials};
pub use error::{ApiError, ClientError, Error, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use model_type::{Descriptor, Model, ModelType, ResourceKind, Shape};
pub use rest::RestApiClient;
