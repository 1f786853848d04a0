//! Registry of response shapes per resource kind.
//!
//! # Design
//! Every model type names its `ResourceKind` through the [Model] trait. A
//! façade asks [ModelType] for a [Descriptor] describing the response it
//! expects: a single object, a bare list, a page or a list holder. The
//! descriptor is typed, so the decode target is fixed at compile time, and it
//! is only handed out for `(kind, shape)` pairs present in the static tables
//! below. Asking for anything else fails immediately with
//! `ClientError::UnregisteredType`.
//!
//! Adding a kind means adding it to every table whose shape it supports.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::api::common::{ListHolder, Page};
use crate::error::ClientError;

/// Tag for every entity the API returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Void,
    String,
    Boolean,
    Stream,
    ResourceId,
    ResourceIds,
    ErrorMessage,
    Account,
    ApiCredentials,
    BillingPlanUsage,
    CreditsUsage,
    CallerId,
    NumberOrder,
    Agent,
    AgentGroup,
    AgentSession,
    Batch,
    CallBroadcast,
    CallBroadcastStats,
    TextBroadcast,
    TextBroadcastStats,
    IvrBroadcast,
    CampaignSound,
    TextAutoReply,
    CccCampaign,
    Call,
    Text,
    CallRecording,
    Media,
    Contact,
    ContactHistory,
    ContactList,
    DoNotContact,
    UniversalDnc,
    Keyword,
    KeywordLease,
    Number,
    NumberLease,
    NumberConfig,
    Region,
    Webhook,
    WebhookResource,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// How a response body is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// No body is expected; whatever the server sends is ignored.
    Void,
    /// One JSON value.
    Single,
    /// A bare JSON array.
    List,
    /// `{"items": [...], "limit": n, "offset": n, "totalCount": n}`
    Page,
    /// `{"items": [...]}`
    ListHolder,
    /// Raw bytes, e.g. an mp3 recording.
    Stream,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Void => "void",
            Shape::Single => "single",
            Shape::List => "list",
            Shape::Page => "page",
            Shape::ListHolder => "list holder",
            Shape::Stream => "stream",
        })
    }
}

const SINGLE_TYPES: &[ResourceKind] = &[
    ResourceKind::Void,
    ResourceKind::String,
    ResourceKind::Boolean,
    ResourceKind::Stream,
    ResourceKind::ResourceId,
    ResourceKind::ResourceIds,
    ResourceKind::ErrorMessage,
    ResourceKind::Account,
    ResourceKind::ApiCredentials,
    ResourceKind::BillingPlanUsage,
    ResourceKind::CreditsUsage,
    ResourceKind::NumberOrder,
    ResourceKind::Agent,
    ResourceKind::AgentGroup,
    ResourceKind::AgentSession,
    ResourceKind::Batch,
    ResourceKind::CallBroadcast,
    ResourceKind::CallBroadcastStats,
    ResourceKind::TextBroadcast,
    ResourceKind::TextBroadcastStats,
    ResourceKind::IvrBroadcast,
    ResourceKind::CampaignSound,
    ResourceKind::TextAutoReply,
    ResourceKind::CccCampaign,
    ResourceKind::Call,
    ResourceKind::Text,
    ResourceKind::CallRecording,
    ResourceKind::Media,
    ResourceKind::Contact,
    ResourceKind::ContactHistory,
    ResourceKind::ContactList,
    ResourceKind::DoNotContact,
    ResourceKind::UniversalDnc,
    ResourceKind::KeywordLease,
    ResourceKind::NumberLease,
    ResourceKind::NumberConfig,
    ResourceKind::Webhook,
    ResourceKind::WebhookResource,
];

const LIST_TYPES: &[ResourceKind] = &[ResourceKind::AgentGroup, ResourceKind::Agent];

const PAGE_TYPES: &[ResourceKind] = &[
    ResourceKind::ApiCredentials,
    ResourceKind::AgentGroup,
    ResourceKind::Agent,
    ResourceKind::AgentSession,
    ResourceKind::CampaignSound,
    ResourceKind::TextAutoReply,
    ResourceKind::CccCampaign,
    ResourceKind::CallBroadcast,
    ResourceKind::TextBroadcast,
    ResourceKind::IvrBroadcast,
    ResourceKind::Batch,
    ResourceKind::Call,
    ResourceKind::Text,
    ResourceKind::ContactList,
    ResourceKind::Contact,
    ResourceKind::DoNotContact,
    ResourceKind::Region,
    ResourceKind::KeywordLease,
    ResourceKind::NumberLease,
    ResourceKind::NumberConfig,
    ResourceKind::Webhook,
    ResourceKind::Media,
];

const LIST_HOLDER_TYPES: &[ResourceKind] = &[
    ResourceKind::ResourceId,
    ResourceKind::CallerId,
    ResourceKind::Call,
    ResourceKind::Text,
    ResourceKind::UniversalDnc,
    ResourceKind::Keyword,
    ResourceKind::Number,
    ResourceKind::WebhookResource,
    ResourceKind::CallRecording,
];

fn registered(shape: Shape) -> &'static [ResourceKind] {
    match shape {
        Shape::Void => &[ResourceKind::Void],
        Shape::Stream => &[ResourceKind::Stream],
        Shape::Single => SINGLE_TYPES,
        Shape::List => LIST_TYPES,
        Shape::Page => PAGE_TYPES,
        Shape::ListHolder => LIST_HOLDER_TYPES,
    }
}

/// A type that can be decoded from an API response.
pub trait Model: DeserializeOwned {
    const KIND: ResourceKind;
}

impl Model for String {
    const KIND: ResourceKind = ResourceKind::String;
}

impl Model for bool {
    const KIND: ResourceKind = ResourceKind::Boolean;
}

/// Untyped `(kind, shape)` pair returned by [ModelType::resolve].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    pub kind: ResourceKind,
    pub shape: Shape,
}

/// Describes the expected response and how to decode it into `R`.
pub struct Descriptor<R> {
    ty: TypeDescriptor,
    decode: fn(&[u8]) -> serde_json::Result<R>,
    _marker: PhantomData<fn() -> R>,
}

impl<R> Descriptor<R> {
    fn new(ty: TypeDescriptor, decode: fn(&[u8]) -> serde_json::Result<R>) -> Self {
        Self {
            ty,
            decode,
            _marker: PhantomData,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.ty.kind
    }

    pub fn shape(&self) -> Shape {
        self.ty.shape
    }

    pub fn type_descriptor(&self) -> TypeDescriptor {
        self.ty
    }

    /// Decode a successful response body.
    pub fn decode(&self, body: &[u8]) -> Result<R, ClientError> {
        (self.decode)(body).map_err(ClientError::Deserialization)
    }
}

impl<R> Clone for Descriptor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Descriptor<R> {}

impl<R> fmt::Debug for Descriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("kind", &self.ty.kind)
            .field("shape", &self.ty.shape)
            .finish()
    }
}

fn decode_json<T: DeserializeOwned>(body: &[u8]) -> serde_json::Result<T> {
    serde_json::from_slice(body)
}

fn decode_void(_: &[u8]) -> serde_json::Result<()> {
    Ok(())
}

fn decode_stream(body: &[u8]) -> serde_json::Result<Vec<u8>> {
    Ok(body.to_vec())
}

/// Entry point for response descriptors.
pub struct ModelType;

impl ModelType {
    /// Look up the registration for `(kind, shape)`.
    pub fn resolve(kind: ResourceKind, shape: Shape) -> Result<TypeDescriptor, ClientError> {
        if registered(shape).contains(&kind) {
            Ok(TypeDescriptor { kind, shape })
        } else {
            Err(ClientError::UnregisteredType { kind, shape })
        }
    }

    pub fn void() -> Descriptor<()> {
        Descriptor::new(
            TypeDescriptor {
                kind: ResourceKind::Void,
                shape: Shape::Void,
            },
            decode_void,
        )
    }

    pub fn stream() -> Descriptor<Vec<u8>> {
        Descriptor::new(
            TypeDescriptor {
                kind: ResourceKind::Stream,
                shape: Shape::Stream,
            },
            decode_stream,
        )
    }

    pub fn of<T: Model>() -> Result<Descriptor<T>, ClientError> {
        let ty = Self::resolve(T::KIND, Shape::Single)?;
        Ok(Descriptor::new(ty, decode_json::<T>))
    }

    pub fn list_of<T: Model>() -> Result<Descriptor<Vec<T>>, ClientError> {
        let ty = Self::resolve(T::KIND, Shape::List)?;
        Ok(Descriptor::new(ty, decode_json::<Vec<T>>))
    }

    pub fn page_of<T: Model>() -> Result<Descriptor<Page<T>>, ClientError> {
        let ty = Self::resolve(T::KIND, Shape::Page)?;
        Ok(Descriptor::new(ty, decode_json::<Page<T>>))
    }

    pub fn list_holder_of<T: Model>() -> Result<Descriptor<ListHolder<T>>, ClientError> {
        let ty = Self::resolve(T::KIND, Shape::ListHolder)?;
        Ok(Descriptor::new(ty, decode_json::<ListHolder<T>>))
    }
}
