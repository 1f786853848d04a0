//! Request path templating.
//!
//! Resource paths are declared as constants with a single `{}` placeholder,
//! e.g. `/campaigns/ivrs/{}/start`. Each call fills the first remaining
//! placeholder, so a template with two of them is filled left to right by
//! two calls.
//!
//! Values are percent-encoded as one path segment: a phone number or keyword
//! can never add segments, a query string or a fragment to the URL.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::error::ClientError;

pub const PLACEHOLDER: &str = "{}";

/// Characters escaped inside a substituted path segment.
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Replace the first placeholder in `template` with `value`, encoded as a
/// single path segment.
pub fn replace_placeholder(template: &str, value: &str) -> Result<String, ClientError> {
    if !template.contains(PLACEHOLDER) {
        return Err(ClientError::InvalidPathTemplate(template.to_string()));
    }
    let segment = utf8_percent_encode(value, SEGMENT_ENCODE_SET).to_string();
    Ok(template.replacen(PLACEHOLDER, &segment, 1))
}
