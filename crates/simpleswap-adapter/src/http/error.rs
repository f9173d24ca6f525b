/*
[INPUT]:  Upstream error bodies and local failures (transport, decode, post-processing)
[OUTPUT]: Single error shape shared by API and adapter failures
[POS]:    Error handling layer - unified error type for entire crate
[UPDATE]: When the upstream error schema changes or new local contexts are added
*/

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::serde_helpers::null_as_default;

/// Where a [`SimpleSwapError`] was produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorOrigin {
    /// Decoded from an upstream error body.
    #[default]
    Upstream,
    /// Raised by the adapter (transport, decoding, post-processing).
    Local,
}

/// Error returned by every SimpleSwap operation.
///
/// Mirrors the upstream error schema. Errors raised by the adapter itself
/// (transport, decoding, range parsing) use the same shape with
/// `is_api_error == false` and no code or trace id.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[error("{description}")]
#[serde(default)]
pub struct SimpleSwapError {
    #[serde(deserialize_with = "null_as_default")]
    pub is_api_error: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub code: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub error: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub trace_id: String,
    /// Not part of the wire format.
    #[serde(skip)]
    pub origin: ErrorOrigin,
}

impl SimpleSwapError {
    /// Build an adapter-side error, formatted as `"{context}: {cause}"`.
    pub fn local(context: &str, cause: impl Display) -> Self {
        Self {
            description: format!("{context}: {cause}"),
            origin: ErrorOrigin::Local,
            ..Self::default()
        }
    }

    /// Whether upstream flagged this error as originating from its API.
    pub fn is_api_error(&self) -> bool {
        self.is_api_error
    }

    /// True for errors produced by the adapter rather than decoded from a response.
    pub fn is_local(&self) -> bool {
        self.origin == ErrorOrigin::Local
    }
}

/// Result type alias for SimpleSwap operations
pub type Result<T> = std::result::Result<T, SimpleSwapError>;
