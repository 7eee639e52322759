//! Error types used throughout the client

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Resource kinds the response decoder can be asked to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Tickets,
    Clients,
    Hardware,
}

impl Resource {
    /// Wire-level name of the resource, as used in endpoint paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tickets => "tickets",
            Self::Clients => "clients",
            Self::Hardware => "hardware",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for ShopTrack operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ShopTrackError {
    /// Connection-level failure (refused, reset, timed out). Surfaced
    /// verbatim to the caller and never retried internally.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status. `detail` is the parsed
    /// `{"detail": ...}` body when the server sent one, otherwise a generic
    /// message synthesized from the status code.
    #[error("server rejected request (HTTP {status}): {detail}")]
    Http { status: u16, detail: String },

    /// No shape interpreter recognized the payload for this resource.
    /// Fatal for the request; a partial result is never exposed.
    #[error("unrecognized {resource} payload shape")]
    Decode { resource: Resource },

    /// A caller-side precondition failed before any request was sent.
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for ShopTrack operations
pub type Result<T> = std::result::Result<T, ShopTrackError>;
