//! # ShopTrack Domain
//!
//! Canonical entity types and field-level normalization for the ShopTrack
//! tracker API.
//!
//! This crate contains:
//! - Domain data types (Ticket, ClientRecord, HardwareItem)
//! - Wire normalization primitives (0/1 booleans, lenient ISO-8601 instants)
//! - Partial-update documents with explicit omit/null/set semantics
//! - Domain error types and Result definitions
//! - The immutable API configuration value
//!
//! ## Architecture
//! - No dependencies on other ShopTrack crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod patch;
pub mod timestamp;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::ApiConfig;
pub use errors::{Resource, Result, ShopTrackError};
pub use patch::{PatchField, TicketPatch};
pub use types::*;
pub use utils::serde::{int_bool, iso_instant, iso_instant_opt};
