//! HTTP transport layer

pub mod client;

pub use client::{Transport, TransportBuilder};
