//! Tracker API gateway and response decoding

pub mod client;
pub mod decode;

pub use client::ApiGateway;
