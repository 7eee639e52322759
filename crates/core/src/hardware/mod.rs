//! Hardware inventory operations

pub mod ports;
pub mod service;

pub use service::HardwareService;
