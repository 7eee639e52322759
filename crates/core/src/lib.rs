//! # ShopTrack Core
//!
//! Pure orchestration layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the tracker API
//! - Services that validate caller intent before it reaches the wire
//!
//! ## Architecture Principles
//! - Only depends on `shoptrack-domain`
//! - No HTTP or platform code
//! - All external I/O via traits, implemented in `shoptrack-infra`

pub mod clients;
pub mod hardware;
pub mod tickets;

// Re-export specific items to avoid ambiguity
pub use clients::ports::ClientsGateway;
pub use clients::ClientService;
pub use hardware::ports::HardwareGateway;
pub use hardware::HardwareService;
pub use tickets::ports::TicketsGateway;
pub use tickets::TicketService;
