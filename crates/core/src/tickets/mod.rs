//! Ticket operations: listing, creation, partial updates, quick actions

pub mod ports;
pub mod service;

pub use service::TicketService;
