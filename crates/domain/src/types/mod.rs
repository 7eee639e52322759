//! Canonical entity types
//!
//! Every type here is an immutable snapshot of one request/response.
//! Mutation happens only by sending a partial update and replacing the
//! held snapshot with the freshly returned canonical object.

pub mod client;
pub mod hardware;
pub mod ticket;

pub use client::{ClientDirectory, ClientRecord, ClientUpdate, NewClient};
pub use hardware::{
    HardwareItem, HardwarePage, HardwarePatch, NewHardware, StockAdjustment, StockDirection,
};
pub use ticket::{EntryType, NewTicket, Ticket, TicketAttachment};
