//! Port interface for ticket operations
//!
//! This trait defines the boundary between ticket orchestration and the
//! infrastructure implementation that speaks HTTP.

use async_trait::async_trait;
use shoptrack_domain::{NewTicket, Result, Ticket, TicketPatch};

/// Trait for the remote ticket endpoints.
#[async_trait]
pub trait TicketsGateway: Send + Sync {
    /// Fetch the recent tickets listing.
    async fn list_tickets(&self) -> Result<Vec<Ticket>>;

    /// Fetch open tickets, optionally filtered to one client.
    async fn list_active_tickets(&self, client_key: Option<&str>) -> Result<Vec<Ticket>>;

    /// Create a ticket and return the server's canonical object.
    async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket>;

    /// Apply a partial update and return the refreshed canonical object.
    async fn update_ticket(&self, id: i64, patch: &TicketPatch) -> Result<Ticket>;

    /// Delete a ticket. Success is determined solely by HTTP status.
    async fn delete_ticket(&self, id: i64) -> Result<()>;
}
