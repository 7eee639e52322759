//! Port interface for client directory operations

use async_trait::async_trait;
use shoptrack_domain::{ClientDirectory, ClientRecord, ClientUpdate, NewClient, Result};

/// Trait for the remote client endpoints.
#[async_trait]
pub trait ClientsGateway: Send + Sync {
    /// Fetch the full client directory, normalized from whichever wire
    /// shape this deployment emits.
    async fn list_clients(&self) -> Result<ClientDirectory>;

    /// Create a client and return the server's canonical record.
    async fn create_client(&self, client: &NewClient) -> Result<ClientRecord>;

    /// Apply a partial update and return the refreshed record.
    async fn update_client(&self, client_key: &str, update: &ClientUpdate)
        -> Result<ClientRecord>;
}
