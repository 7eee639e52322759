//! Client directory service

use std::sync::Arc;

use shoptrack_domain::{
    ClientDirectory, ClientRecord, ClientUpdate, NewClient, Result, ShopTrackError,
};
use tracing::debug;

use super::ports::ClientsGateway;

pub struct ClientService {
    gateway: Arc<dyn ClientsGateway>,
}

impl ClientService {
    pub fn new(gateway: Arc<dyn ClientsGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> Result<ClientDirectory> {
        self.gateway.list_clients().await
    }

    pub async fn create(&self, client: NewClient) -> Result<ClientRecord> {
        if client.client_key.is_empty() {
            return Err(ShopTrackError::Validation(
                "a client needs a non-empty client_key".to_string(),
            ));
        }
        if client.name.is_empty() {
            return Err(ShopTrackError::Validation(
                "a client needs a non-empty name".to_string(),
            ));
        }
        debug!(client_key = %client.client_key, "creating client");
        self.gateway.create_client(&client).await
    }

    pub async fn update(&self, client_key: &str, update: ClientUpdate) -> Result<ClientRecord> {
        if client_key.is_empty() {
            return Err(ShopTrackError::Validation(
                "client_key must not be empty".to_string(),
            ));
        }
        debug!(client_key, "updating client");
        self.gateway.update_client(client_key, &update).await
    }
}
