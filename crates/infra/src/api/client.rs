//! API gateway: the core port traits implemented over the HTTP transport
//!
//! One gateway instance owns the immutable [`ApiConfig`] (via its
//! transport) and translates port calls into endpoint requests. Decoding
//! goes through the shape-tolerant [`super::decode`] module so every
//! response is either one canonical value or one typed failure.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use shoptrack_core::{ClientsGateway, HardwareGateway, TicketsGateway};
use shoptrack_domain::{
    ApiConfig, ClientDirectory, ClientRecord, ClientUpdate, HardwareItem, HardwarePage,
    HardwarePatch, NewClient, NewHardware, NewTicket, Resource, Result, ShopTrackError,
    StockAdjustment, StockDirection, Ticket, TicketPatch,
};
use tracing::{debug, instrument};

use super::decode;
use crate::http::Transport;

const TICKETS_PATH: &str = "/api/v1/tickets";
const CLIENTS_PATH: &str = "/api/v1/clients";
const HARDWARE_PATH: &str = "/api/v1/hardware";

/// HTTP implementation of the tracker port traits.
#[derive(Clone)]
pub struct ApiGateway {
    transport: Transport,
}

impl ApiGateway {
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self { transport: Transport::new(config)? })
    }

    /// Wrap an existing transport (custom user agent, test doubles).
    pub fn with_transport(transport: Transport) -> Self {
        Self { transport }
    }
}

fn encode_body<T: Serialize>(payload: &T) -> Result<Value> {
    serde_json::to_value(payload).map_err(|err| {
        ShopTrackError::Validation(format!("request body could not be encoded: {err}"))
    })
}

#[async_trait]
impl TicketsGateway for ApiGateway {
    #[instrument(skip(self))]
    async fn list_tickets(&self) -> Result<Vec<Ticket>> {
        let bytes = self.transport.send(Method::GET, TICKETS_PATH, &[], None).await?;
        decode::decode_resource(Resource::Tickets, &bytes)
    }

    #[instrument(skip(self))]
    async fn list_active_tickets(&self, client_key: Option<&str>) -> Result<Vec<Ticket>> {
        let mut query = Vec::new();
        if let Some(key) = client_key {
            query.push(("client_key", key.to_string()));
        }
        let path = format!("{TICKETS_PATH}/active");
        let bytes = self.transport.send(Method::GET, &path, &query, None).await?;
        decode::decode_resource(Resource::Tickets, &bytes)
    }

    #[instrument(skip(self, ticket), fields(client_key = %ticket.client_key))]
    async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket> {
        let body = encode_body(ticket)?;
        let bytes = self.transport.send(Method::POST, TICKETS_PATH, &[], Some(&body)).await?;
        decode::decode_resource(Resource::Tickets, &bytes)
    }

    #[instrument(skip(self, patch))]
    async fn update_ticket(&self, id: i64, patch: &TicketPatch) -> Result<Ticket> {
        let body = Value::Object(patch.to_document());
        debug!(fields = body.as_object().map_or(0, |doc| doc.len()), "sending ticket patch");
        let path = format!("{TICKETS_PATH}/{id}");
        let bytes = self.transport.send(Method::PATCH, &path, &[], Some(&body)).await?;
        decode::decode_resource(Resource::Tickets, &bytes)
    }

    #[instrument(skip(self))]
    async fn delete_ticket(&self, id: i64) -> Result<()> {
        let path = format!("{TICKETS_PATH}/{id}");
        self.transport.send(Method::DELETE, &path, &[], None).await?;
        Ok(())
    }
}

#[async_trait]
impl ClientsGateway for ApiGateway {
    #[instrument(skip(self))]
    async fn list_clients(&self) -> Result<ClientDirectory> {
        let bytes = self.transport.send(Method::GET, CLIENTS_PATH, &[], None).await?;
        decode::decode_clients(&bytes)
    }

    #[instrument(skip(self, client), fields(client_key = %client.client_key))]
    async fn create_client(&self, client: &NewClient) -> Result<ClientRecord> {
        let body = encode_body(client)?;
        let bytes = self.transport.send(Method::POST, CLIENTS_PATH, &[], Some(&body)).await?;
        decode::decode_resource(Resource::Clients, &bytes)
    }

    #[instrument(skip(self, update))]
    async fn update_client(
        &self,
        client_key: &str,
        update: &ClientUpdate,
    ) -> Result<ClientRecord> {
        let body = encode_body(update)?;
        let path = format!("{CLIENTS_PATH}/{client_key}");
        let bytes = self.transport.send(Method::PATCH, &path, &[], Some(&body)).await?;
        decode::decode_resource(Resource::Clients, &bytes)
    }
}

#[async_trait]
impl HardwareGateway for ApiGateway {
    #[instrument(skip(self))]
    async fn list_hardware(&self, limit: u32, offset: u32) -> Result<HardwarePage> {
        let query = [("limit", limit.to_string()), ("offset", offset.to_string())];
        let bytes = self.transport.send(Method::GET, HARDWARE_PATH, &query, None).await?;
        decode::decode_hardware(&bytes)
    }

    #[instrument(skip(self, item), fields(barcode = %item.barcode))]
    async fn create_hardware(&self, item: &NewHardware) -> Result<HardwareItem> {
        let body = encode_body(item)?;
        let bytes = self.transport.send(Method::POST, HARDWARE_PATH, &[], Some(&body)).await?;
        decode::decode_resource(Resource::Hardware, &bytes)
    }

    #[instrument(skip(self, patch))]
    async fn update_hardware(&self, id: i64, patch: &HardwarePatch) -> Result<HardwareItem> {
        let body = encode_body(patch)?;
        let path = format!("{HARDWARE_PATH}/{id}");
        let bytes = self.transport.send(Method::PATCH, &path, &[], Some(&body)).await?;
        decode::decode_resource(Resource::Hardware, &bytes)
    }

    #[instrument(skip(self, adjustment), fields(barcode = %adjustment.barcode))]
    async fn adjust_stock(
        &self,
        direction: StockDirection,
        adjustment: &StockAdjustment,
    ) -> Result<HardwareItem> {
        let body = encode_body(adjustment)?;
        let path = format!("{HARDWARE_PATH}/{}", direction.as_path());
        let bytes = self.transport.send(Method::POST, &path, &[], Some(&body)).await?;
        decode::decode_resource(Resource::Hardware, &bytes)
    }
}
