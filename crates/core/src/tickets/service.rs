//! Ticket service - caller-side validation and quick actions

use std::sync::Arc;

use chrono::Utc;
use shoptrack_domain::{
    EntryType, NewTicket, Result, ShopTrackError, Ticket, TicketPatch,
};
use tracing::debug;

use super::ports::TicketsGateway;

/// Orchestrates ticket operations over a [`TicketsGateway`].
///
/// Validation here covers only caller-side preconditions; the server
/// stays authoritative for everything else (an unknown client key, for
/// example, comes back as an HTTP error rather than being pre-checked).
pub struct TicketService {
    gateway: Arc<dyn TicketsGateway>,
}

impl TicketService {
    pub fn new(gateway: Arc<dyn TicketsGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> Result<Vec<Ticket>> {
        self.gateway.list_tickets().await
    }

    /// Open tickets, optionally restricted to one client. An empty filter
    /// string means "no filter".
    pub async fn list_active(&self, client_key: Option<&str>) -> Result<Vec<Ticket>> {
        let filter = client_key.filter(|key| !key.is_empty());
        self.gateway.list_active_tickets(filter).await
    }

    pub async fn create(&self, ticket: NewTicket) -> Result<Ticket> {
        if ticket.client_key.is_empty() {
            return Err(ShopTrackError::Validation(
                "a ticket needs a non-empty client_key".to_string(),
            ));
        }
        if !ticket.entry_type.is_supported() {
            return Err(ShopTrackError::Validation(format!(
                "cannot create a ticket with unsupported entry type {:?}",
                ticket.entry_type.as_str()
            )));
        }
        debug!(client_key = %ticket.client_key, entry_type = %ticket.entry_type, "creating ticket");
        self.gateway.create_ticket(&ticket).await
    }

    pub async fn update(&self, id: i64, patch: TicketPatch) -> Result<Ticket> {
        patch.validate()?;
        debug!(id, "updating ticket");
        self.gateway.update_ticket(id, &patch).await
    }

    /// Pure request/response: no local state is touched, so a failed
    /// delete requires no rollback.
    pub async fn delete(&self, id: i64) -> Result<()> {
        debug!(id, "deleting ticket");
        self.gateway.delete_ticket(id).await
    }

    /// Quick action: toggle the completed flag on one ticket.
    pub async fn mark_completed(&self, id: i64, completed: bool) -> Result<Ticket> {
        self.update(id, TicketPatch::mark_completed(completed)).await
    }

    /// Quick action: toggle the sent flag, optionally recording the
    /// invoice number in the same update.
    pub async fn mark_sent(
        &self,
        id: i64,
        sent: bool,
        invoice_number: Option<String>,
    ) -> Result<Ticket> {
        self.update(id, TicketPatch::mark_sent(sent, invoice_number)).await
    }

    /// Quick action: close an open ticket at the current instant.
    pub async fn stop_now(&self, id: i64) -> Result<Ticket> {
        self.update(id, TicketPatch::stop_at(Utc::now())).await
    }

    /// Quick action: start an open ticket for a client at the current
    /// instant.
    pub async fn start_new(&self, client_key: &str, entry_type: EntryType) -> Result<Ticket> {
        self.create(NewTicket::starting_now(client_key, entry_type)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use super::*;

    /// Gateway double that records what reaches the wire boundary.
    #[derive(Default)]
    struct RecordingGateway {
        created: Mutex<Vec<NewTicket>>,
        patches: Mutex<Vec<(i64, Value)>>,
        deleted: Mutex<Vec<i64>>,
        active_filters: Mutex<Vec<Option<String>>>,
    }

    fn canned_ticket(id: i64) -> Ticket {
        serde_json::from_value(json!({
            "id": id,
            "client_key": "acme",
            "entry_type": "time",
            "start_iso": "2024-01-01T09:00:00Z"
        }))
        .unwrap()
    }

    #[async_trait]
    impl TicketsGateway for RecordingGateway {
        async fn list_tickets(&self) -> Result<Vec<Ticket>> {
            Ok(vec![canned_ticket(1)])
        }

        async fn list_active_tickets(&self, client_key: Option<&str>) -> Result<Vec<Ticket>> {
            self.active_filters.lock().unwrap().push(client_key.map(String::from));
            Ok(vec![])
        }

        async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket> {
            self.created.lock().unwrap().push(ticket.clone());
            Ok(canned_ticket(10))
        }

        async fn update_ticket(&self, id: i64, patch: &TicketPatch) -> Result<Ticket> {
            self.patches.lock().unwrap().push((id, Value::Object(patch.to_document())));
            Ok(canned_ticket(id))
        }

        async fn delete_ticket(&self, id: i64) -> Result<()> {
            self.deleted.lock().unwrap().push(id);
            Ok(())
        }
    }

    fn service() -> (Arc<RecordingGateway>, TicketService) {
        let gateway = Arc::new(RecordingGateway::default());
        (gateway.clone(), TicketService::new(gateway))
    }

    #[tokio::test]
    async fn create_rejects_empty_client_key() {
        let (gateway, service) = service();
        let result = service.create(NewTicket::starting_now("", EntryType::Time)).await;
        assert!(matches!(result, Err(ShopTrackError::Validation(_))));
        assert!(gateway.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_unsupported_entry_type() {
        let (gateway, service) = service();
        let ticket = NewTicket::starting_now("acme", EntryType::Other("retainer".into()));
        let result = service.create(ticket).await;
        assert!(matches!(result, Err(ShopTrackError::Validation(_))));
        assert!(gateway.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn start_new_builds_an_open_unsent_ticket() {
        let (gateway, service) = service();
        service.start_new("acme", EntryType::Time).await.unwrap();

        let created = gateway.created.lock().unwrap();
        let ticket = &created[0];
        assert_eq!(ticket.client_key, "acme");
        assert!(!ticket.sent);
        assert!(!ticket.completed);
        assert!(ticket.end_iso.is_none());
    }

    #[tokio::test]
    async fn update_stops_invalid_patches_before_the_gateway() {
        let (gateway, service) = service();
        let patch = TicketPatch {
            hardware_quantity: shoptrack_domain::PatchField::Set(0),
            ..TicketPatch::default()
        };
        let result = service.update(7, patch).await;
        assert!(matches!(result, Err(ShopTrackError::Validation(_))));
        assert!(gateway.patches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn quick_actions_touch_only_their_fields() {
        let (gateway, service) = service();
        service.mark_completed(3, true).await.unwrap();
        service.mark_sent(3, true, None).await.unwrap();
        service.stop_now(3).await.unwrap();

        let patches = gateway.patches.lock().unwrap();
        assert_eq!(patches[0].1, json!({"completed": 1}));
        assert_eq!(patches[1].1, json!({"sent": 1}));
        let stop = patches[2].1.as_object().unwrap();
        assert_eq!(stop.len(), 1);
        assert!(stop.contains_key("end_iso"));
    }

    #[tokio::test]
    async fn empty_active_filter_means_no_filter() {
        let (gateway, service) = service();
        service.list_active(Some("")).await.unwrap();
        service.list_active(Some("acme")).await.unwrap();
        service.list_active(None).await.unwrap();

        let filters = gateway.active_filters.lock().unwrap();
        assert_eq!(*filters, vec![None, Some("acme".to_string()), None]);
    }

    #[tokio::test]
    async fn delete_passes_through() {
        let (gateway, service) = service();
        service.delete(42).await.unwrap();
        assert_eq!(*gateway.deleted.lock().unwrap(), vec![42]);
    }
}
