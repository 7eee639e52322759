//! Ticket entities: billable time, hardware, and flat-rate work entries

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utils::serde::{int_bool, iso_instant, iso_instant_opt};

/// Classification tag on a ticket. The set is open: the server may grow
/// new variants without a client release, so unknown tags are carried
/// through verbatim instead of failing the decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryType {
    Time,
    Hardware,
    DeploymentFlatRate,
    /// A tag this client version does not know. Preserved as-is so a
    /// re-encode does not corrupt the ticket.
    Other(String),
}

impl EntryType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Time => "time",
            Self::Hardware => "hardware",
            Self::DeploymentFlatRate => "deployment_flat_rate",
            Self::Other(tag) => tag,
        }
    }

    /// Whether this client can originate tickets of this type. Unknown
    /// tags decode fine but are rejected on create.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    pub fn from_wire(tag: &str) -> Self {
        match tag {
            "time" => Self::Time,
            "hardware" => Self::Hardware,
            "deployment_flat_rate" => Self::DeploymentFlatRate,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EntryType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntryType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}

/// File attached to a ticket on the server side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketAttachment {
    pub id: i64,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    pub uploaded_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A billable work entry. Field names mirror the wire contract verbatim.
///
/// A ticket is "open" iff `end_iso` is absent. `end_iso >= start_iso` is
/// advisory; the server, not this client, enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Server-assigned, immutable.
    pub id: i64,
    /// Denormalized client display name, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    pub client_key: String,
    pub entry_type: EntryType,
    #[serde(with = "iso_instant")]
    pub start_iso: DateTime<Utc>,
    #[serde(default, with = "iso_instant_opt", skip_serializing_if = "Option::is_none")]
    pub end_iso: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, with = "int_bool")]
    pub completed: bool,
    #[serde(default, with = "int_bool")]
    pub sent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    /// Decimal-formatted string; never parsed to floating point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoiced_total: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_value: Option<String>,
    // Server-computed durations; which of these arrive depends on the
    // deployment version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounded_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounded_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<i64>,
    /// Opaque server string, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    // Populated only when entry_type is `hardware`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_barcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_sales_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_quantity: Option<i64>,
    // Populated only when entry_type is `deployment_flat_rate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_rate_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_rate_quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<TicketAttachment>,
}

impl Ticket {
    /// A ticket is open while the server has recorded no end instant.
    pub fn is_open(&self) -> bool {
        self.end_iso.is_none()
    }

    /// Preferred duration for display: rounded when the server computed
    /// it, otherwise the legacy `minutes` field.
    pub fn display_minutes(&self) -> Option<i64> {
        self.rounded_minutes.or(self.minutes)
    }
}

/// Creation payload for `POST /api/v1/tickets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTicket {
    pub client_key: String,
    pub entry_type: EntryType,
    #[serde(with = "iso_instant")]
    pub start_iso: DateTime<Utc>,
    #[serde(default, with = "iso_instant_opt", skip_serializing_if = "Option::is_none")]
    pub end_iso: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(with = "int_bool")]
    pub sent: bool,
    #[serde(with = "int_bool")]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_barcode: Option<String>,
}

impl NewTicket {
    /// Quick-start payload: an open ticket beginning at the current
    /// instant, unsent and incomplete, with no billing or hardware data.
    pub fn starting_now(client_key: impl Into<String>, entry_type: EntryType) -> Self {
        Self {
            client_key: client_key.into(),
            entry_type,
            start_iso: Utc::now(),
            end_iso: None,
            note: None,
            invoice_number: None,
            sent: false,
            completed: false,
            hardware_id: None,
            hardware_barcode: None,
        }
    }
}
