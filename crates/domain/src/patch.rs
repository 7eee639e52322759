//! Partial-update documents with explicit omit/null/set semantics
//!
//! The tracker's PATCH contract distinguishes "leave this field alone"
//! (key omitted) from "erase this field" (key present, value null). A
//! plain `Option` cannot express both, so every editable field is a
//! three-state [`PatchField`]. Only the rendered JSON document leaves
//! this module; callers never hand-build wire maps.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::errors::{Result, ShopTrackError};
use crate::timestamp::format_instant;

/// Caller intent for one editable field of a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PatchField<T> {
    /// Omit the key entirely; the server leaves the field unchanged.
    #[default]
    Unset,
    /// Send an explicit null; the server erases the field.
    Clear,
    /// Send the given value.
    Set(T),
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

/// `Some` becomes `Set`, `None` becomes `Unset`. Handy for optional
/// inputs that should simply not touch the field when missing.
impl<T> From<Option<T>> for PatchField<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Set(value),
            None => Self::Unset,
        }
    }
}

/// Partial update for a ticket. Every field defaults to [`PatchField::Unset`],
/// so an empty patch renders to an empty document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketPatch {
    pub note: PatchField<String>,
    pub completed: PatchField<bool>,
    pub sent: PatchField<bool>,
    pub invoice_number: PatchField<String>,
    pub invoiced_total: PatchField<String>,
    pub start_iso: PatchField<DateTime<Utc>>,
    pub end_iso: PatchField<DateTime<Utc>>,
    pub hardware_id: PatchField<i64>,
    pub hardware_barcode: PatchField<String>,
    pub hardware_quantity: PatchField<i64>,
    pub flat_rate_amount: PatchField<String>,
    pub flat_rate_quantity: PatchField<i64>,
}

impl TicketPatch {
    /// Quick action: toggle only the `completed` flag.
    pub fn mark_completed(completed: bool) -> Self {
        Self { completed: PatchField::Set(completed), ..Self::default() }
    }

    /// Quick action: toggle the `sent` flag, optionally recording the
    /// invoice number in the same update. A missing invoice leaves the
    /// field untouched rather than erasing it.
    pub fn mark_sent(sent: bool, invoice_number: Option<String>) -> Self {
        Self {
            sent: PatchField::Set(sent),
            invoice_number: invoice_number.into(),
            ..Self::default()
        }
    }

    /// Quick action: close the ticket at the given instant. Touches only
    /// `end_iso`; note, billing, and hardware fields stay untouched.
    pub fn stop_at(instant: DateTime<Utc>) -> Self {
        Self { end_iso: PatchField::Set(instant), ..Self::default() }
    }

    /// Caller-side preconditions checked before any request is sent.
    /// Quantities must be positive integers; whether the server enforces
    /// the same rule is unknown, so the guard stays on this side.
    pub fn validate(&self) -> Result<()> {
        ensure_positive(&self.hardware_quantity, "hardware_quantity")?;
        ensure_positive(&self.flat_rate_quantity, "flat_rate_quantity")?;
        Ok(())
    }

    /// Render the wire document: exactly the non-`Unset` fields, with
    /// `Clear` as explicit null, booleans as 0/1, instants in canonical
    /// fractional-seconds form.
    pub fn to_document(&self) -> Map<String, Value> {
        let mut doc = Map::new();
        write_field(&mut doc, "note", &self.note, |v| Value::String(v.clone()));
        write_field(&mut doc, "completed", &self.completed, |v| Value::from(i64::from(*v)));
        write_field(&mut doc, "sent", &self.sent, |v| Value::from(i64::from(*v)));
        write_field(&mut doc, "invoice_number", &self.invoice_number, |v| {
            Value::String(v.clone())
        });
        write_field(&mut doc, "invoiced_total", &self.invoiced_total, |v| {
            Value::String(v.clone())
        });
        write_field(&mut doc, "start_iso", &self.start_iso, |v| {
            Value::String(format_instant(*v))
        });
        write_field(&mut doc, "end_iso", &self.end_iso, |v| Value::String(format_instant(*v)));
        write_field(&mut doc, "hardware_id", &self.hardware_id, |v| Value::from(*v));
        write_field(&mut doc, "hardware_barcode", &self.hardware_barcode, |v| {
            Value::String(v.clone())
        });
        write_field(&mut doc, "hardware_quantity", &self.hardware_quantity, |v| Value::from(*v));
        write_field(&mut doc, "flat_rate_amount", &self.flat_rate_amount, |v| {
            Value::String(v.clone())
        });
        write_field(&mut doc, "flat_rate_quantity", &self.flat_rate_quantity, |v| {
            Value::from(*v)
        });
        doc
    }

    pub fn is_empty(&self) -> bool {
        self.to_document().is_empty()
    }
}

fn write_field<T>(
    doc: &mut Map<String, Value>,
    key: &str,
    field: &PatchField<T>,
    encode: impl Fn(&T) -> Value,
) {
    match field {
        PatchField::Unset => {}
        PatchField::Clear => {
            doc.insert(key.to_string(), Value::Null);
        }
        PatchField::Set(value) => {
            doc.insert(key.to_string(), encode(value));
        }
    }
}

fn ensure_positive(field: &PatchField<i64>, name: &str) -> Result<()> {
    if let PatchField::Set(quantity) = field {
        if *quantity <= 0 {
            return Err(ShopTrackError::Validation(format!(
                "{name} must be a positive integer"
            )));
        }
    }
    Ok(())
}
