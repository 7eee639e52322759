//! Client records and the decoded clients directory

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single client, canonical form.
///
/// `attributes` is an open string→string mapping: the server can add
/// business fields without a schema change, so nothing here is fixed
/// beyond the identity and display name. Some wire shapes duplicate
/// "name" inside the attributes; the decoder reconciles that into the
/// top-level `name` when no explicit name field exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Unique stable identity.
    pub client_key: String,
    /// Display label; case-insensitive sort key for listings.
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl ClientRecord {
    /// Synthesize a record from a bare attribute mapping, as produced by
    /// the keyed wire shapes that carry no explicit name field.
    pub fn from_attributes(client_key: impl Into<String>, attributes: BTreeMap<String, String>) -> Self {
        let client_key = client_key.into();
        let name = attributes.get("name").cloned().unwrap_or_else(|| client_key.clone());
        Self { client_key, name, attributes }
    }
}

/// Result of decoding a clients listing: the canonical, name-sorted
/// records plus the informational (unsorted) attribute key list some wire
/// shapes carry alongside.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientDirectory {
    pub records: Vec<ClientRecord>,
    pub attribute_keys: Vec<String>,
}

/// Creation payload for `POST /api/v1/clients`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub client_key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

/// Partial update for `PATCH /api/v1/clients/{client_key}`. Absent fields
/// are left unchanged by the server.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn synthesized_record_takes_name_attribute() {
        let record = ClientRecord::from_attributes("acme", attrs(&[("name", "Acme Corp"), ("tier", "gold")]));
        assert_eq!(record.name, "Acme Corp");
        // The mapping is kept as-is, duplicate name included.
        assert_eq!(record.attributes.get("name").map(String::as_str), Some("Acme Corp"));
    }

    #[test]
    fn synthesized_record_falls_back_to_key() {
        let record = ClientRecord::from_attributes("acme", attrs(&[("tier", "gold")]));
        assert_eq!(record.name, "acme");
    }

    #[test]
    fn missing_attributes_decode_to_empty_map() {
        let record: ClientRecord =
            serde_json::from_str(r#"{"client_key":"acme","name":"Acme"}"#).unwrap();
        assert!(record.attributes.is_empty());
    }
}
