//! Shape-tolerant response decoding
//!
//! The tracker returns the same logical resource in several incompatible
//! JSON layouts depending on deployment version. Each resource gets an
//! ordered list of shape interpreters: non-throwing parse attempts that
//! return `Option`, tried in a fixed priority order, first match wins.
//! Only the outermost call produces a `Decode` failure, so the cascade
//! stays auditable and a partially-parsed result is never exposed.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use shoptrack_domain::{
    ClientDirectory, ClientRecord, HardwareItem, HardwarePage, Resource, Result, ShopTrackError,
};
use tracing::debug;

type AttributeMap = BTreeMap<String, String>;
type ClientShape = fn(&Value) -> Option<ClientDirectory>;
type HardwareShape = fn(&Value) -> Option<HardwarePage>;

/// Decode attempts for the clients resource, in priority order:
///
/// 1. `{"clients": {key: {attr: str}}}` — synthesize a record per key
/// 2. `{"clients": {key: record}}` — structured records, keyed
/// 3. `{"clients": [record]}` — structured records, sequence
/// 4. `[record]` — bare sequence
/// 5. `{key: record}` — bare keyed records
/// 6. `{key: {attr: str}}` — bare attribute mappings, synthesized
///
/// A structured record requires `client_key` and `name`; an attribute
/// mapping is any string→string object, which is why the synthesizing
/// shapes outrank the structured ones they overlap with.
const CLIENT_SHAPES: [ClientShape; 6] = [
    wrapped_attribute_map,
    wrapped_record_map,
    wrapped_record_seq,
    bare_record_seq,
    bare_record_map,
    bare_attribute_map,
];

const HARDWARE_SHAPES: [HardwareShape; 2] = [wrapped_item_seq, bare_item_seq];

/// Decode a clients listing from raw response bytes.
///
/// Whatever shape matched, the records come back sorted by display name,
/// case-insensitive and stable: ties keep their original relative order.
pub fn decode_clients(bytes: &[u8]) -> Result<ClientDirectory> {
    let value = parse_json(Resource::Clients, bytes)?;
    let mut directory = CLIENT_SHAPES
        .iter()
        .find_map(|interpret| interpret(&value))
        .ok_or_else(|| decode_failure(Resource::Clients))?;
    directory.records.sort_by_cached_key(|record| record.name.to_lowercase());
    Ok(directory)
}

/// Decode a hardware listing. Server order is preserved; a missing
/// `total` falls back to the item count.
pub fn decode_hardware(bytes: &[u8]) -> Result<HardwarePage> {
    let value = parse_json(Resource::Hardware, bytes)?;
    HARDWARE_SHAPES
        .iter()
        .find_map(|interpret| interpret(&value))
        .ok_or_else(|| decode_failure(Resource::Hardware))
}

/// Typed decode for resources with a single wire shape (tickets, and the
/// single-object responses of create/update calls).
pub fn decode_resource<T: DeserializeOwned>(resource: Resource, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|err| {
        debug!(%resource, error = %err, "typed decode failed");
        ShopTrackError::Decode { resource }
    })
}

fn parse_json(resource: Resource, bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(|err| {
        debug!(%resource, error = %err, "payload is not valid JSON");
        ShopTrackError::Decode { resource }
    })
}

fn decode_failure(resource: Resource) -> ShopTrackError {
    debug!(%resource, "no shape interpreter matched");
    ShopTrackError::Decode { resource }
}

/* -------------------------------------------------------------------------- */
/* Clients shapes */
/* -------------------------------------------------------------------------- */

/// Side list some wrapped shapes carry; informational and left unsorted.
fn attribute_keys(value: &Value) -> Vec<String> {
    value
        .get("attribute_keys")
        .and_then(|keys| Vec::<String>::deserialize(keys).ok())
        .unwrap_or_default()
}

fn synthesize(map: BTreeMap<String, AttributeMap>) -> Vec<ClientRecord> {
    map.into_iter()
        .map(|(key, attributes)| ClientRecord::from_attributes(key, attributes))
        .collect()
}

fn wrapped_attribute_map(value: &Value) -> Option<ClientDirectory> {
    let clients = value.get("clients")?;
    let map = BTreeMap::<String, AttributeMap>::deserialize(clients).ok()?;
    Some(ClientDirectory { records: synthesize(map), attribute_keys: attribute_keys(value) })
}

fn wrapped_record_map(value: &Value) -> Option<ClientDirectory> {
    let clients = value.get("clients")?;
    let map = BTreeMap::<String, ClientRecord>::deserialize(clients).ok()?;
    Some(ClientDirectory {
        records: map.into_values().collect(),
        attribute_keys: attribute_keys(value),
    })
}

fn wrapped_record_seq(value: &Value) -> Option<ClientDirectory> {
    let clients = value.get("clients")?;
    let records = Vec::<ClientRecord>::deserialize(clients).ok()?;
    Some(ClientDirectory { records, attribute_keys: attribute_keys(value) })
}

fn bare_record_seq(value: &Value) -> Option<ClientDirectory> {
    let records = Vec::<ClientRecord>::deserialize(value).ok()?;
    Some(ClientDirectory { records, attribute_keys: Vec::new() })
}

fn bare_record_map(value: &Value) -> Option<ClientDirectory> {
    let map = BTreeMap::<String, ClientRecord>::deserialize(value).ok()?;
    Some(ClientDirectory { records: map.into_values().collect(), attribute_keys: Vec::new() })
}

fn bare_attribute_map(value: &Value) -> Option<ClientDirectory> {
    let map = BTreeMap::<String, AttributeMap>::deserialize(value).ok()?;
    Some(ClientDirectory { records: synthesize(map), attribute_keys: Vec::new() })
}

/* -------------------------------------------------------------------------- */
/* Hardware shapes */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Deserialize)]
struct WrappedHardware {
    items: Vec<HardwareItem>,
    #[serde(default)]
    total: Option<usize>,
}

fn wrapped_item_seq(value: &Value) -> Option<HardwarePage> {
    let wrapper = WrappedHardware::deserialize(value).ok()?;
    let total = wrapper.total.unwrap_or(wrapper.items.len());
    Some(HardwarePage { items: wrapper.items, total })
}

fn bare_item_seq(value: &Value) -> Option<HardwarePage> {
    let items = Vec::<HardwareItem>::deserialize(value).ok()?;
    Some(HardwarePage { total: items.len(), items })
}
