//! Serialization utilities for tracker wire quirks
//!
//! This module provides reusable serde serialization and deserialization
//! adapters for the legacy conventions the tracker API uses on the wire:
//! integers standing in for booleans, and loosely-formatted ISO-8601
//! instants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Custom serialization module for the tracker's 0/1 boolean convention.
///
/// Decoding accepts an integer (nonzero ⇒ true, zero ⇒ false) or a native
/// boolean; any other representation decodes to `false` without erroring.
/// Encoding always emits an integer 0/1, matching the server's legacy
/// convention.
///
/// # Usage
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use shoptrack_domain::int_bool;
///
/// #[derive(Serialize, Deserialize)]
/// struct Example {
///     #[serde(with = "int_bool")]
///     completed: bool,
/// }
/// ```
pub mod int_bool {
    use super::*;

    /// Serialize a boolean as 0/1.
    pub fn serialize<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(i64::from(*flag))
    }

    /// Deserialize an integer-or-boolean into a boolean.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(coerce(&value))
    }

    fn coerce(value: &Value) -> bool {
        match value {
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_i64().is_some_and(|n| n != 0),
            _ => false,
        }
    }
}

/// Serde adapter for a required instant field using the lenient parse /
/// canonical format rules in [`crate::timestamp`].
pub mod iso_instant {
    use super::*;
    use crate::timestamp::{format_instant, parse_instant};

    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_instant(*instant))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_instant(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid ISO-8601 instant: {raw}")))
    }
}

/// Serde adapter for an optional instant field. Absent keys and explicit
/// nulls both decode to `None`.
pub mod iso_instant_opt {
    use super::*;
    use crate::timestamp::{format_instant, parse_instant};

    pub fn serialize<S>(instant: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match instant {
            Some(instant) => serializer.serialize_str(&format_instant(*instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => parse_instant(&raw).map(Some).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid ISO-8601 instant: {raw}"))
            }),
        }
    }
}
