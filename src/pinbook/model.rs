//! # Domain Model
//!
//! A [`Record`] is one stored entry: a free-text name and an identifier kept in
//! canonical form (see [`crate::format`]), plus creation and modification times.
//!
//! ## Stored Shape
//!
//! Records are persisted as JSON objects with the field names used by earlier
//! versions of the data, so existing slots keep loading:
//!
//! ```json
//! {
//!   "id": "6f1c…",
//!   "name": "Jane Doe",
//!   "pin": "A12 3456 789",
//!   "createdAt": "2024-05-01T09:30:00.000Z",
//!   "updatedAt": "2024-05-01T09:30:00.000Z"
//! }
//! ```
//!
//! - `identifier` is accepted in place of `pin` when reading.
//! - Timestamps are ISO 8601 in UTC with millisecond precision. Anything RFC 3339
//!   is accepted on read and truncated to milliseconds.
//!
//! ## Validation
//!
//! The only rules are required fields and a length cap on the identifier, checked
//! by [`validate_fields`] before any mutation touches the store.

use crate::error::{PinbookError, Result};
use crate::format::identifier_len;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum identifier length, counted without whitespace.
pub const MAX_IDENTIFIER_LEN: usize = 11;

/// Opaque, stable record id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "pin", alias = "identifier")]
    pub identifier: String,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// Builds a fresh record. `identifier` must already be in canonical form.
    pub fn new(id: RecordId, name: String, identifier: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            identifier,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Pending field values for an edit, held by the caller until submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUpdate {
    pub name: String,
    pub identifier: String,
}

impl RecordUpdate {
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
        }
    }

    /// Starts an edit from the current values of a record.
    pub fn from_record(record: &Record) -> Self {
        Self::new(record.name.clone(), record.identifier.clone())
    }
}

pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PinbookError::validation("Name cannot be empty"));
    }
    Ok(())
}

/// Checks the submitted fields of an add or edit.
pub fn validate_fields(name: &str, raw_identifier: &str) -> Result<()> {
    validate_name(name)?;
    if raw_identifier.trim().is_empty() {
        return Err(PinbookError::validation("PIN cannot be empty"));
    }
    let len = identifier_len(raw_identifier);
    if len > MAX_IDENTIFIER_LEN {
        return Err(PinbookError::Validation(format!(
            "PIN is {} characters long, the maximum is {}",
            len, MAX_IDENTIFIER_LEN
        )));
    }
    Ok(())
}

mod iso8601 {
    use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|at| at.with_timezone(&Utc).trunc_subsecs(3))
            .map_err(serde::de::Error::custom)
    }
}
