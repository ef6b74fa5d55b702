// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Paired human/machine-readable log line model and emission.
//!
//! Every event becomes exactly one line of output: a human-readable prefix,
//! the ` MRL:` marker, and a compact JSON encoding of [`LogRecord`]. Empty
//! and zero-valued fields are omitted from the JSON object; `type` and
//! `time` are always present.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{self, Write};
use thiserror::Error;

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;

/// Marker separating the human-readable prefix from the JSON payload.
pub const MRL_MARKER: &str = " MRL:";

/// Errors that can occur while emitting a log line.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The underlying writer failed.
    #[error("failed to write: {source}")]
    Write {
        #[source]
        source: io::Error,
    },

    /// The record could not be encoded as JSON (non-serializable metadata).
    #[error("failed to encode machine-readable record: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

/// A single machine-readable log record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Event type: `dependency`, `<dep-type> dependency`, `section-start`
    /// or `section-end`.
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default, skip_serializing_if = "skip_empty")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "skip_empty")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "skip_empty")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "skip_empty")]
    pub filename: Option<String>,
    /// Free-form structured metadata attached to dependency records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    /// Exit code of the section; only meaningful for `section-end`.
    #[serde(default, skip_serializing_if = "skip_zero")]
    pub result: i32,
    /// Annotation attached to a `section-end` record.
    #[serde(default, skip_serializing_if = "skip_empty")]
    pub message: Option<String>,
    pub time: DateTime<Utc>,
}

fn skip_empty(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn skip_zero(value: &i32) -> bool {
    *value == 0
}

impl LogRecord {
    /// Blank record of the given type; callers fill in the relevant fields.
    pub fn new(record_type: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            record_type: record_type.into(),
            name: None,
            version: None,
            hash: None,
            filename: None,
            metadata: None,
            result: 0,
            message: None,
            time,
        }
    }

    /// Record marking the beginning of a named section.
    pub fn section_start(name: &str, time: DateTime<Utc>) -> Self {
        let mut record = Self::new("section-start", time);
        record.name = Some(name.to_string());
        record
    }

    /// Record marking the end of a named section.
    pub fn section_end(name: &str, result: i32, message: Option<&str>, time: DateTime<Utc>) -> Self {
        let mut record = Self::new("section-end", time);
        record.name = Some(name.to_string());
        record.result = result;
        record.message = message.map(str::to_string);
        record
    }

    /// Write the composite log line: human prefix, marker, compact JSON,
    /// trailing newline. Output is byte-identical for equal inputs.
    pub fn emit(&self, human: &str, out: &mut dyn Write) -> Result<(), EmitError> {
        let payload =
            serde_json::to_string(self).map_err(|source| EmitError::Encode { source })?;
        writeln!(out, "{human}{MRL_MARKER}{payload}")
            .map_err(|source| EmitError::Write { source })
    }
}
