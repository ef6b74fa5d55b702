// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency reporting: one human line plus one MRL record per dependency.

use std::fmt::Write as _;
use std::io::Write;
use thiserror::Error;

use crate::clock::Clock;
use crate::record::{EmitError, LogRecord};

#[cfg(test)]
#[path = "dependency_tests.rs"]
mod tests;

/// Help text returned when no identity field was supplied.
pub const INSUFFICIENT_IDENTITY_MESSAGE: &str = "Insufficient data to identify a dependency\n\
    \n\
    available flags:\n\
    \x20 --name       name of the dependency\n\
    \x20 --filename   name of the dependency, if it is a file\n\
    \x20 --hash       repeatable hash of the dependency contents";

/// Errors that can occur while reporting a dependency.
#[derive(Debug, Error)]
pub enum DependencyError {
    /// None of name/filename/hash was supplied. Detected before any output
    /// is written; the message enumerates the flags that would satisfy the
    /// requirement.
    #[error("{INSUFFICIENT_IDENTITY_MESSAGE}")]
    InsufficientIdentity,

    /// The supplied metadata was not valid JSON.
    #[error("invalid metadata JSON: {source}")]
    InvalidMetadata {
        #[source]
        source: serde_json::Error,
    },

    /// The record could not be written.
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Identity and annotations of a single reported dependency.
///
/// Empty strings are treated the same as absent values, so CLI glue can
/// pass flag contents through unfiltered.
#[derive(Debug, Clone, Default)]
pub struct Dependency {
    pub name: Option<String>,
    pub version: Option<String>,
    pub hash: Option<String>,
    pub filename: Option<String>,
    /// Raw JSON metadata, parsed at report time.
    pub metadata: Option<String>,
    /// Dependency-type tag, folded into the record type as
    /// `"<dep-type> dependency"`.
    pub dep_type: Option<String>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl Dependency {
    /// At least one of name/filename/hash identifies a dependency.
    fn has_sufficient_identity(&self) -> bool {
        present(&self.name).is_some()
            || present(&self.filename).is_some()
            || present(&self.hash).is_some()
    }

    /// Emit the human line and MRL record for this dependency.
    pub fn report<C: Clock>(
        &self,
        out: &mut dyn Write,
        clock: &C,
    ) -> Result<(), DependencyError> {
        if !self.has_sufficient_identity() {
            return Err(DependencyError::InsufficientIdentity);
        }

        let metadata = match present(&self.metadata) {
            Some(raw) => Some(
                serde_json::from_str(raw)
                    .map_err(|source| DependencyError::InvalidMetadata { source })?,
            ),
            None => None,
        };

        let record_type = match present(&self.dep_type) {
            Some(tag) => format!("{tag} dependency"),
            None => "dependency".to_string(),
        };

        let mut human = String::from("dependency reported.");
        let fields = [
            ("Name", present(&self.name)),
            ("Version", present(&self.version)),
            ("Filename", present(&self.filename)),
            ("Hash", present(&self.hash)),
        ];
        let mut first = true;
        for (label, value) in fields {
            if let Some(value) = value {
                let sep = if first { "" } else { "," };
                let _ = write!(human, "{sep} {label}: {value}");
                first = false;
            }
        }
        if let Some(metadata) = &metadata {
            let sep = if first { "" } else { "," };
            let _ = write!(human, "{sep} Metadata: {metadata}");
        }

        let mut record = LogRecord::new(record_type, clock.now());
        record.name = self.name.clone();
        record.version = self.version.clone();
        record.hash = self.hash.clone();
        record.filename = self.filename.clone();
        record.metadata = metadata;
        record.emit(&human, out)?;
        Ok(())
    }
}
