//! The gembel output document.
//!
//! This module contains the JSON document written to standard output: the
//! exported labels plus the repositories list the gembel format expects.

use std::io::Write;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::errors::Error;

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;

/// The repositories entry emitted with every document.
///
/// The gembel format records a fixed placeholder here, not the repository
/// that was queried.
pub const PLACEHOLDER_REPOSITORY: &str = "owner/repo";

/// An exported label.
///
/// `replace`, when present, names the default GitHub label this label
/// supersedes. The field is omitted from the JSON output entirely when no
/// default matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The name of the label
    pub name: String,
    /// The label color as a hex string, without a leading `#`
    pub color: String,
    /// The default GitHub label this label replaces, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace: Option<String>,
}

/// The label-management configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The exported labels, in the order the API returned them
    pub labels: Vec<Label>,
    /// The repositories the configuration applies to
    pub repositories: Vec<String>,
}

impl Document {
    /// Wraps the exported labels into a document with the placeholder
    /// repositories entry.
    pub fn new(labels: Vec<Label>) -> Self {
        Self {
            labels,
            repositories: vec![PLACEHOLDER_REPOSITORY.to_string()],
        }
    }

    /// Serializes the document as tab-indented JSON.
    ///
    /// No trailing newline is written after the closing brace.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` if the document cannot be written,
    /// including I/O failures of the underlying writer.
    pub fn write_pretty<W: Write>(&self, writer: W) -> Result<(), Error> {
        let formatter = PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut serializer)?;
        Ok(())
    }
}
