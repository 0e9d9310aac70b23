//! Error types for the label export pipeline.

use thiserror::Error as ThisError;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while exporting repository labels.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The repository argument was not of the form `owner/repo`.
    ///
    /// This error is returned when the argument does not contain exactly two
    /// non-empty `/`-separated segments.
    #[error("invalid repository `{0}`, expected <owner/repo>")]
    InvalidRepository(String),

    /// Fetching the labels from the source failed.
    ///
    /// Wraps the underlying GitHub client error. Any page failure discards
    /// the whole export.
    #[error(transparent)]
    Fetch(#[from] github_client::Error),

    /// The output document could not be serialized.
    ///
    /// Not expected to occur for well-formed label data; kept so a
    /// serialization failure still surfaces as a printed error instead of a
    /// panic.
    #[error("Failed to serialize the label document: {0}")]
    Serialization(#[from] serde_json::Error),
}
