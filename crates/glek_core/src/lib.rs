//! Core logic for exporting GitHub issue labels into a gembel label
//! configuration.
//!
//! The pipeline fetches every label of one repository, decides for each label
//! which default GitHub label it replaces, and wraps the result in the gembel
//! output document.

use async_trait::async_trait;
use tracing::{info, instrument};

pub mod defaults;
pub mod document;
pub mod errors;
pub mod matcher;
pub mod repository;

pub use errors::Error;

use document::{Document, Label};
use matcher::ReplacementClaims;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Source of raw repository labels.
///
/// Implemented by the GitHub client. The export pipeline is generic over this
/// trait so that tests can drive it from an in-memory source.
#[async_trait]
pub trait LabelSource: Send + Sync {
    /// Lists all labels for the repository, in the order the source returns
    /// them.
    async fn list_labels(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<github_client::models::Label>, github_client::Error>;
}

#[async_trait]
impl LabelSource for github_client::GitHubClient {
    async fn list_labels(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<github_client::models::Label>, github_client::Error> {
        github_client::GitHubClient::list_labels(self, owner, repo).await
    }
}

/// Fetches every label for `owner/repo` and builds the gembel document.
///
/// Labels are processed in the order the source returns them, threading one
/// set of replacement claims through the whole run. The first label whose
/// lowercased name contains a still-unclaimed default label name claims that
/// default as the label it replaces.
///
/// # Errors
///
/// Any failure from the label source aborts the export; labels from already
/// fetched pages are discarded.
#[instrument(skip(source), fields(owner = %owner, repo = %repo))]
pub async fn export_labels<S>(source: &S, owner: &str, repo: &str) -> Result<Document, Error>
where
    S: LabelSource + ?Sized,
{
    let raw_labels = source.list_labels(owner, repo).await?;

    let mut claims = ReplacementClaims::new();
    let labels: Vec<Label> = raw_labels
        .into_iter()
        .map(|label| {
            let replace = matcher::find_replacement(&label.name, &mut claims);
            Label {
                name: label.name,
                color: label.color,
                replace: replace.map(str::to_string),
            }
        })
        .collect();

    info!(
        owner = owner,
        repo = repo,
        count = labels.len(),
        "Built label export document"
    );
    Ok(Document::new(labels))
}
