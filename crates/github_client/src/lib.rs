//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for making authenticated requests to GitHub,
//! authenticating with a personal access token.

use octocrab::Octocrab;
use tracing::{debug, error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod models;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Number of labels requested per page when listing repository labels.
const LABELS_PAGE_SIZE: u8 = 100;

/// A client for interacting with the GitHub API, authenticated with a
/// personal access token.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Lists all issue labels for a repository.
    ///
    /// Requests pages of 100 labels and follows the next-page cursor reported
    /// by the API until none remains. Labels are returned in the order the
    /// API returned them, concatenated across pages.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` when the repository does not exist or is not
    /// visible to the token, `Error::AuthError` when GitHub rejects the
    /// credentials, and `Error::ApiError` for any other transport or API
    /// failure. A failure on any page aborts the whole listing; no partial
    /// result is returned.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    pub async fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<models::Label>, Error> {
        let mut page = self
            .client
            .issues(owner, repo)
            .list_labels_for_repo()
            .per_page(LABELS_PAGE_SIZE)
            .send()
            .await
            .map_err(|e| classify_octocrab_error("Failed to list repository labels", e))?;

        let mut labels: Vec<models::Label> = Vec::new();
        loop {
            let next = page.next.clone();
            labels.extend(page.items.into_iter().map(models::Label::from));

            match self
                .client
                .get_page::<octocrab::models::Label>(&next)
                .await
                .map_err(|e| classify_octocrab_error("Failed to list repository labels", e))?
            {
                Some(next_page) => {
                    debug!(
                        owner = owner,
                        repo = repo,
                        fetched = labels.len(),
                        "Following next page of labels"
                    );
                    page = next_page;
                }
                None => break,
            }
        }

        info!(
            owner = owner,
            repo = repo,
            count = labels.len(),
            "Retrieved repository labels"
        );
        Ok(labels)
    }

    /// Creates a new `GitHubClient` from an already configured `Octocrab`
    /// instance.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// # Errors
///
/// Returns an `Error::AuthError` if the client cannot be built.
#[instrument(skip(token))]
pub fn create_token_client(token: &str) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|e| Error::AuthError(format!("Failed to build the GitHub client: {}", e)))
}

fn classify_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let status = source.status_code;
            error!(
                error_message = %source.message,
                status_code = status.as_u16(),
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            );
            if status == http::StatusCode::UNAUTHORIZED || status == http::StatusCode::FORBIDDEN {
                Error::AuthError(source.message)
            } else if status == http::StatusCode::NOT_FOUND {
                Error::NotFound
            } else if status == http::StatusCode::TOO_MANY_REQUESTS {
                Error::RateLimitExceeded
            } else {
                Error::ApiError()
            }
        }
        octocrab::Error::Serde { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. Failed to deserialize the GitHub response.",
                message
            );
            Error::InvalidResponse
        }
        _ => {
            error!(error_message = e.to_string(), message);
            Error::ApiError()
        }
    }
}
