//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when interacting with
//! the GitHub API through the github_client crate.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// Each variant classifies one failure mode of a GitHub API call so that
/// callers can distinguish authentication problems from missing resources
/// and plain API failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A generic API request failure.
    ///
    /// This error occurs when a GitHub API request fails for reasons not
    /// covered by a more specific variant, including transport failures.
    #[error("API request failed")]
    ApiError(),

    /// Authentication or GitHub client initialization failure.
    ///
    /// This error occurs when the access token is rejected by GitHub or the
    /// client cannot be constructed. The contained string provides specific
    /// details about the failure.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// The GitHub API returned a response in an unexpected format.
    ///
    /// This error indicates that the API response structure doesn't match
    /// what the client expects, for example after an API change.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found.
    ///
    /// This error occurs when a GitHub API request returns a 404 status
    /// code, indicating that the requested repository does not exist or is
    /// not accessible with the current authentication.
    #[error("Resource not found")]
    NotFound,

    /// GitHub API rate limit has been exceeded.
    ///
    /// This error occurs when the client has made too many requests in a
    /// given time window. The process treats this as terminal; there is no
    /// retry logic.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}
