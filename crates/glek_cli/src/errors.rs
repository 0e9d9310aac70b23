use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the glek CLI application.
///
/// This enum represents all possible error conditions that can arise while
/// running the CLI, from argument and environment validation to failures of
/// the export pipeline itself.
#[derive(Error, Debug)]
pub enum Error {
    /// No `owner/repo` argument was provided.
    ///
    /// This error is reported together with the usage text.
    #[error("missing <owner/repo>")]
    MissingRepository,

    /// The GITHUB_TOKEN environment variable is unset or empty.
    ///
    /// This error is reported together with the usage text.
    #[error("empty GITHUB_TOKEN in env")]
    MissingToken,

    /// Invalid command-line arguments were provided.
    ///
    /// This error is returned when the arguments cannot be parsed, for
    /// example when extra positional arguments are present. It is reported
    /// together with the usage text.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The GitHub client could not be constructed.
    #[error(transparent)]
    Client(#[from] github_client::Error),

    /// The export pipeline failed.
    ///
    /// Wraps fetch, argument-parse, and serialization failures from the core
    /// crate.
    #[error(transparent)]
    Export(#[from] glek_core::Error),
}
