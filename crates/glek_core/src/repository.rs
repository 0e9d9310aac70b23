//! Parsing of the `owner/repo` repository argument.

use crate::errors::Error;

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

/// Splits an `owner/repo` argument into its owner and repository parts.
///
/// Requires exactly two non-empty `/`-separated segments.
///
/// # Errors
///
/// Returns `Error::InvalidRepository` for anything else: a missing `/`, an
/// empty owner or repository segment, or extra segments.
pub fn split_owner_repo(repository: &str) -> Result<(&str, &str), Error> {
    let mut segments = repository.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner, repo))
        }
        _ => Err(Error::InvalidRepository(repository.to_string())),
    }
}
