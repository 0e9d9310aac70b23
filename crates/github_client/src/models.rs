//! # Models
//!
//! This module contains the data models returned by the GitHub client.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents an issue label as returned by the GitHub API.
///
/// This struct carries only the fields needed for label export: the label
/// name and its display color.
///
/// # Examples
///
/// ```
/// use github_client::models::Label;
///
/// let label = Label {
///     name: "bug".to_string(),
///     color: "d73a4a".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// The name of the label
    pub name: String,
    /// The label color as a hex string, without a leading `#`
    pub color: String,
}

impl From<octocrab::models::Label> for Label {
    fn from(value: octocrab::models::Label) -> Self {
        Self {
            name: value.name,
            color: value.color,
        }
    }
}
