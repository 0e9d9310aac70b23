//! Replacement matching between repository labels and the default GitHub
//! labels.

use std::collections::HashMap;

use crate::defaults::DEFAULT_LABELS;

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;

/// Tracks which default labels have been claimed as replaced during one
/// export run.
///
/// Only a successful match takes a default label out of rotation. A default
/// that was tested against a candidate and failed stays eligible for later
/// candidates in the same run.
#[derive(Debug, Default)]
pub struct ReplacementClaims {
    claimed: HashMap<&'static str, bool>,
}

impl ReplacementClaims {
    /// Creates an empty claims state for a new export run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tests whether `name` can claim `default_label` as the label it
    /// replaces, recording the outcome of the containment test.
    ///
    /// Returns `false` without retesting when the default was already
    /// successfully claimed by an earlier candidate.
    fn try_claim(&mut self, name: &str, default_label: &'static str) -> bool {
        if let Some(true) = self.claimed.get(default_label) {
            return false;
        }

        let matched = name.to_lowercase().contains(default_label);
        self.claimed.insert(default_label, matched);
        matched
    }
}

/// Finds the default label that `name` should be tagged as replacing.
///
/// Walks [`DEFAULT_LABELS`] in declared order and returns the first default
/// whose name is contained in the lowercased candidate name and that has not
/// been claimed by an earlier candidate in the same run. Returns `None` when
/// no default matches.
pub fn find_replacement(name: &str, claims: &mut ReplacementClaims) -> Option<&'static str> {
    DEFAULT_LABELS
        .iter()
        .copied()
        .find(|default_label| claims.try_claim(name, default_label))
}
