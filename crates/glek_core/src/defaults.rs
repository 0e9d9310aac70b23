//! The default GitHub labels.

/// The labels GitHub creates on a new repository, in match-priority order.
///
/// The replacement matcher walks this list in declared order, so earlier
/// entries win when a label name contains more than one default name.
pub const DEFAULT_LABELS: [&str; 7] = [
    "bug",
    "duplicate",
    "enhancement",
    "help wanted",
    "invalid",
    "question",
    "wontfix",
];
