//! Constraint violations produced by the announcement validation pass.
//!
//! Validation collects *all* failures rather than stopping at the first:
//! each check appends a [`Violation`] and the caller inspects the full
//! list. Violations from nested entries are re-rooted under the enclosing
//! collection's field path via [`Violation::prefixed`].

use serde::Serialize;

/// The constraint a violated field failed to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    /// The field is required but was absent.
    NotNull,
}

/// A single constraint violation on one field of an announcement.
///
/// `field` is a wire-format path (e.g. `serviceAnnouncements[].id` for a
/// failure inside an entry — element failures share the same prefix, the
/// collection index is not distinguished).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Wire-format path of the offending field.
    pub field: String,
    /// Human-readable constraint message.
    pub message: String,
    /// Which constraint was violated.
    pub kind: ConstraintKind,
}

impl Violation {
    /// Creates a [`ConstraintKind::NotNull`] violation for `field`.
    #[must_use]
    pub fn not_null(field: &str) -> Self {
        Self {
            field: field.to_owned(),
            message: "may not be null".to_owned(),
            kind: ConstraintKind::NotNull,
        }
    }

    /// Re-roots this violation under `prefix` (for cascaded validation of
    /// nested entries).
    #[must_use]
    pub fn prefixed(self, prefix: &str) -> Self {
        Self {
            field: format!("{prefix}{}", self.field),
            ..self
        }
    }
}
