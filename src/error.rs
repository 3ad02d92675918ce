//! Error types for the announcement contract.
//!
//! Two failure kinds exist: [`ParseError`] for wire-format decoding that
//! cannot proceed, and [`ValidationFailed`] for structurally well-formed
//! announcements that break the contract's constraints. Parse failures
//! are fatal for the single call; validation failures carry the complete
//! violation list so the caller can reject or log-and-drop.

use crate::validation::Violation;

/// Failure to decode (or, in degenerate cases, encode) announcement JSON.
///
/// Raised when the input text is not well-formed JSON or when a required
/// shape mismatches the expected structure (object vs array vs scalar,
/// malformed identifier token). A missing optional field is never a parse
/// error.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The text is not valid JSON or does not match the announcement shape.
    #[error("malformed announcement JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Malformed textual form of a [`ServiceId`](crate::domain::ServiceId).
///
/// The canonical form is a dashed hexadecimal token
/// (e.g. `1c001650-7841-11e0-a1f0-0800200c9a66`).
#[derive(Debug, thiserror::Error)]
#[error("invalid service id: {0}")]
pub struct IdFormatError(#[from] uuid::Error);

/// An announcement was rejected by the validation pass.
///
/// Carries every violation found, not just the first; see
/// [`DynamicAnnouncement::validate`](crate::domain::DynamicAnnouncement::validate).
#[derive(Debug, thiserror::Error)]
#[error("invalid announcement: {}", format_fields(violations))]
pub struct ValidationFailed {
    /// All constraint violations found by the validation pass.
    pub violations: Vec<Violation>,
}

fn format_fields(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::validation::ConstraintKind;

    #[test]
    fn validation_failed_lists_all_fields() {
        let err = ValidationFailed {
            violations: vec![
                Violation::not_null("environment"),
                Violation::not_null("pool"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "invalid announcement: environment, pool"
        );
    }

    #[test]
    fn id_format_error_from_bad_token() {
        let Err(parse_err) = "not-a-uuid".parse::<uuid::Uuid>() else {
            panic!("expected uuid parse failure");
        };
        let err = IdFormatError::from(parse_err);
        assert!(err.to_string().starts_with("invalid service id:"));
    }

    #[test]
    fn violations_keep_their_kind() {
        let v = Violation::not_null("id");
        assert_eq!(v.kind, ConstraintKind::NotNull);
    }
}
