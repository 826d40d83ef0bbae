//! Contract violations detected while decoding or validating a plan.

use thiserror::Error;

/// Error returned when a string is not one of a closed enum's values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} value: {value:?}")]
pub struct UnknownVariant {
    /// Wire name of the field that carried the value (`goal`, `kind`, `mode`, `type`).
    pub field: &'static str,
    pub value: String,
}

/// Why a plan, or one of its parts, was rejected.
///
/// Each variant maps to a stable [`kind`](PlanError::kind) code so callers can
/// tell a bad discriminant from a payload mismatch from a bad number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariant),

    /// The discriminant names a payload field that is absent.
    #[error("{tag} `{value}` requires field `{field}`")]
    MissingPayload {
        tag: &'static str,
        value: &'static str,
        field: &'static str,
    },

    /// A payload field is present that the discriminant does not name.
    #[error("field `{field}` is not allowed when {tag} is `{value}`")]
    UnexpectedPayload {
        tag: &'static str,
        value: &'static str,
        field: &'static str,
    },

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: i64 },

    #[error("{field} must be at least 1 (got {value})")]
    NotPositive { field: &'static str, value: i64 },

    #[error("{field} is out of range (got {value})")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("{field} must be a finite, non-negative number")]
    InvalidNumber { field: &'static str },

    #[error("day references unknown session {0:?}")]
    UnresolvedSession(String),

    #[error("session id {0:?} appears more than once")]
    DuplicateSession(String),
}

impl PlanError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownVariant(_) => "UNKNOWN_ENUM_VALUE",
            Self::MissingPayload { .. } | Self::UnexpectedPayload { .. } => "UNION_MISMATCH",
            Self::MissingField(_) => "MALFORMED_INPUT",
            Self::Negative { .. }
            | Self::NotPositive { .. }
            | Self::OutOfRange { .. }
            | Self::InvalidNumber { .. } => "INVALID_VALUE",
            Self::UnresolvedSession(_) => "UNRESOLVED_SESSION",
            Self::DuplicateSession(_) => "DUPLICATE_SESSION",
        }
    }
}
