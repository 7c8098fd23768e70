//! Error types
//!
//! Malformed input and programmer mistakes are kept apart: anything wrong
//! with a received line is a [`ParseError`], anything wrong with how a
//! [`VesselPosition`](crate::VesselPosition) was assembled is a
//! [`PreconditionError`].

use thiserror::Error;

/// A received line could not be parsed.
///
/// Every failure while decomposing a line ends up here, whatever the
/// underlying cause, so callers only ever handle one kind of parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line is empty")]
    Empty,

    #[error("sentence does not start with '$' or '!'")]
    MissingDelimiter,

    #[error("no '*' checksum delimiter")]
    MissingChecksum,

    #[error("checksum {0:?} is not two hex digits")]
    InvalidChecksum(String),

    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("checksum mismatch: declared {declared}, computed {computed}")]
    ChecksumMismatch { declared: String, computed: String },

    #[error("tag block has no closing '\\'")]
    UnterminatedTagBlock,

    #[error("tag block timestamp {0:?} is not an integer")]
    InvalidTimestamp(String),

    #[error("field {index} ({value:?}) is not valid")]
    InvalidField { index: usize, value: String },
}

impl ParseError {
    /// Short stable name of the failure, for counting and logs
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::Empty => "empty",
            ParseError::MissingDelimiter => "missing_delimiter",
            ParseError::MissingChecksum => "missing_checksum",
            ParseError::InvalidChecksum(_) => "invalid_checksum",
            ParseError::TooFewFields { .. } => "too_few_fields",
            ParseError::ChecksumMismatch { .. } => "checksum_mismatch",
            ParseError::UnterminatedTagBlock => "unterminated_tag_block",
            ParseError::InvalidTimestamp(_) => "invalid_timestamp",
            ParseError::InvalidField { .. } => "invalid_field",
        }
    }
}

/// A [`VesselPosition`](crate::VesselPosition) was built from inconsistent
/// or incomplete values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreconditionError {
    #[error("mandatory field `{0}` was not set")]
    MissingField(&'static str),

    #[error("unexpected lat {0}")]
    LatitudeOutOfRange(f64),

    #[error("unexpected lon {0}")]
    LongitudeOutOfRange(f64),

    #[error("`{0}` is not finite: {1}")]
    NonFinite(&'static str, f64),
}

/// Which side of a vessel pair lacked the data needed to assess it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    This,
    Other,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::This => write!(f, "reference vessel"),
            Side::Other => write!(f, "other vessel"),
        }
    }
}

/// Collision risk between two vessels cannot be assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsufficientData {
    /// Speed or course over ground is unknown
    #[error("{0} has no speed or course over ground")]
    NoVelocity(Side),

    /// The vessel is stationary or lacks motion data, so it cannot be
    /// moved to the reference time
    #[error("{0} cannot be predicted forward")]
    NoPrediction(Side),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            ParseError::ChecksumMismatch {
                declared: "34".into(),
                computed: "33".into()
            }
            .to_string(),
            "checksum mismatch: declared 34, computed 33"
        );
        assert_eq!(
            ParseError::TooFewFields {
                expected: 7,
                found: 3
            }
            .to_string(),
            "expected at least 7 fields, found 3"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            PreconditionError::NonFinite("cog_degrees", f64::INFINITY).to_string(),
            "`cog_degrees` is not finite: inf"
        );
        assert_eq!(
            InsufficientData::NoPrediction(Side::Other).to_string(),
            "other vessel cannot be predicted forward"
        );
    }
}
