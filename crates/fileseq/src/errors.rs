//! Error types for the slice grammar parser.

use thiserror::Error;

/// Failure raised while parsing one sequence token into slices.
///
/// These errors never escape [`Pattern::parse`](crate::Pattern::parse): a
/// token that fails slice parsing is demoted to a literal token instead, and
/// callers observe the failure only through `is_ok()`. The type is public so
/// the low-level [`parse_slices`](crate::parse_slices) entry point can report
/// what went wrong. Positions are byte offsets into the token string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliceError {
    /// A leading, consecutive, or trailing comma produced an empty
    /// alternative.
    #[error("empty slice alternative at byte {position}")]
    EmptyAlternative {
        /// Offset of the empty alternative.
        position: usize,
    },
    /// An integer was required but none was found at the cursor.
    #[error("expected an integer at byte {position}")]
    ExpectedInteger {
        /// Offset where the integer should have started.
        position: usize,
    },
    /// A parse stage met a character it cannot consume.
    #[error("unexpected character `{found}` at byte {position}")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// Offset of the offending character.
        position: usize,
    },
    /// An explicit `x` step parsed to zero.
    #[error("step must be non-zero at byte {position}")]
    ZeroStep {
        /// Offset of the step value.
        position: usize,
    },
    /// The begin/end/step combination describes a range with no elements.
    #[error("range has no elements (begin {begin}, end {end}, step {step})")]
    EmptyRange {
        /// Parsed range start.
        begin: i32,
        /// Parsed range end.
        end: i32,
        /// Parsed step.
        step: i32,
    },
}

impl SliceError {
    /// Shift the recorded position from alternative-relative to
    /// token-relative.
    pub(crate) fn offset_by(self, base: usize) -> Self {
        match self {
            Self::EmptyAlternative { position } => Self::EmptyAlternative {
                position: position + base,
            },
            Self::ExpectedInteger { position } => Self::ExpectedInteger {
                position: position + base,
            },
            Self::UnexpectedCharacter { found, position } => Self::UnexpectedCharacter {
                found,
                position: position + base,
            },
            Self::ZeroStep { position } => Self::ZeroStep {
                position: position + base,
            },
            Self::EmptyRange { .. } => self,
        }
    }
}
