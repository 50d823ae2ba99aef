// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Errors raised while constructing a dialect description.
///
/// The scan itself is total over its input and has no error path; everything
/// that can go wrong is rejected here, before any scan begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialectError {
    #[error("empty {role} delimiter")]
    EmptyDelimiter { role: &'static str },

    #[error("delimiter {delimiter:?} contains whitespace")]
    WhitespaceDelimiter { delimiter: String },

    #[error("delimiter {delimiter:?} opens both a string literal and a comment")]
    AmbiguousDelimiter { delimiter: String },

    #[error("nested block comment delimiter {delimiter:?} closes with itself")]
    NestedDelimiterClash { delimiter: String },
}

pub type Result<T> = std::result::Result<T, DialectError>;
