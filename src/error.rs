/// Error returned from [crate::SymbolicFeatures] and feature constructors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SymbolicFeaturesError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("features are not fitted yet, call fit() first")]
    NotFitted,

    #[error("no candidate feature survived validity filtering and deduplication")]
    EmptyResult,

    #[error("table has {actual} columns, but features were fitted on a table with {expected}")]
    ColumnCountMismatch { expected: usize, actual: usize },

    #[error("unknown operator {0:?}")]
    UnknownOperator(String),
}

impl SymbolicFeaturesError {
    pub(crate) fn zero_exponent() -> Self {
        Self::InvalidParameter("monomial exponent must be non-zero".into())
    }
}

/// Error returned from [crate::canonicalize] for a malformed feature name
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected character {found:?} at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unknown symbol {name:?} at position {position}")]
    UnknownSymbol { name: String, position: usize },

    #[error("integer {literal:?} at position {position} is out of range")]
    IntegerOutOfRange { literal: String, position: usize },
}
