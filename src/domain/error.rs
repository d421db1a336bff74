use std::num::ParseFloatError;

use serde::Serialize;
use thiserror::Error;

/// Errors produced while building or parsing a [`Percent`](crate::domain::percent::Percent).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PercentError {
    /// Value lies outside the closed interval 0..=100.
    #[error("value exceeds supported range: value={value}, supported range: 0-100")]
    ValueExceedsRange { value: f64 },

    /// Ratio requested between two zero counts.
    #[error("a and b are both 0")]
    BothZero,

    /// Percentage string does not end with `%`.
    #[error("invalid percentage format: {input}")]
    InvalidFormat { input: String },

    /// Percentage prefix is not a base-10 float.
    #[error("invalid percentage number `{input}`: {source}")]
    ParseNumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Errors produced by the byte diff helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    #[error("a must not be longer than b: a.len={left_len}, b.len={right_len}")]
    OperandOrder { left_len: usize, right_len: usize },
}

/// Errors produced by [`Validation::matches`](crate::domain::validation::Validation::matches).
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid match type: {match_type}")]
    InvalidMatchType { match_type: String },

    #[error("value is not a number: {value}")]
    NotANumber { value: String },

    #[error("invalid regex pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to encode value: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Percent(#[from] PercentError),

    #[error(transparent)]
    Diff(#[from] DiffError),
}

/// Coarse classification used when callers compare failures by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Range,
    Format,
    Type,
    Operator,
    DegenerateInput,
    Serialization,
    Order,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Range => "range",
            Self::Format => "format",
            Self::Type => "type",
            Self::Operator => "operator",
            Self::DegenerateInput => "degenerate_input",
            Self::Serialization => "serialization",
            Self::Order => "order",
        }
    }
}

impl PercentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ValueExceedsRange { .. } => ErrorKind::Range,
            Self::BothZero => ErrorKind::DegenerateInput,
            Self::InvalidFormat { .. } | Self::ParseNumber { .. } => ErrorKind::Format,
        }
    }
}

impl MatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMatchType { .. } => ErrorKind::Operator,
            Self::NotANumber { .. } => ErrorKind::Type,
            Self::InvalidPattern { .. } => ErrorKind::Format,
            Self::Encode { .. } => ErrorKind::Serialization,
            Self::Percent(error) => error.kind(),
            Self::Diff(_) => ErrorKind::Order,
        }
    }
}
