use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::MatchError;
use crate::domain::operand::Operand;
use crate::engine::matcher;

/// Comparison operator selected by a [`Validation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    /// Observed value is less than the expected value.
    #[serde(rename = "lt")]
    LessThan,
    /// Observed value is less than or equal to the expected value.
    #[serde(rename = "lte")]
    LessThanOrEqual,
    /// Observed value is greater than the expected value.
    #[serde(rename = "gt")]
    GreaterThan,
    /// Observed value is greater than or equal to the expected value.
    #[serde(rename = "gte")]
    GreaterThanOrEqual,
    /// Byte-level deviation between the encoded values stays within a tolerance such as `10%`.
    #[serde(rename = "pd")]
    PercentageDeviation,
    /// Match value is a pattern searched in the encoded observed value.
    #[serde(rename = "re")]
    Regex,
    /// Observed value lies inside an inclusive `<low>-<high>` range.
    #[serde(rename = "rg")]
    Range,
    #[serde(rename = "eq")]
    Equal,
    #[serde(rename = "neq")]
    NotEqual,
    /// Observed value is an empty string or nil.
    #[serde(rename = "et")]
    Empty,
    #[serde(rename = "ne")]
    NotEmpty,
    /// Match value occurs in the encoded observed value.
    #[serde(rename = "ct")]
    Contains,
}

impl MatchType {
    pub const ALL: [Self; 12] = [
        Self::LessThan,
        Self::LessThanOrEqual,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::PercentageDeviation,
        Self::Regex,
        Self::Range,
        Self::Equal,
        Self::NotEqual,
        Self::Empty,
        Self::NotEmpty,
        Self::Contains,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LessThan => "lt",
            Self::LessThanOrEqual => "lte",
            Self::GreaterThan => "gt",
            Self::GreaterThanOrEqual => "gte",
            Self::PercentageDeviation => "pd",
            Self::Regex => "re",
            Self::Range => "rg",
            Self::Equal => "eq",
            Self::NotEqual => "neq",
            Self::Empty => "et",
            Self::NotEmpty => "ne",
            Self::Contains => "ct",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchType {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|match_type| match_type.as_str() == s)
            .ok_or_else(|| MatchError::InvalidMatchType {
                match_type: s.to_string(),
            })
    }
}

impl From<MatchType> for String {
    fn from(value: MatchType) -> Self {
        value.as_str().to_string()
    }
}

/// Expectation checked against an observed value.
///
/// `match_type` holds the raw operator tag so that unknown tags surface as
/// [`MatchError::InvalidMatchType`] from [`Validation::matches`].
/// `match_value` is the operator parameter: a `<low>-<high>` range for `rg`,
/// a `<number>%` tolerance for `pd`, a pattern for `re` and a literal for `ct`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Validation {
    pub match_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_value: Option<String>,
    #[serde(default)]
    pub expected_value: Operand,
}

impl Validation {
    pub fn new(match_type: impl Into<String>) -> Self {
        Self {
            match_type: match_type.into(),
            ..Self::default()
        }
    }

    pub fn with_match_value(mut self, match_value: impl Into<String>) -> Self {
        self.match_value = Some(match_value.into());
        self
    }

    pub fn with_expected(mut self, expected_value: impl Into<Operand>) -> Self {
        self.expected_value = expected_value.into();
        self
    }

    /// Parameter string, or `""` when none was given.
    pub fn match_value(&self) -> &str {
        self.match_value.as_deref().unwrap_or_default()
    }

    /// Checks `observed` against this expectation.
    pub fn matches(&self, observed: &Operand) -> Result<bool, MatchError> {
        let match_type: MatchType = self.match_type.parse()?;
        matcher::matcher_for(match_type)(self, observed)
    }
}
