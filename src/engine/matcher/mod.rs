pub mod range;

use regex::bytes::Regex;

use crate::domain::error::MatchError;
use crate::domain::operand::Operand;
use crate::domain::percent::{Percent, parse_percentage};
use crate::domain::validation::{MatchType, Validation};
use crate::engine::diff;

/// Operator implementation: expectation and observed value in, verdict out.
pub type Matcher = fn(&Validation, &Operand) -> Result<bool, MatchError>;

/// Returns the operator implementation for `match_type`.
pub fn matcher_for(match_type: MatchType) -> Matcher {
    match match_type {
        MatchType::LessThan => less_than,
        MatchType::LessThanOrEqual => less_than_or_equal,
        MatchType::GreaterThan => greater_than,
        MatchType::GreaterThanOrEqual => greater_than_or_equal,
        MatchType::PercentageDeviation => percentage_deviation,
        MatchType::Regex => regex_match,
        MatchType::Range => range_match,
        MatchType::Equal => equal,
        MatchType::NotEqual => not_equal,
        MatchType::Empty => empty,
        MatchType::NotEmpty => not_empty,
        MatchType::Contains => contains,
    }
}

fn less_than(validation: &Validation, observed: &Operand) -> Result<bool, MatchError> {
    let (expected, observed) = numeric_pair(validation, observed)?;
    Ok(observed < expected)
}

fn less_than_or_equal(validation: &Validation, observed: &Operand) -> Result<bool, MatchError> {
    let (expected, observed) = numeric_pair(validation, observed)?;
    Ok(observed <= expected)
}

fn greater_than(validation: &Validation, observed: &Operand) -> Result<bool, MatchError> {
    let (expected, observed) = numeric_pair(validation, observed)?;
    Ok(observed > expected)
}

fn greater_than_or_equal(
    validation: &Validation,
    observed: &Operand,
) -> Result<bool, MatchError> {
    let (expected, observed) = numeric_pair(validation, observed)?;
    Ok(observed >= expected)
}

fn percentage_deviation(validation: &Validation, observed: &Operand) -> Result<bool, MatchError> {
    let observed_bytes = encode(observed)?;
    let expected_bytes = encode(&validation.expected_value)?;
    let reports = diff::bytes_different(&observed_bytes, &expected_bytes)?;
    let deviation = Percent::from_counts(expected_bytes.len(), reports.len())?;
    let tolerance = parse_percentage(validation.match_value())?;
    Ok(deviation.get() <= tolerance.get())
}

fn regex_match(validation: &Validation, observed: &Operand) -> Result<bool, MatchError> {
    let pattern = validation.match_value();
    let regex = Regex::new(pattern).map_err(|source| MatchError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(regex.is_match(&encode(observed)?))
}

fn range_match(validation: &Validation, observed: &Operand) -> Result<bool, MatchError> {
    let bounds = range::parse_range(validation.match_value());
    let value = to_i64(observed)?;
    Ok(bounds.contains(value))
}

fn equal(validation: &Validation, observed: &Operand) -> Result<bool, MatchError> {
    Ok(validation.expected_value == *observed)
}

fn not_equal(validation: &Validation, observed: &Operand) -> Result<bool, MatchError> {
    equal(validation, observed).map(|matched| !matched)
}

fn empty(_: &Validation, observed: &Operand) -> Result<bool, MatchError> {
    Ok(match observed {
        Operand::Str(text) => text.is_empty(),
        other => other.is_nil(),
    })
}

fn not_empty(validation: &Validation, observed: &Operand) -> Result<bool, MatchError> {
    empty(validation, observed).map(|matched| !matched)
}

fn contains(validation: &Validation, observed: &Operand) -> Result<bool, MatchError> {
    let literal = validation.match_value();
    let regex = Regex::new(&regex::escape(literal)).map_err(|source| {
        MatchError::InvalidPattern {
            pattern: literal.to_string(),
            source,
        }
    })?;
    Ok(regex.is_match(&encode(observed)?))
}

fn numeric_pair(validation: &Validation, observed: &Operand) -> Result<(i64, i64), MatchError> {
    Ok((to_i64(&validation.expected_value)?, to_i64(observed)?))
}

fn to_i64(operand: &Operand) -> Result<i64, MatchError> {
    operand.as_i64().ok_or_else(|| MatchError::NotANumber {
        value: operand.to_string(),
    })
}

fn encode(operand: &Operand) -> Result<Vec<u8>, MatchError> {
    operand
        .canonical_bytes()
        .map_err(|source| MatchError::Encode { source })
}
