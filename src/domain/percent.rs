use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::PercentError;

const LOWER_BORDER: f64 = 0.0;
const UPPER_BORDER: f64 = 100.0;

/// Floating-point value restricted to the closed interval 0.0..=100.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Percent {
    value: f64,
}

impl Percent {
    pub fn new(value: f64) -> Result<Self, PercentError> {
        let mut percent = Self::default();
        percent.set(value)?;
        Ok(percent)
    }

    /// Relative size of the smaller count to the larger one, scaled to 0..=100.
    ///
    /// Equal non-zero counts yield 0%. Two zero counts have no meaningful ratio
    /// and fail with [`PercentError::BothZero`].
    pub fn from_counts(a: usize, b: usize) -> Result<Self, PercentError> {
        if a == 0 && b == 0 {
            return Err(PercentError::BothZero);
        }
        if a == b {
            return Self::new(0.0);
        }

        let (a, b) = (a as f64, b as f64);
        let ratio = if a > b { b / a } else { a / b };
        Self::new(ratio * 100.0)
    }

    pub fn set(&mut self, value: f64) -> Result<(), PercentError> {
        check_range(value)?;
        self.value = value;
        Ok(())
    }

    /// Stored value, or 0.0 when the stored value is out of range.
    pub fn get(&self) -> f64 {
        match check_range(self.value) {
            Ok(()) => self.value,
            Err(_) => 0.0,
        }
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.get())
    }
}

impl FromStr for Percent {
    type Err = PercentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_percentage(s)
    }
}

/// Parses strings of the form `<number>%`, e.g. `"12.5%"`.
pub fn parse_percentage(input: &str) -> Result<Percent, PercentError> {
    let Some(number) = input.strip_suffix('%') else {
        return Err(PercentError::InvalidFormat {
            input: input.to_string(),
        });
    };
    let value = number
        .parse::<f64>()
        .map_err(|source| PercentError::ParseNumber {
            input: input.to_string(),
            source,
        })?;
    Percent::new(value)
}

fn check_range(value: f64) -> Result<(), PercentError> {
    // NaN fails both comparisons and is rejected here as well.
    if (LOWER_BORDER..=UPPER_BORDER).contains(&value) {
        Ok(())
    } else {
        Err(PercentError::ValueExceedsRange { value })
    }
}
