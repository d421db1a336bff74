/// Inclusive integer bounds parsed from a `<low>-<high>` match value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeBounds {
    pub low: i64,
    pub high: i64,
}

impl RangeBounds {
    pub fn contains(&self, value: i64) -> bool {
        self.low <= value && value <= self.high
    }
}

/// Parses `<low>-<high>`.
///
/// Never fails: input that does not split into exactly two parts yields
/// `0-0`, and a part that is not a base-10 integer reads as 0.
pub fn parse_range(input: &str) -> RangeBounds {
    let parts: Vec<&str> = input.split('-').collect();
    let [low, high] = parts.as_slice() else {
        return RangeBounds::default();
    };
    RangeBounds {
        low: low.parse().unwrap_or_default(),
        high: high.parse().unwrap_or_default(),
    }
}
