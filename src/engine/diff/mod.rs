pub mod compare;

use crate::domain::error::DiffError;
use crate::domain::report::{Report, Reports};

/// Reports the pair when the bytes differ. The report index is always 0.
pub fn byte_different(a: u8, b: u8) -> Option<Report> {
    (a != b).then(|| Report::changed(0, a, b))
}

/// Reports every position that exists in only one of `a` and `b`.
///
/// Operands may come in any order. Reports are expressed in `(a, b)` order:
/// positions only present in `b` carry `original: None`, positions only
/// present in `a` carry `new: None`.
pub fn bytes_different(a: &[u8], b: &[u8]) -> Result<Reports, DiffError> {
    match compare::ordered_bytes_different(a, b) {
        Ok(reports) => Ok(reports),
        Err(DiffError::OperandOrder { .. }) => {
            let mut reports = compare::ordered_bytes_different(b, a)?;
            reports.swap();
            Ok(reports)
        }
    }
}

/// Reports each differing position inside the prefix shared by `a` and `b`.
pub fn prefix_differences(a: &[u8], b: &[u8]) -> Reports {
    a.iter()
        .zip(b)
        .enumerate()
        .filter_map(|(index, (left, right))| {
            byte_different(*left, *right).map(|report| Report { index, ..report })
        })
        .collect()
}
