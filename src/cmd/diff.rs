use serde::Serialize;

use crate::domain::error::DiffError;
use crate::domain::report::Reports;
use crate::engine::diff;

/// Byte diff of two inputs: the length tail and the changed shared prefix.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DiffReport {
    pub left_len: usize,
    pub right_len: usize,
    pub tail: Reports,
    pub prefix: Reports,
}

pub fn execute(left: &[u8], right: &[u8]) -> Result<DiffReport, DiffError> {
    Ok(DiffReport {
        left_len: left.len(),
        right_len: right.len(),
        tail: diff::bytes_different(left, right)?,
        prefix: diff::prefix_differences(left, right),
    })
}
