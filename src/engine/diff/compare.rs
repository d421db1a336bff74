use crate::domain::error::DiffError;
use crate::domain::report::{Report, Reports};

/// Reports the tail of `longer` past the end of `shorter`.
///
/// The shared prefix is not reported: deviation thresholds are calibrated on
/// length-only reports. Use [`super::prefix_differences`] for the prefix.
pub(crate) fn ordered_bytes_different(
    shorter: &[u8],
    longer: &[u8],
) -> Result<Reports, DiffError> {
    if shorter.len() > longer.len() {
        return Err(DiffError::OperandOrder {
            left_len: shorter.len(),
            right_len: longer.len(),
        });
    }

    Ok(longer
        .iter()
        .enumerate()
        .skip(shorter.len())
        .map(|(index, byte)| Report::inserted(index, *byte))
        .collect())
}
