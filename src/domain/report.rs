use std::ops::Deref;

use serde::Serialize;

/// Type tag carried by every byte report. Diagnostic only.
pub const BYTE_KIND: &str = "u8";

/// Difference at a single byte position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub index: usize,
    /// Byte in the first operand; `None` when the position only exists in the second.
    pub original: Option<u8>,
    /// Byte in the second operand; `None` when the position only exists in the first.
    pub new: Option<u8>,
}

impl Report {
    pub fn changed(index: usize, original: u8, new: u8) -> Self {
        Self {
            kind: BYTE_KIND,
            index,
            original: Some(original),
            new: Some(new),
        }
    }

    pub fn inserted(index: usize, new: u8) -> Self {
        Self {
            kind: BYTE_KIND,
            index,
            original: None,
            new: Some(new),
        }
    }

    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.original, &mut self.new);
    }
}

/// Byte reports of one comparison, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Reports(Vec<Report>);

impl Reports {
    pub fn into_vec(self) -> Vec<Report> {
        self.0
    }

    /// Exchanges `original` and `new` on every report.
    pub(crate) fn swap(&mut self) {
        self.0.iter_mut().for_each(Report::swap);
    }
}

impl Deref for Reports {
    type Target = [Report];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Report>> for Reports {
    fn from(reports: Vec<Report>) -> Self {
        Self(reports)
    }
}

impl FromIterator<Report> for Reports {
    fn from_iter<I: IntoIterator<Item = Report>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Reports {
    type Item = Report;
    type IntoIter = std::vec::IntoIter<Report>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
