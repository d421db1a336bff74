pub mod error;
pub mod operand;
pub mod percent;
pub mod report;
pub mod validation;
