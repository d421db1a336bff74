pub mod diff;
pub mod matcher;
