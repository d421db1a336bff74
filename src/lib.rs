pub mod cmd;
pub mod domain;
pub mod engine;
pub mod util;
