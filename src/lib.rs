pub mod config;
pub mod errors;
pub mod extract;
pub mod invoke;
pub mod progress;
pub mod sink;
pub mod sweep;
