pub mod analysis;
pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
