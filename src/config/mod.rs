//! Configuration management for tomata.

pub mod paths;
pub mod settings;

pub use paths::Paths;
pub use settings::{Config, GeneralConfig, TimerSettings};
