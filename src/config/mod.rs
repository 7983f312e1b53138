//! Configuration module for gridmarks
//!
//! Settings persist between runs in a small line-oriented text file in the
//! working directory. Every record is optional and defaults independently.

pub mod settings;

pub use settings::{Settings, SettingsError, SettingsStore};
