//! gridmarks: circles and crosses on a resizable grid
//!
//! The domain, settings, input translation, state machine and renderer are
//! platform independent. The Win32 window glue lives in `platform` and
//! `ui::main_window` and only builds on Windows.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod input;
pub mod logging;
#[cfg(windows)]
pub mod platform;
pub mod ui;
