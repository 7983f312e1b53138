//! Application orchestration layer
//!
//! This module holds the interaction state machine: the state itself and the
//! controller that applies input events to it.

pub mod controller;
pub mod state;

pub use controller::{AppController, CommandEditorLauncher, EditorLauncher, LaunchError};
pub use state::{AppState, Effect};
