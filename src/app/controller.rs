//! Application controller
//!
//! The controller owns the `AppState` and turns each `InputEvent` into a
//! state mutation plus an `Effect` for the window layer. It never touches
//! Win32, so the whole interaction model runs in plain unit tests.

use std::process::{Command, Stdio};

use rand::RngCore;
use thiserror::Error;

use crate::app::state::{AppState, Effect};
use crate::config::Settings;
use crate::domain::color::Rgb;
use crate::domain::grid::Mark;
use crate::input::{InputEvent, MouseButton, WheelDirection};

/// Per-notch change applied to every grid line channel
pub const WHEEL_COLOR_STEP: u8 = 2;
/// Program launched by Shift+C
pub const DEFAULT_EDITOR: &str = "notepad.exe";

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Failed to launch editor {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Starts an external editor without waiting for it
#[cfg_attr(test, mockall::automock)]
pub trait EditorLauncher {
    fn launch(&self) -> Result<(), LaunchError>;
}

/// Spawns a program as a detached child process
#[derive(Debug, Clone)]
pub struct CommandEditorLauncher {
    program: String,
}

impl CommandEditorLauncher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for CommandEditorLauncher {
    fn default() -> Self {
        Self::new(DEFAULT_EDITOR)
    }
}

impl EditorLauncher for CommandEditorLauncher {
    fn launch(&self) -> Result<(), LaunchError> {
        // The child handle is dropped right away; the editor outlives us if needed
        Command::new(&self.program)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|source| LaunchError::Spawn {
                program: self.program.clone(),
                source,
            })
    }
}

pub struct AppController {
    state: AppState,
    rng: Box<dyn RngCore>,
    launcher: Box<dyn EditorLauncher>,
}

impl AppController {
    pub fn new(state: AppState, rng: Box<dyn RngCore>, launcher: Box<dyn EditorLauncher>) -> Self {
        Self {
            state,
            rng,
            launcher,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        self.state.settings()
    }

    pub fn into_settings(self) -> Settings {
        self.state.into_settings()
    }

    /// Processes one event to completion
    pub fn handle(&mut self, event: InputEvent) -> Effect {
        match event {
            InputEvent::Quit => {
                tracing::debug!("Quit requested");
                Effect::Quit
            }
            InputEvent::RandomizeBackground => {
                let color = Rgb::random(&mut *self.rng);
                self.state.settings_mut().current_bg_color = color;
                tracing::debug!(?color, "Background randomized");
                Effect::RepaintBackground
            }
            InputEvent::OpenEditor => {
                if let Err(err) = self.launcher.launch() {
                    tracing::warn!("{err}");
                }
                Effect::None
            }
            InputEvent::Wheel(direction) => {
                let settings = self.state.settings_mut();
                settings.grid_line_color = match direction {
                    WheelDirection::Up => settings.grid_line_color.brighten(WHEEL_COLOR_STEP),
                    WheelDirection::Down => settings.grid_line_color.darken(WHEEL_COLOR_STEP),
                };
                Effect::Redraw
            }
            InputEvent::Click { button, x, y } => {
                let mark = match button {
                    MouseButton::Left => Mark::Circle,
                    MouseButton::Right => Mark::Cross,
                };

                if self.state.mark_pixel(x, y, mark) {
                    Effect::Redraw
                } else {
                    Effect::None
                }
            }
            InputEvent::Resize { width, height } => {
                self.state.resize(width, height);
                Effect::Redraw
            }
        }
    }
}
