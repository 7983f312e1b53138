use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::color::Rgb;
use crate::domain::grid::{DEFAULT_CELLS, clamp_cells_count};

pub const DEFAULT_WINDOW_WIDTH: i32 = 320;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 240;
/// File name used when no other path is given, relative to the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "config.txt";

const KEY_CELLS_COUNT: &str = "CellsCount";
const KEY_WINDOW_SIZE: &str = "WindowSize";
const KEY_WINDOW_BG_COLOR: &str = "WindowBgColor";
const KEY_GRID_LINE_COLOR: &str = "GridLineColor";

/// Background used when the `WindowBgColor` record is missing or malformed.
/// Differs from the compiled default in `Settings::default()`.
pub const FALLBACK_BG_COLOR: Rgb = Rgb::WHITE;
pub const FALLBACK_GRID_LINE_COLOR: Rgb = Rgb::RED;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write settings file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persisted application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub cells_count: u32,
    pub window_width: i32,
    pub window_height: i32,
    /// Background loaded at startup
    pub window_bg_color: Rgb,
    pub grid_line_color: Rgb,
    /// Background in use right now; this is what gets saved
    pub current_bg_color: Rgb,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cells_count: DEFAULT_CELLS,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_bg_color: Rgb::BLUE,
            grid_line_color: Rgb::RED,
            current_bg_color: Rgb::BLUE,
        }
    }
}

impl Settings {
    /// Parses the settings file contents.
    ///
    /// Each record falls back to its own default independently when it is
    /// missing or malformed.
    pub fn parse(text: &str) -> Self {
        let cells_count = record_values::<1>(text, KEY_CELLS_COUNT)
            .map(|[count]| clamp_cells_count(count))
            .unwrap_or(DEFAULT_CELLS);

        let (window_width, window_height) = record_values::<2>(text, KEY_WINDOW_SIZE)
            .and_then(|[w, h]| {
                let w = i32::try_from(w).ok().filter(|w| *w > 0)?;
                let h = i32::try_from(h).ok().filter(|h| *h > 0)?;
                Some((w, h))
            })
            .unwrap_or((DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));

        let window_bg_color = record_values::<3>(text, KEY_WINDOW_BG_COLOR)
            .map(|[r, g, b]| Rgb::from_channels(r, g, b))
            .unwrap_or(FALLBACK_BG_COLOR);

        let grid_line_color = record_values::<3>(text, KEY_GRID_LINE_COLOR)
            .map(|[r, g, b]| Rgb::from_channels(r, g, b))
            .unwrap_or(FALLBACK_GRID_LINE_COLOR);

        Self {
            cells_count,
            window_width,
            window_height,
            window_bg_color,
            grid_line_color,
            current_bg_color: window_bg_color,
        }
    }

    /// Replaces the cell count, clamped into `[1, MAX_CELLS]`
    pub fn with_cells_count(mut self, cells_count: u32) -> Self {
        self.cells_count = clamp_cells_count(cells_count as i64);
        self
    }

    /// Serializes the four records, one per line, in their fixed order.
    /// The background is taken from `current_bg_color`.
    pub fn to_file_contents(&self) -> String {
        let bg = self.current_bg_color;
        let line = self.grid_line_color;
        format!(
            "{KEY_CELLS_COUNT}={}\n{KEY_WINDOW_SIZE}={} {}\n{KEY_WINDOW_BG_COLOR}={} {} {}\n{KEY_GRID_LINE_COLOR}={} {} {}\n",
            self.cells_count,
            self.window_width,
            self.window_height,
            bg.r,
            bg.g,
            bg.b,
            line.r,
            line.g,
            line.b,
        )
    }
}

/// Finds the first `key=value` line and parses exactly `N` integers from it
fn record_values<const N: usize>(text: &str, key: &str) -> Option<[i64; N]> {
    let value = text.lines().find_map(|line| {
        let (line_key, value) = line.trim().split_once('=')?;
        (line_key.trim() == key).then_some(value)
    })?;

    let mut values = [0i64; N];
    let mut tokens = value.split_whitespace();
    for slot in values.iter_mut() {
        *slot = tokens.next()?.parse().ok()?;
    }

    if tokens.next().is_some() {
        return None;
    }

    Some(values)
}

/// Reads and writes `Settings` at a fixed path
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads and parses the file, surfacing I/O failures
    pub fn read(&self) -> Result<Settings, SettingsError> {
        let text = fs::read_to_string(&self.path).map_err(|source| SettingsError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(Settings::parse(&text))
    }

    /// Reads the file, falling back to `Settings::default()` when it cannot
    /// be opened
    pub fn load(&self) -> Settings {
        match self.read() {
            Ok(settings) => {
                tracing::debug!(path = %self.path.display(), ?settings, "Loaded settings");
                settings
            }
            Err(err) => {
                tracing::warn!("Failed to open config file. Using default settings. ({err})");
                Settings::default()
            }
        }
    }

    /// Overwrites the file with the given settings
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        fs::write(&self.path, settings.to_file_contents()).map_err(|source| {
            SettingsError::Write {
                path: self.path.clone(),
                source,
            }
        })?;
        tracing::debug!(path = %self.path.display(), "Saved settings");
        Ok(())
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(DEFAULT_SETTINGS_FILE)
    }
}
