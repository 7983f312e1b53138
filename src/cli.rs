//! Command line interface

use clap::Parser;

use crate::config::{Settings, SettingsStore};
use crate::domain::grid::{DEFAULT_CELLS, clamp_cells_count};

#[derive(Debug, Parser)]
#[command(name = "gridmarks", version, about = "Mark circles and crosses on a resizable grid")]
pub struct Cli {
    /// Cells per side (1-200). Non-numeric values fall back to 4. Only the
    /// first value is used; anything after it is ignored.
    #[arg(
        value_name = "GRID_SIZE",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub grid_size: Vec<String>,
}

impl Cli {
    pub fn cells_count(&self) -> u32 {
        startup_cells_count(self.grid_size.first().map(String::as_str))
    }

    /// Loads the stored settings and applies the startup cell count.
    ///
    /// The command line always wins over the stored `CellsCount`, so a
    /// missing argument resets the grid to the default size.
    pub fn startup_settings(&self, store: &SettingsStore) -> Settings {
        store.load().with_cells_count(self.cells_count())
    }
}

/// Cell count to start with: the argument clamped into `[1, 200]` when it is
/// an integer, the default otherwise
pub fn startup_cells_count(argument: Option<&str>) -> u32 {
    argument
        .and_then(parse_integer)
        .map(clamp_cells_count)
        .unwrap_or(DEFAULT_CELLS)
}

/// Parses an optionally signed run of digits. Values too large for `i64`
/// saturate, they are clamped afterwards anyway.
fn parse_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(match digits.parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    })
}
