//! Application state
//!
//! Holds the configuration, the mark grid and the cell geometry. The state is
//! owned by the controller and only ever touched from the window thread.

use crate::config::Settings;
use crate::domain::core::Rect;
use crate::domain::grid::{CellCoords, CellGeometry, Mark, MarkGrid, clamp_cells_count};

/// What the window has to do after an event was processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing visible changed
    None,
    /// Invalidate the client area
    Redraw,
    /// Background color changed: replace the background brush, then redraw
    RepaintBackground,
    /// Leave the message loop
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    settings: Settings,
    marks: MarkGrid,
    geometry: CellGeometry,
}

impl AppState {
    /// Creates the state from loaded settings, clamping the cell count and
    /// deriving the geometry from the configured window size
    pub fn new(mut settings: Settings) -> Self {
        settings.cells_count = clamp_cells_count(settings.cells_count as i64);
        let geometry = CellGeometry::compute(
            settings.window_width,
            settings.window_height,
            settings.cells_count,
        );

        Self {
            settings,
            marks: MarkGrid::new(),
            geometry,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn into_settings(self) -> Settings {
        self.settings
    }

    pub fn marks(&self) -> &MarkGrid {
        &self.marks
    }

    pub fn geometry(&self) -> CellGeometry {
        self.geometry
    }

    pub fn cells_count(&self) -> u32 {
        self.settings.cells_count
    }

    pub fn mark_at(&self, coords: CellCoords) -> Mark {
        self.marks.get(coords)
    }

    /// Places a mark under the given client pixel. Returns true when a cell
    /// changed.
    pub(crate) fn mark_pixel(&mut self, x: i32, y: i32, mark: Mark) -> bool {
        match self.geometry.cell_at(x, y, self.settings.cells_count) {
            Some(coords) => self.marks.place(coords, mark),
            None => false,
        }
    }

    pub(crate) fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Records a new client size and recomputes the cell geometry
    pub(crate) fn resize(&mut self, width: i32, height: i32) {
        self.settings.window_width = width;
        self.settings.window_height = height;
        self.geometry = CellGeometry::compute(width, height, self.settings.cells_count);
    }

    /// Clamps a proposed window rectangle during a live resize so cells
    /// never shrink below their current size
    pub fn constrain_sizing(&self, proposed: Rect) -> Rect {
        let (min_w, min_h) = self.geometry.min_extent(self.settings.cells_count);
        proposed.with_min_size(min_w, min_h)
    }
}
