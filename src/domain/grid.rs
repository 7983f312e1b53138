//! Mark grid and cell geometry
//!
//! The grid has a fixed capacity of `MAX_CELLS x MAX_CELLS`; only the top-left
//! `cells_count x cells_count` square is in use at any time. Geometry maps
//! between client pixels and cell coordinates.

use crate::domain::core::Rect;

/// Largest supported number of cells per side
pub const MAX_CELLS: u32 = 200;
/// Cells per side when nothing else is configured
pub const DEFAULT_CELLS: u32 = 4;

/// Clamps an arbitrary cell count into `[1, MAX_CELLS]`
///
/// # Arguments
/// * `value` - Requested cells per side, possibly negative or huge
///
/// # Returns
/// A count usable for the grid
pub fn clamp_cells_count(value: i64) -> u32 {
    value.clamp(1, MAX_CELLS as i64) as u32
}

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Empty,
    Circle,
    Cross,
}

impl Mark {
    /// Numeric code of the mark: 0 = empty, 1 = circle, 2 = cross
    pub fn code(self) -> u8 {
        match self {
            Mark::Empty => 0,
            Mark::Circle => 1,
            Mark::Cross => 2,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

/// Column/row position of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoords {
    pub col: u32,
    pub row: u32,
}

impl CellCoords {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Fixed-capacity square matrix of marks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkGrid {
    cells: Vec<Mark>,
}

impl MarkGrid {
    /// Creates a grid with every cell empty
    pub fn new() -> Self {
        Self {
            cells: vec![Mark::Empty; (MAX_CELLS * MAX_CELLS) as usize],
        }
    }

    fn index(coords: CellCoords) -> Option<usize> {
        if coords.col < MAX_CELLS && coords.row < MAX_CELLS {
            Some((coords.row * MAX_CELLS + coords.col) as usize)
        } else {
            None
        }
    }

    /// Returns the mark at `coords`, `Empty` outside the capacity
    pub fn get(&self, coords: CellCoords) -> Mark {
        Self::index(coords)
            .map(|index| self.cells[index])
            .unwrap_or_default()
    }

    /// Places `mark` into an empty cell.
    ///
    /// Returns false (and changes nothing) when the cell is already marked,
    /// lies outside the capacity, or `mark` is `Empty`.
    pub fn place(&mut self, coords: CellCoords, mark: Mark) -> bool {
        if mark.is_empty() {
            return false;
        }

        match Self::index(coords) {
            Some(index) if self.cells[index].is_empty() => {
                self.cells[index] = mark;
                true
            }
            _ => false,
        }
    }

    /// Iterates the marked cells of the top-left `cells_count` square in
    /// row-major order
    pub fn marked_cells(&self, cells_count: u32) -> impl Iterator<Item = (CellCoords, Mark)> + '_ {
        let count = cells_count.min(MAX_CELLS);
        (0..count)
            .flat_map(move |row| (0..count).map(move |col| CellCoords::new(col, row)))
            .map(|coords| (coords, self.get(coords)))
            .filter(|(_, mark)| !mark.is_empty())
    }
}

impl Default for MarkGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Pixel size of a single cell, derived from the client size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellGeometry {
    pub cell_width: i32,
    pub cell_height: i32,
}

impl CellGeometry {
    /// Integer-divides the client area by the cell count. A zero count gives
    /// a zero geometry.
    pub fn compute(width: i32, height: i32, cells_count: u32) -> Self {
        if cells_count == 0 {
            return Self::default();
        }

        let count = cells_count as i32;
        Self {
            cell_width: width / count,
            cell_height: height / count,
        }
    }

    /// Maps a client pixel to the cell under it.
    ///
    /// Uses floor division; an index whose cell dimension is zero is forced
    /// to 0.
    ///
    /// # Arguments
    /// * `x`, `y` - Client pixel coordinates
    /// * `cells_count` - Cells per side currently in use
    ///
    /// # Returns
    /// The cell, or `None` for negative pixels and cells outside the
    /// `cells_count` square
    pub fn cell_at(&self, x: i32, y: i32, cells_count: u32) -> Option<CellCoords> {
        if x < 0 || y < 0 {
            return None;
        }

        let col = if self.cell_width == 0 { 0 } else { x / self.cell_width };
        let row = if self.cell_height == 0 { 0 } else { y / self.cell_height };
        let (col, row) = (col as u32, row as u32);

        if col < cells_count && row < cells_count {
            Some(CellCoords::new(col, row))
        } else {
            None
        }
    }

    /// Client rectangle covered by a cell
    pub fn cell_rect(&self, coords: CellCoords) -> Rect {
        Rect::new(
            coords.col as i32 * self.cell_width,
            coords.row as i32 * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Smallest client size that still fits `cells_count` cells of this size
    pub fn min_extent(&self, cells_count: u32) -> (i32, i32) {
        let count = cells_count as i32;
        (self.cell_width * count, self.cell_height * count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_cells_count_bounds() {
        assert_eq!(clamp_cells_count(0), 1);
        assert_eq!(clamp_cells_count(-40), 1);
        assert_eq!(clamp_cells_count(17), 17);
        assert_eq!(clamp_cells_count(201), 200);
    }

    #[test]
    fn mark_codes() {
        assert_eq!(Mark::Empty.code(), 0);
        assert_eq!(Mark::Circle.code(), 1);
        assert_eq!(Mark::Cross.code(), 2);
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = MarkGrid::new();
        assert_eq!(grid.get(CellCoords::new(0, 0)), Mark::Empty);
        assert_eq!(grid.get(CellCoords::new(199, 199)), Mark::Empty);
        assert_eq!(grid.marked_cells(MAX_CELLS).count(), 0);
    }

    #[test]
    fn occupied_cell_is_never_overwritten() {
        let mut grid = MarkGrid::new();
        let coords = CellCoords::new(2, 1);

        assert!(grid.place(coords, Mark::Circle));
        assert!(!grid.place(coords, Mark::Cross));
        assert!(!grid.place(coords, Mark::Circle));
        assert_eq!(grid.get(coords), Mark::Circle);
    }

    #[test]
    fn place_outside_capacity_is_rejected() {
        let mut grid = MarkGrid::new();
        assert!(!grid.place(CellCoords::new(MAX_CELLS, 0), Mark::Cross));
        assert_eq!(grid.get(CellCoords::new(MAX_CELLS, 0)), Mark::Empty);
    }

    #[test]
    fn marked_cells_only_cover_active_square() {
        let mut grid = MarkGrid::new();
        grid.place(CellCoords::new(0, 0), Mark::Circle);
        grid.place(CellCoords::new(5, 5), Mark::Cross);

        let small: Vec<_> = grid.marked_cells(4).collect();
        assert_eq!(small, vec![(CellCoords::new(0, 0), Mark::Circle)]);
        assert_eq!(grid.marked_cells(6).count(), 2);
    }

    #[test]
    fn geometry_uses_integer_division() {
        let geometry = CellGeometry::compute(320, 240, 7);
        assert_eq!(geometry.cell_width, 45);
        assert_eq!(geometry.cell_height, 34);
    }

    #[test]
    fn zero_cells_gives_zero_geometry() {
        assert_eq!(CellGeometry::compute(320, 240, 0), CellGeometry::default());
    }

    #[test]
    fn pixel_on_grid_line_maps_to_next_cell() {
        let geometry = CellGeometry::compute(320, 240, 4);
        assert_eq!(geometry.cell_at(80, 60, 4), Some(CellCoords::new(1, 1)));
        assert_eq!(geometry.cell_at(79, 59, 4), Some(CellCoords::new(0, 0)));
        assert_eq!(geometry.cell_at(319, 239, 4), Some(CellCoords::new(3, 3)));
    }

    #[test]
    fn pixel_beyond_last_cell_is_out_of_bounds() {
        // 322 / 4 = 80 leaves a 2px strip on the right that belongs to no cell
        let geometry = CellGeometry::compute(322, 240, 4);
        assert_eq!(geometry.cell_at(321, 10, 4), None);
        assert_eq!(geometry.cell_at(-1, 10, 4), None);
    }

    #[test]
    fn zero_dimension_forces_index_zero() {
        let geometry = CellGeometry::compute(3, 240, 4); // cell_width == 0
        assert_eq!(geometry.cell_at(2, 130, 4), Some(CellCoords::new(0, 2)));
    }

    #[test]
    fn cell_rect_matches_geometry() {
        let geometry = CellGeometry::compute(320, 240, 4);
        assert_eq!(geometry.cell_rect(CellCoords::new(2, 3)), Rect::new(160, 180, 80, 60));
        assert_eq!(geometry.min_extent(4), (320, 240));
    }
}
