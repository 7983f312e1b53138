//! Domain logic and core data structures
//!
//! This module contains pure data types for the mark grid, its geometry and
//! colors. Nothing here touches Win32, so it is fully testable off Windows.

pub mod color;
pub mod core;
pub mod grid;
