//! Floor layout
//!
//! Contains the tile grid, sector geometry, generation parameters, and
//! the four generation passes.

mod generation;
mod grid;
mod rect;
mod spec;

pub use generation::{carve_tunnel, generate_floor, place_rooms, place_stairs};
pub use grid::{Grid, Tile};
pub use rect::{Rect, sector_bounds};
pub use spec::FloorSpec;
