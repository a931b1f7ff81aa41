//! Floor tiles and the tile grid.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Tile category of one grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Tile {
    /// Unexcavated space
    #[default]
    Blank = 0,
    /// Corridor backbone
    Tunnel = 1,
    /// Room interior
    RoomFloor = 2,
    /// Stairway to the floor above
    StairsUp = 3,
    /// Stairway to the floor below
    StairsDown = 4,
}

impl Tile {
    /// Get the display character for this tile
    pub const fn symbol(&self) -> char {
        match self {
            Tile::Blank => ' ',
            Tile::Tunnel => '#',
            Tile::RoomFloor => '.',
            Tile::StairsUp => '>',
            Tile::StairsDown => '<',
        }
    }

    /// Check if this tile can be walked on
    pub const fn is_passable(&self) -> bool {
        !matches!(self, Tile::Blank)
    }
}

/// An owned, fixed-size grid of tiles, row-major
///
/// All generation passes mutate the grid through [`Grid::set_tile`];
/// tiles only move forward through the blank -> tunnel/room -> stairs
/// progression, never backward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid of `height` rows by `width` columns, all blank
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Blank; width * height],
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read the tile at (row, col)
    pub fn tile_at(&self, row: usize, col: usize) -> Tile {
        self.tiles[self.index(row, col)]
    }

    /// Overwrite the tile at (row, col)
    pub fn set_tile(&mut self, row: usize, col: usize, tile: Tile) {
        let idx = self.index(row, col);
        self.tiles[idx] = tile;
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "tile ({row}, {col}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        row * self.width + col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                write!(f, "{}", self.tile_at(row, col).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
