//! dg-core: dungeon floor generation
//!
//! Generates single dungeon floors: a tunnel backbone laid through six
//! spatial sectors, one randomly placed room per sector (each guaranteed
//! to touch the backbone), and stairway tiles linking floors.
//!
//! This crate contains pure layout logic with no I/O dependencies;
//! rendering a floor is a `Display` impl on [`Grid`].

pub mod floor;

mod consts;
mod error;
mod rng;

pub use consts::*;
pub use error::GenError;
pub use floor::{
    FloorSpec, Grid, Rect, Tile, carve_tunnel, generate_floor, place_rooms, place_stairs,
    sector_bounds,
};
pub use rng::FloorRng;
