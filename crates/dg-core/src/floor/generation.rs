//! Floor generation passes.
//!
//! A floor is built by four passes in fixed order: blank grid, tunnel
//! backbone, one room per sector, stairways. Each pass mutates the
//! shared grid and completes fully before the next begins.

use crate::error::GenError;
use crate::rng::FloorRng;

use super::grid::{Grid, Tile};
use super::rect::{Rect, sector_bounds};
use super::spec::FloorSpec;

/// Generate a complete floor: tunnel backbone, six rooms, stairways
///
/// Deterministic for a given spec and RNG seed. Fails with
/// [`GenError::InvalidConfiguration`] before touching the RNG when the
/// spec cannot be satisfied, and with [`GenError::PlacementExhausted`]
/// if a placement search runs out of attempts.
pub fn generate_floor(spec: &FloorSpec, rng: &mut FloorRng) -> Result<Grid, GenError> {
    spec.validate()?;

    let mut grid = Grid::new(spec.width, spec.height);
    carve_tunnel(&mut grid, spec);
    place_rooms(&mut grid, spec, rng)?;
    place_stairs(&mut grid, spec, rng)?;
    Ok(grid)
}

/// Carve the tunnel backbone
///
/// Two horizontal corridors run along the half-sector rows and two
/// vertical corridors along the half-sector columns, forming overlapping
/// crosses that pass through every sector's vicinity. The grid must
/// match a validated spec.
pub fn carve_tunnel(grid: &mut Grid, spec: &FloorSpec) {
    let half_w = spec.sector_width() / 2;
    let half_h = spec.sector_height() / 2;

    // Horizontal corridors first.
    for row in [half_h, spec.height - half_h] {
        for col in half_w..=spec.width - half_w {
            grid.set_tile(row, col, Tile::Tunnel);
        }
    }

    // Vertical corridors. The upper row bound is exclusive: the lower
    // horizontal corridor already caps them.
    for col in [half_w, spec.width - half_w] {
        for row in half_h..spec.height - half_h {
            grid.set_tile(row, col, Tile::Tunnel);
        }
    }
}

/// Place one room in each of the six sectors
///
/// A candidate room is accepted only when it overlaps the tunnel
/// backbone, which connects every room to the corridor network without
/// a separate reachability pass. Room tiles overwrite tunnel tiles.
pub fn place_rooms(grid: &mut Grid, spec: &FloorSpec, rng: &mut FloorRng) -> Result<(), GenError> {
    for sector in 0..spec.sector_count() {
        place_room_in_sector(grid, spec, sector, rng)?;
    }
    Ok(())
}

fn place_room_in_sector(
    grid: &mut Grid,
    spec: &FloorSpec,
    sector: usize,
    rng: &mut FloorRng,
) -> Result<(), GenError> {
    let bounds = sector_bounds(spec, sector);

    if bounds.width() < spec.min_room_side + 2 || bounds.height() < spec.min_room_side + 2 {
        return Err(GenError::InvalidConfiguration {
            reason: format!("sector {sector} is too small for the minimum room"),
        });
    }

    // Size the room, clamping the configured maxima to what this sector
    // can hold with a one-tile margin.
    let max_w = spec.max_room_width.min(bounds.width() - 2);
    let max_h = spec.max_room_height.min(bounds.height() - 2);
    let room_w = spec.min_room_side + rng.rn2((max_w - spec.min_room_side + 1) as u32) as usize;
    let room_h = spec.min_room_side + rng.rn2((max_h - spec.min_room_side + 1) as u32) as usize;

    // Every top-left corner that keeps the room plus one tile of margin
    // inside the sector; the margin keeps neighboring rooms apart.
    let rows: Vec<usize> = (0..bounds.height() - room_h - 1)
        .map(|j| bounds.row_min + j)
        .collect();
    let cols: Vec<usize> = (0..bounds.width() - room_w - 1)
        .map(|i| bounds.col_min + i)
        .collect();

    // Retry-until-hit: resample the corner until the room rectangle
    // overlaps the tunnel.
    for _ in 0..spec.max_placement_attempts {
        let row = rows[rng.rn2(rows.len() as u32) as usize];
        let col = cols[rng.rn2(cols.len() as u32) as usize];
        let room = Rect::new(row, col, row + room_h, col + room_w);

        if touches_tunnel(grid, &room) {
            for r in room.rows() {
                for c in room.cols() {
                    grid.set_tile(r, c, Tile::RoomFloor);
                }
            }
            return Ok(());
        }
    }

    Err(GenError::PlacementExhausted {
        target: format!("room in sector {sector}"),
        attempts: spec.max_placement_attempts,
    })
}

fn touches_tunnel(grid: &Grid, room: &Rect) -> bool {
    room.rows()
        .any(|r| room.cols().any(|c| grid.tile_at(r, c) == Tile::Tunnel))
}

/// Place the stairways
///
/// The up stairway is always placed; the down stairway only when this is
/// not the deepest floor. Both go on room tiles with no tunnel tile in
/// the surrounding 3x3 block, clamped at the grid edges.
pub fn place_stairs(grid: &mut Grid, spec: &FloorSpec, rng: &mut FloorRng) -> Result<(), GenError> {
    let (row, col) = stair_site(grid, spec, rng, "up stairway")?;
    grid.set_tile(row, col, Tile::StairsUp);

    if !spec.is_deepest() {
        // The up stairway tile is no longer room floor, so the search
        // cannot land on the same coordinate twice.
        let (row, col) = stair_site(grid, spec, rng, "down stairway")?;
        grid.set_tile(row, col, Tile::StairsDown);
    }

    Ok(())
}

fn stair_site(
    grid: &Grid,
    spec: &FloorSpec,
    rng: &mut FloorRng,
    target: &str,
) -> Result<(usize, usize), GenError> {
    for _ in 0..spec.max_placement_attempts {
        let row = rng.rn2(spec.height as u32) as usize;
        let col = rng.rn2(spec.width as u32) as usize;

        if grid.tile_at(row, col) == Tile::RoomFloor && !tunnel_adjacent(grid, row, col) {
            return Ok((row, col));
        }
    }

    Err(GenError::PlacementExhausted {
        target: target.to_string(),
        attempts: spec.max_placement_attempts,
    })
}

fn tunnel_adjacent(grid: &Grid, row: usize, col: usize) -> bool {
    let row_lo = row.saturating_sub(1);
    let row_hi = (row + 1).min(grid.height() - 1);
    let col_lo = col.saturating_sub(1);
    let col_hi = (col + 1).min(grid.width() - 1);

    (row_lo..=row_hi).any(|r| (col_lo..=col_hi).any(|c| grid.tile_at(r, c) == Tile::Tunnel))
}
