//! Moore neighborhood queries on a bounded grid.
//!
//! Off-grid positions are dropped rather than wrapped, so edge cells have
//! five neighbors and corner cells three.

use super::{Coord, Grid, GridError};

/// The eight offsets surrounding a cell
#[rustfmt::skip]
const OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

fn adjacent(grid: &Grid, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
    OFFSETS
        .iter()
        .filter_map(move |&(dx, dy)| coord.checked_offset(dx, dy))
        .filter(move |&neighbor| grid.contains(neighbor))
}

fn out_of_bounds(grid: &Grid, coord: Coord) -> GridError {
    GridError::OutOfBounds {
        x: coord.x,
        y: coord.y,
        width: grid.width(),
        height: grid.height(),
    }
}

/// In-bounds coordinates adjacent to `coord`, including diagonals.
/// `coord` itself must lie on the grid.
pub fn neighbors_of(grid: &Grid, coord: Coord) -> Result<Vec<Coord>, GridError> {
    if !grid.contains(coord) {
        return Err(out_of_bounds(grid, coord));
    }
    Ok(adjacent(grid, coord).collect())
}

/// How many of the neighbors of `coord` are alive
pub fn alive_neighbor_count(grid: &Grid, coord: Coord) -> Result<u8, GridError> {
    if !grid.contains(coord) {
        return Err(out_of_bounds(grid, coord));
    }
    Ok(live_neighbors(grid, coord))
}

/// Alive neighbor count for a coordinate already known to be on the grid
pub(super) fn live_neighbors(grid: &Grid, coord: Coord) -> u8 {
    adjacent(grid, coord)
        .filter(|n| grid.status(n.x, n.y).is_ok_and(|cell| cell.is_alive()))
        .count() as u8
}
