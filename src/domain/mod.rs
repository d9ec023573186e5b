mod cell;
mod coord;
mod error;
mod generation;
mod grid;
pub mod neighborhood;
mod patterns;

pub use cell::Cell;
pub use coord::Coord;
pub use error::GridError;
pub use generation::{advance, next_generation};
pub use grid::Grid;
pub use neighborhood::{alive_neighbor_count, neighbors_of};
pub use patterns::{Pattern, StampReport, load_pattern, presets};
