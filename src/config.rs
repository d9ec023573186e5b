//! Simulation configuration constants.

use std::time::Duration;

/// Number of columns in the board.
pub const GRID_WIDTH: usize = 32;

/// Number of rows in the board.
pub const GRID_HEIGHT: usize = 32;

/// Delay between generations while auto-play is running.
pub const STEP_INTERVAL: Duration = Duration::from_millis(100);

/// Chance of a cell starting alive when the board is randomized.
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.5;

/// Character marking an alive cell in plain-text pattern files.
pub const ALIVE_MARKER: char = 'O';

/// Leading lines of a pattern file that hold a name/comment rather than cells.
pub const PATTERN_HEADER_LINES: usize = 2;
