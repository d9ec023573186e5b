// Domain layer - Core simulation logic
pub mod config;
pub mod domain;

// Application layer - Session and auto-play coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{GameState, PatternSource, Scheduler, SchedulerState};
pub use domain::{Cell, Coord, Grid, GridError, Pattern, StampReport, load_pattern, presets};
