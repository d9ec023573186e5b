use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};

use crate::config::DEFAULT_ALIVE_PROBABILITY;
use crate::domain::{Cell, Grid, GridError, Pattern, StampReport, advance};

use super::Scheduler;

/// GameState owns one simulation session.
/// This is the application layer that the presentation layer drives.
pub struct GameState {
    pub grid: Grid,
    pub scheduler: Scheduler,
    pub generation: u64,
    pub alive_probability: f64,
    rng: StdRng,
}

impl GameState {
    /// Create a session with an OS-seeded random source
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::with_rng(width, height, StdRng::from_os_rng())
    }

    /// Create a session whose randomize sequence is reproducible
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: usize, height: usize, rng: StdRng) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            scheduler: Scheduler::default(),
            generation: 0,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            rng,
        })
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Flip one cell (mouse click)
    pub fn toggle_cell(&mut self, x: i32, y: i32) -> Result<Cell, GridError> {
        self.grid.toggle(x, y)
    }

    /// Advance exactly one generation
    pub fn step(mut self) -> Self {
        advance(&mut self.grid);
        self.generation += 1;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.scheduler.toggle();
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.scheduler.stop();
        self.grid.clear();
        self.generation = 0;
        self
    }

    /// Randomize grid and reset generation counter
    pub fn randomize(mut self) -> Self {
        self.scheduler.stop();
        self.grid.randomize(&mut self.rng, self.alive_probability);
        self.generation = 0;
        self
    }

    /// Replace the board with a pattern file's contents, centered
    pub fn load_pattern(&mut self, text: &str) -> StampReport {
        self.load_preset(&Pattern::parse(text))
    }

    /// Replace the board with an already parsed pattern, centered
    pub fn load_preset(&mut self, pattern: &Pattern) -> StampReport {
        self.scheduler.stop();
        self.grid.clear();
        self.generation = 0;
        pattern.stamp(&mut self.grid)
    }

    /// Feed one frame's elapsed time to auto-play
    pub fn tick(mut self, elapsed: Duration) -> Self {
        if self.scheduler.tick(&mut self.grid, elapsed) {
            self.generation += 1;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GRID_HEIGHT, GRID_WIDTH};
    use crate::domain::presets;

    #[test]
    fn test_default_board() {
        let state = GameState::new(GRID_WIDTH, GRID_HEIGHT).unwrap();
        assert_eq!(state.grid.dimensions(), (32, 32));
        assert_eq!(state.grid.population(), 0);
        assert!(!state.is_running());
    }

    #[test]
    fn test_step_counts_generations() {
        let mut state = GameState::with_seed(5, 5, 0).unwrap();
        state.load_preset(&presets::blinker());
        let start = state.grid.clone();
        let state = state.step().step();
        assert_eq!(state.generation, 2);
        assert_eq!(state.grid, start);
    }

    #[test]
    fn test_toggle_running_twice_halts() {
        let state = GameState::with_seed(8, 8, 0).unwrap().toggle_running();
        assert!(state.is_running());
        let state = state.toggle_running();
        assert!(!state.is_running());
    }

    #[test]
    fn test_tick_advances_only_while_running() {
        let mut state = GameState::with_seed(8, 8, 0).unwrap();
        state.load_preset(&presets::blinker());
        let state = state.tick(Duration::from_millis(200));
        assert_eq!(state.generation, 0);

        let state = state.toggle_running().tick(Duration::from_millis(100));
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn test_randomize_is_seeded() {
        let a = GameState::with_seed(16, 16, 99).unwrap().randomize();
        let b = GameState::with_seed(16, 16, 99).unwrap().randomize();
        assert_eq!(a.grid, b.grid);
        assert!(a.grid.population() > 0);
    }

    #[test]
    fn test_clear_stops_and_resets() {
        let state = GameState::with_seed(8, 8, 3)
            .unwrap()
            .randomize()
            .step()
            .toggle_running()
            .clear();
        assert!(!state.is_running());
        assert_eq!(state.generation, 0);
        assert_eq!(state.grid.population(), 0);
    }

    #[test]
    fn test_load_pattern_replaces_board() {
        let mut state = GameState::with_seed(32, 32, 5).unwrap().randomize();
        let report = state.load_pattern("!Name: Glider\n!\n.O.\n..O\nOOO\n");
        assert_eq!(report.placed, 5);
        assert_eq!(state.grid.population(), 5);
        assert_eq!(state.grid.status(16, 15), Ok(Cell::Alive));
    }

    #[test]
    fn test_toggle_cell_bounds() {
        let mut state = GameState::with_seed(4, 4, 0).unwrap();
        assert_eq!(state.toggle_cell(1, 1), Ok(Cell::Alive));
        assert!(state.toggle_cell(4, 1).is_err());
    }
}
