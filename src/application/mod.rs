mod game_state;
mod pattern_source;
mod scheduler;

pub use game_state::GameState;
pub use pattern_source::PatternSource;
pub use scheduler::{Scheduler, SchedulerState};
