use std::time::Duration;

use log::info;

use crate::domain::{Grid, advance};

/// Whether auto-play is stepping the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
}

/// Live repeating timer; exists only while auto-play runs
#[derive(Clone, Copy, Debug, Default)]
struct Timer {
    accumulated: Duration,
}

/// Scheduler drives repeated generations at a fixed period.
/// It owns no clock: the frame loop feeds it elapsed time through `tick`.
#[derive(Clone, Debug)]
pub struct Scheduler {
    period: Duration,
    timer: Option<Timer>,
}

impl Scheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            timer: None,
        }
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    pub fn state(&self) -> SchedulerState {
        if self.timer.is_some() {
            SchedulerState::Running
        } else {
            SchedulerState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Begin auto-play. Starting while already running changes nothing.
    pub fn start(&mut self) {
        if self.timer.is_none() {
            self.timer = Some(Timer::default());
            info!("auto-play started ({}ms period)", self.period.as_millis());
        }
    }

    /// Cancel auto-play. Stopping while idle changes nothing.
    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            info!("auto-play stopped");
        }
    }

    /// Start when idle, stop when running
    pub fn toggle(&mut self) -> SchedulerState {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
        self.state()
    }

    /// Feed elapsed wall time. Once a full period has accumulated, advances
    /// `grid` by one generation and returns `true`. The remainder carries over
    /// so the rate stays at one generation per period whatever the frame rate,
    /// capped at one pending period so a slow frame never queues a burst.
    pub fn tick(&mut self, grid: &mut Grid, elapsed: Duration) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };

        timer.accumulated += elapsed;
        if timer.accumulated < self.period {
            return false;
        }
        timer.accumulated = (timer.accumulated - self.period).min(self.period);
        advance(grid);
        true
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(crate::config::STEP_INTERVAL)
    }
}
