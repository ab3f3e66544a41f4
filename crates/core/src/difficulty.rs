//! Spawn timer and difficulty ramp.
//!
//! Both timers only advance during active play. A difficulty step lowers the
//! spawn interval (down to a floor) and re-arms the spawn timer, so the next
//! obstacle arrives one full new interval after the step.

use crate::config::GameConfig;

/// Spawn interval and elapsed-time accumulators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DifficultyScheduler {
    spawn_interval_ms: u32,
    spawn_timer_ms: u32,
    difficulty_timer_ms: u32,
    steps: u32,
}

impl DifficultyScheduler {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            spawn_interval_ms: config.spawn_interval_start_ms.max(1),
            spawn_timer_ms: 0,
            difficulty_timer_ms: 0,
            steps: 0,
        }
    }

    pub fn spawn_interval_ms(&self) -> u32 {
        self.spawn_interval_ms
    }

    pub fn spawn_timer_ms(&self) -> u32 {
        self.spawn_timer_ms
    }

    pub fn difficulty_timer_ms(&self) -> u32 {
        self.difficulty_timer_ms
    }

    /// Number of difficulty steps taken since the last reset
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Advance the spawn timer and return how many obstacles are due.
    pub fn take_spawns(&mut self, elapsed_ms: u32) -> u32 {
        self.spawn_timer_ms = self.spawn_timer_ms.saturating_add(elapsed_ms);
        let due = self.spawn_timer_ms / self.spawn_interval_ms;
        self.spawn_timer_ms %= self.spawn_interval_ms;
        due
    }

    /// Advance the difficulty timer. Returns true when a step fired.
    pub fn advance(&mut self, elapsed_ms: u32, config: &GameConfig) -> bool {
        self.difficulty_timer_ms = self.difficulty_timer_ms.saturating_add(elapsed_ms);
        if self.difficulty_timer_ms < config.difficulty_step_ms {
            return false;
        }

        self.difficulty_timer_ms = 0;
        self.spawn_interval_ms = self
            .spawn_interval_ms
            .saturating_sub(config.spawn_interval_step_ms)
            .max(config.spawn_interval_min_ms)
            .max(1);
        self.spawn_timer_ms = 0;
        self.steps += 1;
        true
    }
}
