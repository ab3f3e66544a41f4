//! Held-key tracker for terminal environments.
//!
//! The simulation reads movement as "which keys are down this tick". Terminals
//! only report key events, and many never report releases, so a direction
//! that is not re-pressed (auto-repeat) within a timeout counts as released.
//! Once a release event has been seen the terminal is trusted and the timeout
//! is no longer applied.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::direction_for_key;
use crate::types::{Direction, MoveInput};

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks which movement directions are currently held.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    /// Milliseconds since the last press/repeat, per held direction.
    since_press_ms: [Option<u32>; 4],
    key_release_timeout_ms: u32,
    release_events_seen: bool,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            since_press_ms: [None; 4],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events_seen: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn release_events_seen(&self) -> bool {
        self.release_events_seen
    }

    /// Feed a key event. Returns true if it was a movement key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_press(key.code),
            KeyEventKind::Release => self.handle_key_release(key.code),
        }
    }

    pub fn handle_key_press(&mut self, code: KeyCode) -> bool {
        let Some(dir) = direction_for_key(code) else {
            return false;
        };
        self.since_press_ms[dir.index()] = Some(0);
        true
    }

    pub fn handle_key_release(&mut self, code: KeyCode) -> bool {
        let Some(dir) = direction_for_key(code) else {
            return false;
        };
        self.release_events_seen = true;
        self.since_press_ms[dir.index()] = None;
        true
    }

    /// Age held keys by one tick, auto-releasing stale ones.
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.release_events_seen {
            return;
        }
        for slot in &mut self.since_press_ms {
            if let Some(ms) = slot {
                let aged = ms.saturating_add(elapsed_ms);
                *slot = if aged > self.key_release_timeout_ms {
                    None
                } else {
                    Some(aged)
                };
            }
        }
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.since_press_ms[dir.index()].is_some()
    }

    /// Movement state for the current tick.
    pub fn move_input(&self) -> MoveInput {
        Direction::ALL
            .iter()
            .filter(|dir| self.is_held(**dir))
            .fold(MoveInput::NONE, |input, dir| input.with(*dir))
    }

    pub fn reset(&mut self) {
        self.since_press_ms = [None; 4];
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
