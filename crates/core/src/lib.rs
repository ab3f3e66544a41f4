//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on UI or terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical obstacle sequences
//! - **Testable**: Randomness and persistence are injected through traits
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`config`]: Tunable rules (field size, speeds, spawn timing)
//! - [`entities`]: Player and obstacle rectangles
//! - [`difficulty`]: Spawn timer and difficulty ramp
//! - [`game_state`]: Complete game state, fixed-step tick, phase transitions
//! - [`highscore`]: Best-effort highscore persistence
//! - [`rng`]: Seedable random source for obstacle generation
//! - [`snapshot`]: Read-only view for renderers
//!
//! # Game Rules
//!
//! - **Movement**: Arrow keys / WASD move the player 5px per tick per axis, clamped to the field
//! - **Obstacles**: Squares of 20-50px spawn above the field and fall at 2-6px per tick
//! - **Spawning**: One obstacle every 600ms of play, 40ms sooner after each difficulty step (floor 250ms)
//! - **Difficulty**: Every 5s of play, live obstacles fall 1px/tick faster (cap 9px/tick)
//! - **Scoring**: One point per tick survived
//! - **Game over**: First overlap between the player and any obstacle
//!
//! # Example
//!
//! ```
//! use dodge_core::{GameState, TickOutcome};
//! use dodge_types::{GameAction, MoveInput, Phase, TICK_MS};
//!
//! let mut game = GameState::in_memory(12345);
//!
//! assert_eq!(game.tick(TICK_MS, MoveInput::default()), TickOutcome::Advanced);
//! assert_eq!(game.score(), 1);
//!
//! game.apply_action(GameAction::Pause);
//! assert_eq!(game.phase(), Phase::Paused);
//! assert_eq!(game.tick(TICK_MS, MoveInput::default()), TickOutcome::Frozen);
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep system:
//! - **Tick Rate**: 16ms (approximately 60 FPS)
//! - Spawn and difficulty timers only accumulate while running
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with elapsed time.

pub mod config;
pub mod difficulty;
pub mod entities;
pub mod game_state;
pub mod highscore;
pub mod rng;
pub mod snapshot;

pub use dodge_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use difficulty::DifficultyScheduler;
pub use entities::{Obstacle, Player};
pub use game_state::{GameState, TickOutcome};
pub use highscore::{
    FileHighscoreStore, HighscoreError, HighscoreStore, MemoryHighscoreStore,
    DEFAULT_HIGHSCORE_FILE,
};
pub use rng::{RandomSource, SeededRng};
pub use snapshot::GameSnapshot;
