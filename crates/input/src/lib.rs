//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]s and tracks held
//! movement keys, including on terminals without key-release events.

pub mod handler;
pub mod map;

pub use dodge_types as types;

pub use handler::HeldKeys;
pub use map::{direction_for_key, handle_key_event, should_quit};
