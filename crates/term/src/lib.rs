//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Project the 480x640 logical field onto character cells
//! - Only flush cells that changed since the previous frame

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use dodge_core as core;
pub use dodge_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use render_throttle::{snapshot_fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, restore_terminal, TerminalRenderer};
