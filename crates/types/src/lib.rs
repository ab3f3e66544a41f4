//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, input mapping, terminal rendering).
//!
//! # Play-field
//!
//! The game runs on a fixed logical canvas measured in pixels:
//!
//! - **Width**: 480 px
//! - **Height**: 640 px
//!
//! The terminal renderer scales this canvas down to character cells.
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SPAWN_INTERVAL_START_MS` | 600 | Initial obstacle spawn interval |
//! | `SPAWN_INTERVAL_MIN_MS` | 250 | Spawn interval floor |
//! | `SPAWN_INTERVAL_STEP_MS` | 40 | Spawn interval reduction per difficulty step |
//! | `DIFFICULTY_STEP_MS` | 5000 | Active play time between difficulty steps |
//!
//! # Examples
//!
//! ```
//! use dodge_types::{GameAction, Phase, Rect};
//!
//! let a = Rect::new(0, 0, 10, 10);
//! let b = Rect::new(5, 5, 10, 10);
//! assert!(a.intersects(&b));
//!
//! // Touching edges do not overlap.
//! assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
//!
//! assert_eq!(Phase::Running.apply(GameAction::Pause), Phase::Paused);
//! assert_eq!(Phase::GameOver.apply(GameAction::Pause), Phase::GameOver);
//! ```

/// Play-field width in logical pixels
pub const FIELD_WIDTH: i32 = 480;

/// Play-field height in logical pixels
pub const FIELD_HEIGHT: i32 = 640;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Player square side length
pub const PLAYER_SIZE: i32 = 36;

/// Player displacement per tick on each axis
pub const PLAYER_SPEED: i32 = 5;

/// Gap between the player's spawn position and the bottom edge
pub const PLAYER_BOTTOM_MARGIN: i32 = 20;

/// Smallest obstacle side length
pub const ENEMY_MIN_SIZE: i32 = 20;

/// Largest obstacle side length
pub const ENEMY_MAX_SIZE: i32 = 50;

/// Slowest fall speed of a freshly spawned obstacle (px per tick)
pub const ENEMY_MIN_SPEED: i32 = 2;

/// Fastest fall speed of a freshly spawned obstacle (px per tick)
pub const ENEMY_MAX_SPEED: i32 = 6;

/// Speed added to every live obstacle on a difficulty step
pub const ENEMY_SPEED_INCREMENT: i32 = 1;

/// Headroom above `ENEMY_MAX_SPEED` that difficulty steps may reach
pub const SPEED_CAP_EXTRA: i32 = 3;

/// Initial obstacle spawn interval
pub const SPAWN_INTERVAL_START_MS: u32 = 600;

/// Spawn interval floor
pub const SPAWN_INTERVAL_MIN_MS: u32 = 250;

/// Spawn interval reduction per difficulty step
pub const SPAWN_INTERVAL_STEP_MS: u32 = 40;

/// Active play time between difficulty steps
pub const DIFFICULTY_STEP_MS: u32 = 5000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_timing_defaults() {
        assert_eq!(FIELD_WIDTH, 480);
        assert_eq!(FIELD_HEIGHT, 640);
        assert_eq!(SPAWN_INTERVAL_START_MS, 600);
        assert_eq!(SPAWN_INTERVAL_MIN_MS, 250);
        assert_eq!(SPAWN_INTERVAL_STEP_MS, 40);
        assert_eq!(DIFFICULTY_STEP_MS, 5000);
        assert_eq!(ENEMY_MAX_SPEED + SPEED_CAP_EXTRA, 9);
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(3, 4, 10, 20);
        assert_eq!(r.right(), 13);
        assert_eq!(r.bottom(), 24);
    }

    #[test]
    fn rect_intersects_is_strict() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(9, 9, 10, 10)));
        assert!(!a.intersects(&Rect::new(10, 0, 5, 5)));
        assert!(!a.intersects(&Rect::new(0, 10, 5, 5)));
        assert!(!a.intersects(&Rect::new(-5, 0, 5, 5)));
    }

    #[test]
    fn rect_clamp_within_moves_inside() {
        let field = Rect::new(0, 0, 100, 100);
        assert_eq!(
            Rect::new(-7, 95, 10, 10).clamp_within(&field),
            Rect::new(0, 90, 10, 10)
        );
        assert_eq!(
            Rect::new(40, 40, 10, 10).clamp_within(&field),
            Rect::new(40, 40, 10, 10)
        );
    }

    #[test]
    fn rect_clamp_larger_than_bounds_aligns_to_origin() {
        let field = Rect::new(0, 0, 10, 10);
        assert_eq!(
            Rect::new(5, 5, 20, 20).clamp_within(&field),
            Rect::new(0, 0, 20, 20)
        );
    }

    #[test]
    fn phase_transition_table() {
        use GameAction::*;
        use Phase::*;

        assert_eq!(Running.apply(Pause), Paused);
        assert_eq!(Paused.apply(Pause), Running);
        assert_eq!(GameOver.apply(Pause), GameOver);

        assert_eq!(Running.apply(Restart), Running);
        assert_eq!(Paused.apply(Restart), Paused);
        assert_eq!(GameOver.apply(Restart), Running);
    }
}

/// Axis-aligned rectangle in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Strict AABB overlap test. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Check if `other` lies fully inside this rectangle
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Move the rectangle so it lies fully inside `bounds`, keeping its size.
    ///
    /// A rectangle larger than `bounds` on an axis is aligned to the bounds'
    /// origin on that axis.
    pub fn clamp_within(&self, bounds: &Rect) -> Rect {
        Rect {
            x: clamp_axis(self.x, self.w, bounds.x, bounds.w),
            y: clamp_axis(self.y, self.h, bounds.y, bounds.h),
            ..*self
        }
    }
}

fn clamp_axis(pos: i32, len: i32, lo: i32, span: i32) -> i32 {
    if len >= span {
        return lo;
    }
    pos.max(lo).min(lo + span - len)
}

/// Movement directions (arrow keys / WASD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn index(&self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }
}

/// Movement keys held during a tick.
///
/// Opposite directions cancel; horizontal and vertical apply independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveInput {
    pub const NONE: MoveInput = MoveInput {
        left: false,
        right: false,
        up: false,
        down: false,
    };

    pub fn with(mut self, dir: Direction) -> Self {
        match dir {
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
        }
        self
    }

    /// Per-axis unit step, each component in `-1..=1`
    pub fn axes(&self) -> (i32, i32) {
        let dx = (self.right as i32) - (self.left as i32);
        let dy = (self.down as i32) - (self.up as i32);
        (dx, dy)
    }
}

/// Discrete game actions triggered by key presses
///
/// Quitting is not an action: the frame loop exits directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Toggle pause (ignored on the game-over screen)
    Pause,
    /// Start a new round (only from the game-over screen)
    Restart,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Game phase
///
/// Only `Running` advances the simulation. `Paused` and `GameOver` freeze it
/// while rendering continues with an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Running,
    Paused,
    GameOver,
}

impl Phase {
    /// Transition table for player actions.
    ///
    /// | From     | Pause    | Restart  |
    /// |----------|----------|----------|
    /// | Running  | Paused   | Running  |
    /// | Paused   | Running  | Paused   |
    /// | GameOver | GameOver | Running  |
    ///
    /// Collision (`Running -> GameOver`) is driven by the simulation, not by
    /// an action.
    pub fn apply(self, action: GameAction) -> Phase {
        match (self, action) {
            (Phase::Running, GameAction::Pause) => Phase::Paused,
            (Phase::Paused, GameAction::Pause) => Phase::Running,
            (Phase::GameOver, GameAction::Restart) => Phase::Running,
            (phase, _) => phase,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "game_over",
        }
    }
}
