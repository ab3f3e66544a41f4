//! Player and obstacle entities.

use crate::config::GameConfig;
use crate::rng::RandomSource;
use crate::types::{MoveInput, Rect};

/// Player-controlled square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub rect: Rect,
    pub speed: i32,
}

impl Player {
    /// Create a player at the configured spawn position
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rect: config.player_spawn(),
            speed: config.player_speed,
        }
    }

    /// Apply one tick of held movement keys, then clamp to `field`.
    ///
    /// Diagonal movement is not normalized: both axes move at full speed.
    pub fn handle_input(&mut self, input: MoveInput, field: &Rect) {
        let (dx, dy) = input.axes();
        self.rect.x += dx * self.speed;
        self.rect.y += dy * self.speed;
        self.rect = self.rect.clamp_within(field);
    }
}

/// Falling block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Obstacle {
    pub rect: Rect,
    /// Fall speed in pixels per tick
    pub speed: i32,
}

impl Obstacle {
    pub fn new(rect: Rect, speed: i32) -> Self {
        Self { rect, speed }
    }

    /// Spawn a square obstacle just above the field with random size, column and speed.
    pub fn spawn(config: &GameConfig, rng: &mut impl RandomSource) -> Self {
        let size = rng.range_inclusive(config.enemy_min_size, config.enemy_max_size);
        let x = rng.range_inclusive(0, config.width - size);
        let speed = rng.range_inclusive(config.enemy_min_speed, config.enemy_max_speed);
        Self {
            rect: Rect::new(x, -size, size, size),
            speed,
        }
    }

    /// Fall by one tick
    pub fn update(&mut self) {
        self.rect.y += self.speed;
    }

    /// Raise the fall speed, never past `cap`
    pub fn speed_up(&mut self, increment: i32, cap: i32) {
        self.speed = (self.speed + increment).min(cap);
    }

    /// True once the top edge has passed below the field.
    pub fn is_offscreen(&self, field_height: i32) -> bool {
        self.rect.y > field_height
    }
}
