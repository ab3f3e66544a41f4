//! Simulation tuning.

use crate::types::*;

/// Tunable game rules.
///
/// Passed into [`GameState`](crate::GameState) at construction. `Default`
/// reproduces the classic arcade values from [`crate::types`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub player_size: i32,
    pub player_speed: i32,
    pub player_bottom_margin: i32,
    pub enemy_min_size: i32,
    pub enemy_max_size: i32,
    pub enemy_min_speed: i32,
    pub enemy_max_speed: i32,
    pub enemy_speed_increment: i32,
    pub speed_cap_extra: i32,
    pub spawn_interval_start_ms: u32,
    pub spawn_interval_min_ms: u32,
    pub spawn_interval_step_ms: u32,
    pub difficulty_step_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            enemy_min_size: ENEMY_MIN_SIZE,
            enemy_max_size: ENEMY_MAX_SIZE,
            enemy_min_speed: ENEMY_MIN_SPEED,
            enemy_max_speed: ENEMY_MAX_SPEED,
            enemy_speed_increment: ENEMY_SPEED_INCREMENT,
            speed_cap_extra: SPEED_CAP_EXTRA,
            spawn_interval_start_ms: SPAWN_INTERVAL_START_MS,
            spawn_interval_min_ms: SPAWN_INTERVAL_MIN_MS,
            spawn_interval_step_ms: SPAWN_INTERVAL_STEP_MS,
            difficulty_step_ms: DIFFICULTY_STEP_MS,
        }
    }
}

impl GameConfig {
    /// The play-field rectangle anchored at the origin.
    pub fn field(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Highest fall speed a difficulty step may push an obstacle to.
    ///
    /// Looser than `enemy_max_speed`, so old obstacles can outpace new ones.
    pub fn speed_cap(&self) -> i32 {
        self.enemy_max_speed + self.speed_cap_extra
    }

    /// Player spawn rectangle: horizontally centered, just above the bottom edge.
    pub fn player_spawn(&self) -> Rect {
        Rect::new(
            self.width / 2 - self.player_size / 2,
            self.height - self.player_size - self.player_bottom_margin,
            self.player_size,
            self.player_size,
        )
    }
}
