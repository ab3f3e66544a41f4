use crate::types::{Phase, Rect};

/// Read-only view of a [`GameState`](crate::GameState), consumed by renderers.
///
/// `snapshot_into` reuses the obstacle buffer, so a long-lived snapshot does not
/// allocate once it has grown to the peak obstacle count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub field: Rect,
    pub player: Rect,
    pub obstacles: Vec<Rect>,
    pub score: u32,
    pub highscore: u32,
    pub phase: Phase,
    pub spawn_interval_ms: u32,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.field = Rect::default();
        self.player = Rect::default();
        self.obstacles.clear();
        self.score = 0;
        self.highscore = 0;
        self.phase = Phase::Running;
        self.spawn_interval_ms = 0;
        self.episode_id = 0;
    }

    pub fn playable(&self) -> bool {
        self.phase.is_running()
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
