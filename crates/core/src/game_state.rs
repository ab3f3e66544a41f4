//! Game state module - manages the complete game state
//!
//! This module ties together all core components: player, obstacles, spawn
//! scheduling, RNG, and highscore persistence. It handles the fixed-timestep
//! simulation, collision, and the pause / game-over / restart lifecycle.

use log::{debug, info};

use crate::config::GameConfig;
use crate::difficulty::DifficultyScheduler;
use crate::entities::{Obstacle, Player};
use crate::highscore::{FileHighscoreStore, HighscoreStore, MemoryHighscoreStore};
use crate::rng::{RandomSource, SeededRng};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Result of a single [`GameState::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running (paused or game over); nothing changed
    Frozen,
    /// Simulation advanced one step
    Advanced,
    /// An obstacle hit the player during this step
    Collided,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = FileHighscoreStore, R = SeededRng> {
    config: GameConfig,
    player: Player,
    obstacles: Vec<Obstacle>,
    scheduler: DifficultyScheduler,
    score: u32,
    highscore: u32,
    phase: Phase,
    /// Monotonic round id (increments on restart).
    episode_id: u32,
    store: S,
    rng: R,
}

impl GameState<MemoryHighscoreStore, SeededRng> {
    /// Default rules, seeded RNG, and a highscore that lives only in memory.
    pub fn in_memory(seed: u64) -> Self {
        Self::new(
            GameConfig::default(),
            MemoryHighscoreStore::default(),
            SeededRng::new(seed),
        )
    }
}

impl<S: HighscoreStore, R: RandomSource> GameState<S, R> {
    /// Create a running game. The highscore is loaded from `store` once, here.
    pub fn new(config: GameConfig, mut store: S, rng: R) -> Self {
        let highscore = store.load();
        Self {
            config,
            player: Player::new(&config),
            obstacles: Vec::new(),
            scheduler: DifficultyScheduler::new(&config),
            score: 0,
            highscore,
            phase: Phase::Running,
            episode_id: 0,
            store,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn spawn_interval_ms(&self) -> u32 {
        self.scheduler.spawn_interval_ms()
    }

    pub fn scheduler(&self) -> &DifficultyScheduler {
        &self.scheduler
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.field = self.config.field();
        out.player = self.player.rect;
        out.obstacles.clear();
        out.obstacles.extend(self.obstacles.iter().map(|o| o.rect));
        out.score = self.score;
        out.highscore = self.highscore;
        out.phase = self.phase;
        out.spawn_interval_ms = self.scheduler.spawn_interval_ms();
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn one random obstacle above the field
    pub fn spawn_obstacle(&mut self) {
        let obstacle = Obstacle::spawn(&self.config, &mut self.rng);
        self.obstacles.push(obstacle);
    }

    /// Add a pre-built obstacle (scripted scenarios, replays).
    pub fn insert_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Index of the first obstacle (insertion order) overlapping the player
    pub fn colliding_obstacle(&self) -> Option<usize> {
        self.obstacles
            .iter()
            .position(|o| o.rect.intersects(&self.player.rect))
    }

    /// Main game tick - advance one fixed step of simulation.
    ///
    /// Order within a step: due spawns, player movement, obstacle fall,
    /// off-screen pruning, scoring, difficulty ramp, collision.
    pub fn tick(&mut self, elapsed_ms: u32, input: MoveInput) -> TickOutcome {
        if !self.phase.is_running() {
            return TickOutcome::Frozen;
        }

        for _ in 0..self.scheduler.take_spawns(elapsed_ms) {
            self.spawn_obstacle();
        }

        let field = self.config.field();
        self.player.handle_input(input, &field);

        for obstacle in &mut self.obstacles {
            obstacle.update();
        }
        let height = self.config.height;
        self.obstacles.retain(|o| !o.is_offscreen(height));

        self.score = self.score.saturating_add(1);

        if self.scheduler.advance(elapsed_ms, &self.config) {
            self.apply_difficulty_step();
        }

        if self.colliding_obstacle().is_some() {
            self.end_game();
            return TickOutcome::Collided;
        }

        TickOutcome::Advanced
    }

    fn apply_difficulty_step(&mut self) {
        let cap = self.config.speed_cap();
        let increment = self.config.enemy_speed_increment;
        for obstacle in &mut self.obstacles {
            obstacle.speed_up(increment, cap);
        }
        debug!(
            "difficulty step {}: spawn interval {}ms",
            self.scheduler.steps(),
            self.scheduler.spawn_interval_ms()
        );
    }

    fn end_game(&mut self) {
        self.phase = Phase::GameOver;
        debug!("game over at score {}", self.score);

        if self.score > self.highscore {
            self.highscore = self.score;
            self.store.save(self.highscore);
            info!("new highscore {}", self.highscore);
        }
    }

    /// Reset everything except the highscore and start a new round.
    fn restart(&mut self) {
        self.player = Player::new(&self.config);
        self.obstacles.clear();
        self.scheduler = DifficultyScheduler::new(&self.config);
        self.score = 0;
        self.phase = Phase::Running;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!("restart (round {})", self.episode_id);
    }

    /// Apply a game action through the phase transition table.
    ///
    /// Returns false when the action is not valid in the current phase.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let from = self.phase;
        let to = from.apply(action);
        if from == to {
            return false;
        }

        if from == Phase::GameOver {
            self.restart();
        } else {
            self.phase = to;
        }
        debug!(
            "{}: {} -> {}",
            action.as_str(),
            from.as_str(),
            self.phase.as_str()
        );
        true
    }
}
