//! Frame-skip policy for static screens.
//!
//! While the game runs every frame differs, so every frame is drawn. On the
//! pause and game-over screens nothing moves, and redrawing at 60 Hz only
//! burns terminal bandwidth.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::GameSnapshot;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Force the next `should_render` call to return true.
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }

    /// Decide whether to render a new frame.
    ///
    /// - When `is_static=false`: always render (no throttling).
    /// - When `is_static=true`: render immediately on fingerprint change, otherwise at most
    ///   once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let changed = fingerprint != self.last_fingerprint;
        let due = now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        if self.has_rendered && is_static && !changed && !due {
            return false;
        }

        self.has_rendered = true;
        self.last_render_ms = now_ms;
        self.last_fingerprint = fingerprint;
        true
    }
}

/// Hash of everything a frame shows, used as a render fingerprint.
pub fn snapshot_fingerprint(snap: &GameSnapshot) -> u64 {
    let mut hasher = DefaultHasher::new();
    snap.hash(&mut hasher);
    hasher.finish()
}
