//! Terminal dodge runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info};

use dodge::core::{GameConfig, GameSnapshot, GameState};
use dodge::input::{handle_key_event, should_quit, HeldKeys};
use dodge::term::{
    restore_terminal, snapshot_fingerprint, FrameBuffer, GameView, RenderThrottle,
    TerminalRenderer, Viewport,
};
use dodge::types::TICK_MS;
use dodge::AppConfig;

/// Redraw cadence for the pause and game-over screens
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    config.init_logging()?;
    install_panic_hook();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("{e:#}");
    }
    result
}

/// Leave raw mode and the alternate screen before the panic message prints.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        error!("panic: {info}");
        default_hook(info);
    }));
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let rng = config.rng();
    info!(
        "starting: seed={} highscore={} key_release_events={}",
        rng.seed(),
        config.highscore_path.display(),
        term.keyboard_enhanced()
    );
    let mut game = GameState::new(GameConfig::default(), config.highscore_store(), rng);

    let view = GameView::default();
    let mut keys = HeldKeys::new();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snapshot_fingerprint(&snap), !snap.playable()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        info!("quit at score {}", game.score());
                        return Ok(());
                    }

                    keys.handle_key(key);

                    // Ignore terminal auto-repeat for toggles.
                    if key.kind == KeyEventKind::Press {
                        if let Some(action) = handle_key_event(key) {
                            game.apply_action(action);
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            keys.update(TICK_MS);
            game.tick(TICK_MS, keys.move_input());
        }
    }
}
