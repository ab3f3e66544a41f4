use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dodge::core::{GameSnapshot, GameState};
use dodge::term::{FrameBuffer, GameView, Viewport};
use dodge::types::{MoveInput, TICK_MS};

/// A game a few seconds in, with a realistic number of obstacles on screen.
fn warmed_up_state() -> GameState<dodge::core::MemoryHighscoreStore> {
    let mut state = GameState::in_memory(12345);
    for _ in 0..200 {
        state.tick(TICK_MS, MoveInput::NONE);
    }
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut state = warmed_up_state();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state = warmed_up_state();
            }
            state.tick(black_box(TICK_MS), black_box(MoveInput::NONE));
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    c.bench_function("spawn_obstacle", |b| {
        let mut state = GameState::in_memory(12345);
        b.iter(|| {
            state.spawn_obstacle();
            if state.obstacles().len() > 64 {
                state = GameState::in_memory(12345);
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = warmed_up_state();
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("render_into_50x34", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), Viewport::new(50, 34), &mut fb);
        })
    });
}

criterion_group!(benches, bench_tick, bench_spawn, bench_render);
criterion_main!(benches);
