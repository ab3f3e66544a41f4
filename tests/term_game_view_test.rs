use dodge::core::{GameState, Obstacle};
use dodge::term::{FrameBuffer, GameView, Rgb, Viewport};
use dodge::types::{GameAction, MoveInput, Rect, TICK_MS};

// Default scale is 10px per column and 20px per row: the 480x640 field is
// 48x32 cells, 50x34 with the border. At exactly that size the field origin is (1,1).
const VP: Viewport = Viewport { width: 50, height: 34 };

/// Text inside the border on row `y`; index 0 is column 1.
fn field_row(fb: &FrameBuffer, y: u16) -> String {
    (1..fb.width() - 1).map(|x| fb.get(x, y).unwrap().ch).collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::in_memory(1).snapshot();
    let fb = GameView::default().render(&snap, VP);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(49, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 33).unwrap().ch, '└');
    assert_eq!(fb.get(49, 33).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_field_in_larger_viewport() {
    let snap = GameState::in_memory(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(60, 40));

    assert_eq!(fb.get(5, 3).unwrap().ch, '┌');
    assert_eq!(fb.get(54, 36).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_status_bar() {
    let mut snap = GameState::in_memory(1).snapshot();
    snap.score = 1234;
    snap.highscore = 7;
    let fb = GameView::default().render(&snap, VP);

    let status = field_row(&fb, 1);
    assert!(status[1..].starts_with("Score: 1234"), "{status}");
    // "Best: 7" ends one column inside the right edge.
    assert_eq!(status.find("Best: 7"), Some(40), "{status}");
    assert!(status.ends_with("Best: 7 "), "{status}");
    assert!(fb.get(2, 1).unwrap().style.bold);
}

#[test]
fn term_view_draws_player_with_rounded_corners() {
    let snap = GameState::in_memory(1).snapshot();
    let fb = GameView::default().render(&snap, VP);

    // Player spawns at (222,584) 36x36: columns 22..26, rows 29..31.
    assert_eq!(fb.get(23, 30).unwrap().ch, '▗');
    assert_eq!(fb.get(24, 30).unwrap().ch, '█');
    assert_eq!(fb.get(26, 30).unwrap().ch, '▖');
    assert_eq!(fb.get(23, 31).unwrap().ch, '▝');
    assert_eq!(fb.get(26, 31).unwrap().ch, '▘');
    assert_eq!(fb.get(24, 30).unwrap().style.fg, Rgb::new(80, 200, 120));
    assert_eq!(fb.get(22, 30).unwrap().ch, ' ');
}

#[test]
fn term_view_draws_obstacles() {
    let mut state = GameState::in_memory(1);
    state.insert_obstacle(Obstacle::new(Rect::new(100, 200, 30, 40), 2));
    let fb = GameView::default().render(&state.snapshot(), VP);

    assert_eq!(fb.get(11, 11).unwrap().ch, '▗');
    assert_eq!(fb.get(12, 11).unwrap().ch, '█');
    assert_eq!(fb.get(13, 12).unwrap().ch, '▘');
    assert_eq!(fb.get(12, 11).unwrap().style.fg, Rgb::new(230, 70, 70));
}

#[test]
fn term_view_pause_overlay() {
    let mut state = GameState::in_memory(1);
    let running = GameView::default().render(&state.snapshot(), VP);

    state.apply_action(GameAction::Pause);
    let fb = GameView::default().render(&state.snapshot(), VP);

    assert!(field_row(&fb, 16).contains("PAUSED"));
    assert!(field_row(&fb, 18).contains("Press P to resume"));
    assert_eq!(fb.get(22, 16).unwrap().ch, 'P');

    // The playfield is dimmed.
    let before = running.get(5, 25).unwrap().style.bg;
    let after = fb.get(5, 25).unwrap().style.bg;
    assert!(after.r < before.r && after.g < before.g && after.b < before.b);
}

#[test]
fn term_view_game_over_overlay() {
    let mut state = GameState::in_memory(1);
    let p = state.player().rect;
    state.insert_obstacle(Obstacle::new(Rect::new(p.x, p.y - 10, 20, 20), 2));
    state.tick(TICK_MS, MoveInput::NONE);
    assert!(state.game_over());

    let fb = GameView::default().render(&state.snapshot(), VP);
    assert!(field_row(&fb, 15).contains("GAME OVER"));
    assert!(field_row(&fb, 17).contains("Score: 1"));
    assert!(field_row(&fb, 19).contains("R = Restart  |  Esc = Quit"));
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let snap = GameState::in_memory(1).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, VP, &mut fb);
    assert_eq!((fb.width(), fb.height()), (50, 34));
    let first = fb.clone();

    view.render_into(&snap, VP, &mut fb);
    assert_eq!(fb, first);
}

#[test]
fn term_view_tolerates_tiny_viewport() {
    let snap = GameState::in_memory(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(10, 5));
    assert_eq!((fb.width(), fb.height()), (10, 5));
}
