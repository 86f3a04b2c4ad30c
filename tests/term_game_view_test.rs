use falling_blocks::core::{GameSnapshot, GameState, ScriptedSource};
use falling_blocks::term::{AnchorY, FrameBuffer, GameView, Rgb, Viewport};
use falling_blocks::types::{Color, ShapeKind};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn empty_snapshot() -> GameSnapshot {
    GameSnapshot::new(10, 20)
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1 the 10x20 grid is 20x20, plus border => 22x22.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = empty_snapshot();
    snap.grid[19 * 10] = Some(Color::Orange);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    for x in [x0, x0 + 1] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from(Color::Orange));
    }
    // The neighbouring board cell is empty.
    assert_ne!(fb.get(x0 + 2, y0).unwrap().ch, '█');
}

#[test]
fn term_view_draws_active_piece_in_its_color() {
    let state = GameState::with_source(10, 20, ScriptedSource::repeat(ShapeKind::O, Color::Green));
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(22, 22));

    // O at (4, 0) covers board columns 4..=5 => terminal columns 9..=12.
    for x in 9..=12 {
        for y in 1..=2 {
            let cell = fb.get(x, y).unwrap();
            assert_eq!(cell.ch, '█', "({}, {})", x, y);
            assert_eq!(cell.style.fg, Rgb::from(Color::Green));
        }
    }
    assert_ne!(fb.get(8, 1).unwrap().ch, '█');
    assert_ne!(fb.get(13, 1).unwrap().ch, '█');
}

#[test]
fn term_view_cell_width_is_configurable() {
    let mut snap = empty_snapshot();
    snap.grid[0] = Some(Color::Red);

    let view = GameView::new(3, 1);
    assert_eq!(view.frame_size(&snap), (32, 22));

    let fb = view.render(&snap, Viewport::new(32, 22));
    assert_eq!(fb.get(31, 0).unwrap().ch, '┐');
    for x in 1..=3 {
        assert_eq!(fb.get(x, 1).unwrap().ch, '█');
    }
    assert_ne!(fb.get(4, 1).unwrap().ch, '█');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    let narrow = screen_text(&view.render(&snap, Viewport::new(22, 22)));
    assert!(!narrow.contains("CONTROLS"));

    let wide = screen_text(&view.render(&snap, Viewport::new(60, 22)));
    assert!(wide.contains("CONTROLS"));
    assert!(wide.contains("rotate"));
    assert!(!wide.contains("restart"));
}

#[test]
fn term_view_shows_game_over_banner() {
    let mut snap = empty_snapshot();
    snap.game_over = true;

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(60, 22));

    // Banner sits on the middle row of the 22-row frame.
    assert!(fb.row_text(11).contains("GAME OVER"));
    assert!(screen_text(&fb).contains("restart"));

    snap.game_over = false;
    let fb = view.render(&snap, Viewport::new(60, 22));
    assert!(!screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = empty_snapshot();
    let view = GameView::default();

    // Board frame is 22 rows tall (20 + border).
    let fb = view.render(&snap, Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = empty_snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    let fb = view.render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_render_into_reuses_and_resizes_buffer() {
    let snap = empty_snapshot();
    let view = GameView::default();

    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(&snap, Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
    assert_eq!(fb, view.render(&snap, Viewport::new(40, 24)));
}
