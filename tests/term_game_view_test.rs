use columns::core::types::{JewelColor, HIDDEN_ROWS};
use columns::core::{Field, Session};
use columns::term::{GameView, Viewport};

fn screen_text(fb: &columns::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let session = Session::create(13, 6).unwrap();
    let snap = session.snapshot();

    // 6 columns * 2 chars + border = 14 wide, 13 rows + border = 15 tall.
    let fb = GameView::default().render(&snap, Viewport::new(14, 15));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 14).unwrap().ch, '└');
    assert_eq!(fb.get(13, 14).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_frozen_jewel_as_two_chars_wide() {
    let mut session = Session::create(3, 3).unwrap();
    *session.field_mut() = Field::from_visible_rows(&["...", "...", "R.."]).unwrap();
    let snap = session.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(8, 5));
    assert_eq!(fb.row_text(3), "│██····│");
}

#[test]
fn term_view_draws_falling_faller_only_in_visible_rows() {
    let mut session = Session::create(4, 3).unwrap();
    assert!(session.spawn_faller_at(1, [JewelColor::Red, JewelColor::Green, JewelColor::Blue]));
    let snap = session.snapshot();
    assert_eq!(snap.faller.map(|f| f.row), Some(HIDDEN_ROWS));

    let fb = GameView::default().render(&snap, Viewport::new(8, 6));
    // Only the bottom jewel sits on the first visible row.
    assert_eq!(fb.row_text(1), "│··██··│");
    assert_eq!(fb.row_text(2), "│······│");
    let blue = columns::term::game_view::jewel_rgb(JewelColor::Blue);
    assert_eq!(fb.get(3, 1).unwrap().style.fg, blue);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut session = Session::create(13, 6).unwrap();
    session.start();
    session.set_soft_drop(true);
    let snap = session.snapshot();

    let all = screen_text(&GameView::default().render(&snap, Viewport::new(40, 15)));
    assert!(all.contains("STATE"));
    assert!(all.contains("falling"));
    assert!(all.contains("SPEED"));
    assert!(all.contains("fast"));
}

#[test]
fn term_view_skips_side_panel_on_narrow_viewports() {
    let session = Session::create(13, 6).unwrap();
    let all = screen_text(&GameView::default().render(&session.snapshot(), Viewport::new(14, 15)));
    assert!(!all.contains("STATE"));
}

#[test]
fn term_view_centers_board() {
    let session = Session::create(13, 6).unwrap();
    let fb = GameView::default().render(&session.snapshot(), Viewport::new(14, 25));

    // start_y = (25 - 15) / 2 = 5
    assert_eq!(fb.get(0, 5).unwrap().ch, '┌');
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut session = Session::create(1, 1).unwrap();
    session.start();
    while !session.is_game_over() {
        session.step();
    }

    let all = screen_text(&GameView::default().render(&session.snapshot(), Viewport::new(30, 10)));
    assert!(all.contains("GAME OVER"));
}
