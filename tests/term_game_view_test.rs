use blockfall::core::{GameState, PieceSnapshot};
use blockfall::term::{AnchorY, BlockLayout, GameView, Viewport};
use blockfall::types::PieceKind;

fn count_blocks(fb: &blockfall::term::FrameBuffer) -> usize {
    (0..fb.height())
        .map(|y| fb.row_text(y).chars().filter(|&c| c == '█').count())
        .sum()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 10 cells * 3 columns by 20 rows, plus border => 32x22
    assert_eq!(view.frame_size(&snap), (32, 22));
    let fb = view.render(&snap, Viewport::new(32, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(31, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(31, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_block_with_gap() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[19 * 10 + 2] = Some(PieceKind::Z);
    snap.piece = None;

    let fb = GameView::default().render(&snap, Viewport::new(32, 22));

    // Inside border: (1,1) origin, each block 3 columns with the last blank.
    let x0 = 1 + 2 * 3;
    let y0 = 1 + 19;
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, ' ');
    assert_eq!(count_blocks(&fb), 2);
}

#[test]
fn term_view_uses_piece_color() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[0] = Some(PieceKind::O);
    snap.piece = None;

    let fb = GameView::default().render(&snap, Viewport::new(32, 22));
    let cell = fb.get(1, 1).unwrap();
    let (r, g, b) = PieceKind::O.rgb();
    assert_eq!((cell.style.fg.r, cell.style.fg.g, cell.style.fg.b), (r, g, b));
}

#[test]
fn term_view_renders_empty_cells_as_dots() {
    let mut snap = GameState::new(1).snapshot();
    snap.piece = None;

    let fb = GameView::default().render(&snap, Viewport::new(32, 22));
    assert_eq!(fb.get(1, 1).unwrap().ch, '·');
    assert_eq!(fb.get(2, 1).unwrap().ch, ' ');
    assert_eq!(count_blocks(&fb), 0);
}

#[test]
fn term_view_renders_score() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;

    let fb = GameView::default().render(&snap, Viewport::new(32, 22));
    assert!(fb.row_text(0).contains("Score: 1234"), "{}", fb.row_text(0));
}

#[test]
fn term_view_skips_piece_cells_above_board() {
    let mut snap = GameState::new(1).snapshot();
    let mut piece = PieceSnapshot::from(blockfall::core::Piece::spawn(PieceKind::O, 3, -2));
    snap.piece = Some(piece);

    let fb = GameView::default().render(&snap, Viewport::new(32, 22));
    assert_eq!(count_blocks(&fb), 0);

    // One row lower the bottom half of the O shows up on row 0.
    piece.y = -1;
    snap.piece = Some(piece);
    let fb = GameView::default().render(&snap, Viewport::new(32, 22));
    assert_eq!(count_blocks(&fb), 4);
    assert_eq!(fb.get(1 + 3 * 3, 1).unwrap().ch, '█');
}

#[test]
fn term_view_centers_and_anchors() {
    let snap = GameState::new(1).snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(40, 30));
    assert_eq!(fb.get(4, 4).unwrap().ch, '┌');

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(40, 30));
    assert_eq!(fb.get(4, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_custom_layout() {
    let mut snap = GameState::new(1).snapshot();
    snap.piece = None;
    snap.board[0] = Some(PieceKind::I);

    let view = GameView::new(BlockLayout::square(2, 1));
    assert_eq!(view.frame_size(&snap), (22, 42));

    let fb = view.render(&snap, Viewport::new(22, 42));
    assert_eq!(count_blocks(&fb), 1);
    assert_eq!(fb.get(1, 1).unwrap().ch, '█');
}
