//! Piece tests - templates and rotation

use blockfall::core::{mask_len, rotate_mask, template, Piece};
use blockfall::types::PieceKind;

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::spawn(kind, 3, 0);
        let original = piece;
        for _ in 0..4 {
            piece.rotate();
        }
        assert_eq!(piece, original, "{kind:?}");
    }
}

#[test]
fn test_rotation_keeps_kind_and_cell_count() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::spawn(kind, 3, 0);
        for _ in 0..4 {
            piece.rotate();
            assert_eq!(piece.kind, kind);
            assert_eq!(piece.cells().len(), 4, "{kind:?}");
        }
    }
}

#[test]
fn test_every_template_has_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(mask_len(&template(kind)), 4, "{kind:?}");
    }
}

#[test]
fn test_rotated_does_not_touch_original() {
    let piece = Piece::spawn(PieceKind::S, 0, 0);
    let rotated = piece.rotated();
    assert_eq!(piece.mask, template(PieceKind::S));
    assert_eq!(rotated.mask, rotate_mask(&template(PieceKind::S)));
    assert_ne!(piece.mask, rotated.mask);
}

#[test]
fn test_i_rotates_to_vertical() {
    let piece = Piece::spawn(PieceKind::I, 0, 0).rotated();
    let cells: Vec<_> = piece.cells().into_iter().collect();
    assert_eq!(cells, vec![(3, 0), (3, 1), (3, 2), (3, 3)]);
}

#[test]
fn test_o_rotation_moves_within_box() {
    // No pivot: the O block travels around its 4x4 box.
    let piece = Piece::spawn(PieceKind::O, 0, 0).rotated();
    let cells: Vec<_> = piece.cells().into_iter().collect();
    assert_eq!(cells, vec![(2, 0), (3, 0), (2, 1), (3, 1)]);
}
