//! Shape and piece tests - canonical matrices, rotation and spawn placement

use falling_blocks::core::{Piece, PieceSource, ScriptedSource, Shape};
use falling_blocks::types::{Color, ShapeKind};

fn rows(shape: &Shape) -> Vec<Vec<u8>> {
    (0..shape.rows())
        .map(|r| (0..shape.cols()).map(|c| shape.is_filled(r, c) as u8).collect())
        .collect()
}

// ============== Shape Tests ==============

#[test]
fn test_canonical_matrices() {
    assert_eq!(rows(&Shape::canonical(ShapeKind::I)), vec![vec![1, 1, 1, 1]]);
    assert_eq!(rows(&Shape::canonical(ShapeKind::O)), vec![vec![1, 1], vec![1, 1]]);
    assert_eq!(rows(&Shape::canonical(ShapeKind::T)), vec![vec![1, 1, 1], vec![0, 1, 0]]);
    assert_eq!(rows(&Shape::canonical(ShapeKind::L)), vec![vec![1, 1, 1], vec![1, 0, 0]]);
    assert_eq!(rows(&Shape::canonical(ShapeKind::J)), vec![vec![1, 1, 1], vec![0, 0, 1]]);
    assert_eq!(rows(&Shape::canonical(ShapeKind::Z)), vec![vec![1, 1, 0], vec![0, 1, 1]]);
    assert_eq!(rows(&Shape::canonical(ShapeKind::S)), vec![vec![0, 1, 1], vec![1, 1, 0]]);
}

#[test]
fn test_every_shape_has_four_cells() {
    for kind in ShapeKind::ALL {
        assert_eq!(Shape::canonical(kind).filled_count(), 4, "{:?}", kind);
    }
}

// ============== Rotation Tests ==============

#[test]
fn test_rotate_l_clockwise() {
    let rotated = Shape::canonical(ShapeKind::L).rotate();
    let expected = Shape::from_rows(&[&[1, 1], &[0, 1], &[0, 1]]).unwrap();
    assert_eq!(rotated, expected);
}

#[test]
fn test_rotate_i_swaps_dimensions() {
    let vertical = Shape::canonical(ShapeKind::I).rotate();
    assert_eq!((vertical.rows(), vertical.cols()), (4, 1));
    assert_eq!(vertical.rotate(), Shape::canonical(ShapeKind::I));
}

#[test]
fn test_rotate_o_is_identity() {
    let o = Shape::canonical(ShapeKind::O);
    assert_eq!(o.rotate(), o);
}

#[test]
fn test_rotate_t_points_left() {
    // ###      .#
    // .#.  ->  ##
    //          .#
    let expected = Shape::from_rows(&[&[0, 1], &[1, 1], &[0, 1]]).unwrap();
    assert_eq!(Shape::canonical(ShapeKind::T).rotate(), expected);
}

#[test]
fn test_four_rotations_restore_shape() {
    for kind in ShapeKind::ALL {
        let shape = Shape::canonical(kind);
        let back = shape.rotate().rotate().rotate().rotate();
        assert_eq!(back, shape, "{:?}", kind);
    }
}

#[test]
fn test_from_rows_rejects_oversized_matrix() {
    assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
    assert!(Shape::from_rows(&[]).is_none());
}

// ============== Piece Tests ==============

#[test]
fn test_spawn_position() {
    assert_eq!(Piece::spawn_position(10), (4, 0));
    assert_eq!(Piece::spawn_position(12), (5, 0));
}

#[test]
fn test_spawn_draws_from_source() {
    let mut source = ScriptedSource::new([(ShapeKind::Z, Color::Red), (ShapeKind::J, Color::Blue)]);
    let first = Piece::spawn(&mut source, 10);
    let second = Piece::spawn(&mut source, 10);

    assert_eq!(first.shape, Shape::canonical(ShapeKind::Z));
    assert_eq!(first.color, Color::Red);
    assert_eq!(second.shape, Shape::canonical(ShapeKind::J));
    assert_eq!(second.color, Color::Blue);
    assert_eq!((second.x, second.y), (4, 0));
    assert_eq!(source.drawn(), 2);
}

#[test]
fn test_translate_and_rotate_keep_anchor() {
    let piece = Piece::at_spawn(ShapeKind::T, Color::Magenta, 10);

    let moved = piece.translate(-2, 3);
    assert_eq!((moved.x, moved.y), (2, 3));
    assert_eq!(moved.shape, piece.shape);

    let rotated = piece.rotated();
    assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));
    assert_eq!(rotated.color, Color::Magenta);
}

#[test]
fn test_cells_are_absolute() {
    let piece = Piece::at_spawn(ShapeKind::S, Color::Green, 10);
    let cells: Vec<_> = piece.cells().collect();
    assert_eq!(cells, vec![(5, 0), (6, 0), (4, 1), (5, 1)]);
}
