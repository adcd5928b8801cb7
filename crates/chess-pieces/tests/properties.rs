//! Property tests for the rules that hold across every piece.

use chess_pieces::{ChessPiece, Color, Piece, PieceError, PieceKind};
use proptest::prelude::*;

fn color() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::White), Just(Color::Black)]
}

fn kind() -> impl Strategy<Value = PieceKind> {
    (0usize..PieceKind::ALL.len()).prop_map(|i| PieceKind::ALL[i])
}

fn piece() -> impl Strategy<Value = Piece> {
    (kind(), 0i8..8, 0i8..8, color()).prop_filter_map(
        "pawn on its own back rank",
        |(kind, row, column, color)| Piece::new(kind, row, column, color).ok(),
    )
}

fn pawn() -> impl Strategy<Value = Piece> {
    (1i8..7, 0i8..8, color()).prop_map(|(row, column, color)| {
        Piece::new(PieceKind::Pawn, row, column, color).expect("rows 1-6 suit both colors")
    })
}

proptest! {
    #[test]
    fn identity_is_never_a_move(p in piece()) {
        prop_assert!(!p.can_move(p.row(), p.column()));
    }

    #[test]
    fn never_captures_own_color(a in piece(), b in piece()) {
        prop_assume!(a.color() == b.color());
        prop_assert!(!a.can_kill(&b));
    }

    #[test]
    fn non_pawn_capture_is_move_plus_color(a in piece(), b in piece()) {
        prop_assume!(a.kind() != PieceKind::Pawn);
        let expected = a.can_move(b.row(), b.column()) && a.color() != b.color();
        prop_assert_eq!(a.can_kill(&b), expected);
    }

    #[test]
    fn pawn_never_captures_where_it_moves(a in pawn(), b in piece()) {
        prop_assert!(!(a.can_kill(&b) && a.can_move(b.row(), b.column())));
    }

    #[test]
    fn queen_is_rook_or_bishop(row in 0i8..8, column in 0i8..8, to_row in 0i8..8, to_column in 0i8..8, c in color()) {
        let queen = Piece::new(PieceKind::Queen, row, column, c).unwrap();
        let rook = Piece::new(PieceKind::Rook, row, column, c).unwrap();
        let bishop = Piece::new(PieceKind::Bishop, row, column, c).unwrap();
        prop_assert_eq!(
            queen.can_move(to_row, to_column),
            rook.can_move(to_row, to_column) || bishop.can_move(to_row, to_column)
        );
    }

    #[test]
    fn out_of_range_is_rejected(k in kind(), row in any::<i8>(), column in any::<i8>(), c in color()) {
        prop_assume!(!(0..8).contains(&row) || !(0..8).contains(&column));
        prop_assert_eq!(
            Piece::new(k, row, column, c),
            Err(PieceError::InvalidPosition { row, column })
        );
    }

    #[test]
    fn black_pawn_mirrors_white(row in 1i8..7, column in 0i8..8, to_row in 0i8..8, to_column in 0i8..8) {
        let white = Piece::new(PieceKind::Pawn, row, column, Color::White).unwrap();
        let black = Piece::new(PieceKind::Pawn, 7 - row, column, Color::Black).unwrap();
        prop_assert_eq!(
            white.can_move(to_row, to_column),
            black.can_move(7 - to_row, to_column)
        );
    }

    #[test]
    fn targets_agree_with_can_move(p in piece()) {
        let targets: Vec<_> = p.targets().collect();
        prop_assert!(!targets.contains(&p.position()));
        for sq in &targets {
            prop_assert!(p.can_move(sq.row(), sq.column()));
        }
    }
}
