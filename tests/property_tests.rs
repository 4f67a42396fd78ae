//! Property tests for board and piece invariants

use proptest::prelude::*;

use tetris_stack::core::{rotate_90, shape, Board, Piece};
use tetris_stack::engine::drop_piece;
use tetris_stack::types::{Cell, Rotation, ShapeKind, EMPTY, FILLED};

fn arb_rows(max_w: usize, max_h: usize) -> impl Strategy<Value = Vec<Vec<Cell>>> {
    (1..=max_w, 1..=max_h).prop_flat_map(|(w, h)| {
        prop::collection::vec(
            prop::collection::vec(prop_oneof![Just(EMPTY), Just(FILLED)], w),
            h,
        )
    })
}

fn arb_board() -> impl Strategy<Value = Board> {
    arb_rows(12, 12).prop_map(|rows| Board::from_rows(&rows).unwrap())
}

/// Boards where roughly half of the rows are full.
fn arb_board_with_full_rows() -> impl Strategy<Value = Board> {
    (1usize..=8, 1usize..=12)
        .prop_flat_map(|(w, h)| {
            prop::collection::vec(
                prop_oneof![
                    Just(None::<Vec<Cell>>),
                    prop::collection::vec(prop_oneof![Just(EMPTY), Just(FILLED)], w).prop_map(Some),
                ],
                h,
            )
            .prop_map(move |rows| {
                rows.into_iter()
                    .map(|row| row.unwrap_or_else(|| vec![FILLED; w]))
                    .collect::<Vec<_>>()
            })
        })
        .prop_map(|rows| Board::from_rows(&rows).unwrap())
}

fn arb_catalog_piece() -> impl Strategy<Value = Piece> {
    (0usize..4, 0usize..4).prop_map(|(k, r)| shape(ShapeKind::ALL[k], Rotation::ALL[r]))
}

fn arb_piece() -> impl Strategy<Value = Piece> {
    arb_rows(4, 4)
        .prop_filter("piece needs an occupied cell", |rows| {
            rows.iter().flatten().any(|&c| c == FILLED)
        })
        .prop_map(|rows| Piece::from_rows(&rows).unwrap())
}

/// Reference definition: every piece cell inside the grid, no occupied overlap.
fn fits_brute_force(board: &Board, piece: &Piece, top: i32, left: i32) -> bool {
    for r in 0..piece.height() as i32 {
        for c in 0..piece.width() as i32 {
            let (row, col) = (top + r, left + c);
            if row < 0 || col < 0 || row >= board.height() as i32 || col >= board.width() as i32 {
                return false;
            }
            let piece_cell = piece.get(r as usize, c as usize) == Some(FILLED);
            if piece_cell && board.get(col, row) == Some(FILLED) {
                return false;
            }
        }
    }
    true
}

fn full_rows(board: &Board) -> usize {
    (0..board.height() as usize)
        .filter(|&r| board.is_row_full(r))
        .count()
}

proptest! {
    #[test]
    fn can_place_matches_reference(
        board in arb_board(),
        piece in arb_catalog_piece(),
        top in -5i32..16,
        left in -5i32..16,
    ) {
        prop_assert_eq!(
            board.can_place(&piece, top, left),
            fits_brute_force(&board, &piece, top, left)
        );
    }

    #[test]
    fn fix_writes_exactly_the_footprint(
        board in arb_board(),
        piece in arb_piece(),
        seed_top in 0i32..12,
        seed_left in 0i32..12,
    ) {
        let spare_h = board.height() as i32 - piece.height() as i32;
        let spare_w = board.width() as i32 - piece.width() as i32;
        prop_assume!(spare_h >= 0 && spare_w >= 0);
        let (top, left) = (seed_top % (spare_h + 1), seed_left % (spare_w + 1));

        // Free the footprint so the placement is legal.
        let mut board = board;
        for (r, c) in piece.occupied() {
            board.set(left + c as i32, top + r as i32, EMPTY);
        }
        prop_assert!(board.can_place(&piece, top, left));

        let mut after = board.clone();
        after.fix(&piece, top, left);

        for row in 0..board.height() as i32 {
            for col in 0..board.width() as i32 {
                let (r, c) = (row - top, col - left);
                let covered = r >= 0
                    && c >= 0
                    && piece.get(r as usize, c as usize) == Some(FILLED);
                let expected = if covered { FILLED } else { board.get(col, row).unwrap() };
                prop_assert_eq!(after.get(col, row), Some(expected));
            }
        }
        prop_assert_eq!(
            after.occupied_count(),
            board.occupied_count() + piece.cell_count()
        );
    }

    #[test]
    fn four_rotations_are_identity(piece in arb_piece()) {
        let once = rotate_90(&piece);
        prop_assert_eq!(once.width(), piece.height());
        prop_assert_eq!(once.height(), piece.width());
        prop_assert_eq!(once.cell_count(), piece.cell_count());

        let back = rotate_90(&rotate_90(&rotate_90(&once)));
        prop_assert_eq!(back, piece);
    }

    #[test]
    fn clearing_variants_agree(board in arb_board_with_full_rows()) {
        let expected_count = full_rows(&board);
        let (pure, pure_count) = board.cleared();

        let mut in_place = board.clone();
        let count = in_place.clear_full_rows();

        prop_assert_eq!(count, expected_count);
        prop_assert_eq!(pure_count, expected_count);
        prop_assert_eq!(&in_place, &pure);
        prop_assert_eq!(full_rows(&in_place), 0);
        prop_assert_eq!(
            in_place.occupied_count(),
            board.occupied_count() - expected_count * board.width() as usize
        );
    }

    #[test]
    fn clearing_keeps_survivor_order(board in arb_board_with_full_rows()) {
        let survivors: Vec<Vec<Cell>> = board
            .rows()
            .filter(|row| !row.iter().all(|&c| c == FILLED))
            .map(|row| row.to_vec())
            .collect();

        let (after, cleared) = board.cleared();
        let rows: Vec<&[Cell]> = after.rows().collect();

        for row in &rows[..cleared] {
            prop_assert!(row.iter().all(|&c| c == EMPTY));
        }
        for (got, want) in rows[cleared..].iter().zip(&survivors) {
            prop_assert_eq!(*got, want.as_slice());
        }
    }

    #[test]
    fn drop_clears_or_leaves_board_untouched(
        board in arb_board(),
        piece in arb_catalog_piece(),
    ) {
        let mut after = board.clone();
        match drop_piece(&mut after, &piece) {
            Ok(landing) => {
                prop_assert!(landing.top >= 0);
                prop_assert_eq!(full_rows(&after), 0);
            }
            Err(_) => prop_assert_eq!(&after, &board),
        }
    }
}
