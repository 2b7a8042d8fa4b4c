//! Property tests relating the validator, the attack oracle, the
//! simulator and the generator.

use std::collections::HashSet;

use chess_core::{Color, ColoredPiece, Move, Piece, Square};
use chess_engine::movegen::{ray, DIAGONALS, ORTHOGONALS};
use chess_engine::{
    generate_legal_moves, leaves_mover_in_check, square_attacked_by, validate_geometry, Board,
    Position,
};
use proptest::prelude::*;

fn arb_color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

fn arb_piece() -> impl Strategy<Value = ColoredPiece> {
    (prop::sample::select(Piece::ALL.to_vec()), arb_color())
        .prop_map(|(piece, color)| ColoredPiece::new(piece, color))
}

fn arb_square() -> impl Strategy<Value = Square> {
    (0usize..64).prop_map(|i| Square::from_index(i).unwrap())
}

/// A populated board with exactly one king per side and no pawn on a back rank.
fn arb_board() -> impl Strategy<Value = Board> {
    (
        arb_square(),
        arb_square(),
        prop::collection::vec((arb_square(), arb_piece()), 0..24),
    )
        .prop_filter("kings need distinct squares", |(w, b, _)| w != b)
        .prop_map(|(white_king, black_king, others)| {
            let mut board = Board::empty();
            for (sq, cp) in others {
                let on_back_rank = sq.rank() == 0 || sq.rank() == 7;
                if cp.piece == Piece::King || (cp.piece == Piece::Pawn && on_back_rank) {
                    continue;
                }
                board.put(sq, cp);
            }
            board.put(white_king, ColoredPiece::white(Piece::King));
            board.put(black_king, ColoredPiece::black(Piece::King));
            board
        })
}

/// Closed-form reachability on an otherwise empty board.
fn reachable_on_empty_board(cp: ColoredPiece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    let df = (to.file() - from.file()).abs();
    let dr = (to.rank() - from.rank()).abs();
    match cp.piece {
        Piece::King => df.max(dr) == 1,
        Piece::Rook => df == 0 || dr == 0,
        Piece::Bishop => df == dr,
        Piece::Queen => df == 0 || dr == 0 || df == dr,
        Piece::Knight => (df, dr) == (1, 2) || (df, dr) == (2, 1),
        Piece::Pawn => {
            let forward = (to.rank() - from.rank()) * cp.color.pawn_direction();
            df == 0
                && (forward == 1 || (forward == 2 && from.rank() == cp.color.pawn_rank()))
                && to.rank() != cp.color.opposite().back_rank()
        }
    }
}

proptest! {
    #[test]
    fn empty_board_matches_closed_form(cp in arb_piece(), from in arb_square()) {
        prop_assume!(cp.piece != Piece::Pawn || (from.rank() != 0 && from.rank() != 7));
        let mut board = Board::empty();
        board.put(from, cp);
        for to in Square::all() {
            prop_assert_eq!(
                validate_geometry(&board, from, to),
                reachable_on_empty_board(cp, from, to),
                "{} from {} to {}", cp, from, to
            );
        }
    }

    #[test]
    fn blocker_cuts_the_ray(
        piece in prop::sample::select(vec![Piece::Rook, Piece::Bishop, Piece::Queen]),
        color in arb_color(),
        blocker_color in arb_color(),
        from in arb_square(),
        dir_index in 0usize..8,
        distance in 1usize..8,
    ) {
        let directions: Vec<(i8, i8)> = match piece {
            Piece::Rook => ORTHOGONALS.to_vec(),
            Piece::Bishop => DIAGONALS.to_vec(),
            _ => ORTHOGONALS.iter().chain(DIAGONALS.iter()).copied().collect(),
        };
        let dir = directions[dir_index % directions.len()];
        let line: Vec<Square> = ray(from, dir).collect();
        prop_assume!(line.len() >= distance);

        let mut board = Board::empty();
        board.put(from, ColoredPiece::new(piece, color));
        board.put(line[distance - 1], ColoredPiece::new(Piece::Knight, blocker_color));

        for (i, &to) in line.iter().enumerate() {
            let expected = match (i + 1).cmp(&distance) {
                std::cmp::Ordering::Less => true,
                std::cmp::Ordering::Equal => blocker_color != color,
                std::cmp::Ordering::Greater => false,
            };
            prop_assert_eq!(validate_geometry(&board, from, to), expected, "square {}", to);
        }
    }

    #[test]
    fn attacks_mirror_reach(
        piece in prop::sample::select(vec![Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen]),
        color in arb_color(),
        from in arb_square(),
        blockers in prop::collection::vec((arb_square(), prop::sample::select(vec![Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen])), 0..12),
    ) {
        // Blockers belong to the other side so they never attack for `color`.
        let mut board = Board::empty();
        for (sq, p) in blockers {
            board.put(sq, ColoredPiece::new(p, color.opposite()));
        }
        board.put(from, ColoredPiece::new(piece, color));

        for to in Square::all().filter(|&to| to != from) {
            prop_assert_eq!(
                validate_geometry(&board, from, to),
                square_attacked_by(&board, to, color),
                "{} {} from {} to {}", color, piece, from, to
            );
        }
    }

    #[test]
    fn simulation_restores_the_board(board in arb_board(), from in arb_square(), to in arb_square()) {
        let before = board.clone();
        let mut board = board;
        let _ = leaves_mover_in_check(&mut board, from, to);
        prop_assert_eq!(board, before);
    }

    #[test]
    fn generator_agrees_with_validator(board in arb_board(), side in arb_color()) {
        let position = Position::new(board.clone(), side);
        let generated: HashSet<Move> = generate_legal_moves(&position).unwrap().iter().collect();

        let mut scratch = board.clone();
        let mut expected = HashSet::new();
        for (from, _) in board.pieces_of(side) {
            for to in Square::all() {
                if validate_geometry(&board, from, to)
                    && !leaves_mover_in_check(&mut scratch, from, to).unwrap()
                {
                    expected.insert(Move::new(from, to));
                }
            }
        }
        prop_assert_eq!(generated, expected);
    }

    #[test]
    fn applied_moves_are_generated_moves(board in arb_board(), side in arb_color(), from in arb_square(), to in arb_square()) {
        let mut position = Position::new(board, side);
        let legal = generate_legal_moves(&position).unwrap();
        let before = position.clone();
        let result = position.apply_move(from, to);
        prop_assert_eq!(result.is_ok(), legal.contains(Move::new(from, to)));
        if result.is_err() {
            prop_assert_eq!(position, before);
        } else {
            prop_assert_eq!(position.side_to_move(), side.opposite());
        }
    }
}
