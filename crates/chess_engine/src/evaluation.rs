use chess_core::{Board, Color, PieceType};

/// Scores are fractional because of the mobility weight.
pub type Score = f64;

// Standard piece values in centipawns (100 = 1 pawn)
const PAWN_VALUE: i32 = 100;
const KNIGHT_VALUE: i32 = 320;
const BISHOP_VALUE: i32 = 330;
const ROOK_VALUE: i32 = 500;
const QUEEN_VALUE: i32 = 900;
const KING_VALUE: i32 = 20000;

const MOBILITY_WEIGHT: Score = 1.5;
const KING_DANGER_PENALTY: Score = -50.0;
const KING_SAFE_BONUS: Score = 10.0;

/// Static evaluation from `perspective`'s point of view: material, plus
/// mobility, plus king safety.
pub fn evaluate_board(board: &mut Board, perspective: Color) -> Score {
    let own_moves = board.generate_legal_moves(perspective).len();
    evaluate_with_mobility(board, perspective, own_moves)
}

/// [`evaluate_board`] for callers that already hold `perspective`'s legal
/// move count.
pub(crate) fn evaluate_with_mobility(board: &mut Board, perspective: Color, own_moves: usize) -> Score {
    material(board, perspective) as Score
        + mobility(board, perspective, own_moves)
        + king_safety(board, perspective)
}

pub fn piece_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => PAWN_VALUE,
        PieceType::Knight => KNIGHT_VALUE,
        PieceType::Bishop => BISHOP_VALUE,
        PieceType::Rook => ROOK_VALUE,
        PieceType::Queen => QUEEN_VALUE,
        PieceType::King => KING_VALUE,
    }
}

fn material(board: &Board, perspective: Color) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| {
            let value = piece_value(piece.piece_type);
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

// Opponent count is floored at 1 so an almost frozen opponent does not
// swamp the material term.
fn mobility(board: &mut Board, perspective: Color, own_moves: usize) -> Score {
    let opponent_moves = board
        .generate_legal_moves(perspective.opponent())
        .len()
        .max(1);
    MOBILITY_WEIGHT * (own_moves as Score - opponent_moves as Score)
}

fn king_safety(board: &Board, perspective: Color) -> Score {
    match board.find_king(perspective) {
        Some(king) if board.is_square_attacked(king, perspective.opponent()) => KING_DANGER_PENALTY,
        Some(_) => KING_SAFE_BONUS,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_balanced() {
        let mut board = Board::new();
        assert_eq!(evaluate_board(&mut board, Color::White), KING_SAFE_BONUS);
        assert_eq!(evaluate_board(&mut board, Color::Black), KING_SAFE_BONUS);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn material_counts_for_and_against() {
        // White has an extra queen; kings are far apart and safe.
        let mut board = Board::from_fen("k7/8/8/8/8/8/8/Q6K w - - 0 1").unwrap();
        let white = evaluate_board(&mut board, Color::White);
        let black = evaluate_board(&mut board, Color::Black);
        assert!(white > 800.0, "white eval {white}");
        assert!(black < -800.0, "black eval {black}");
    }

    #[test]
    fn mobility_and_king_danger_terms() {
        // Black king in check from the rook on a1, with two flight squares (b8, b7).
        let mut board = Board::from_fen("k7/8/8/8/8/8/8/R6K b - - 0 1").unwrap();
        let white_moves = board.generate_legal_moves(Color::White).len();
        let black_moves = board.generate_legal_moves(Color::Black).len();
        assert_eq!(black_moves, 2);

        let expected = -(ROOK_VALUE as Score)
            + MOBILITY_WEIGHT * (black_moves as Score - white_moves as Score)
            + KING_DANGER_PENALTY;
        assert_eq!(evaluate_board(&mut board, Color::Black), expected);
    }

    #[test]
    fn frozen_opponent_counts_as_one_move() {
        // Black is stalemated: zero moves, floored to one.
        let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 w - - 0 1").unwrap();
        let white_moves = board.generate_legal_moves(Color::White).len() as Score;
        let expected = QUEEN_VALUE as Score + MOBILITY_WEIGHT * (white_moves - 1.0) + KING_SAFE_BONUS;
        assert_eq!(evaluate_board(&mut board, Color::White), expected);
    }

    #[test]
    fn missing_king_scores_no_safety_term() {
        let mut board = Board::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let own = board.generate_legal_moves(Color::Black).len();
        assert_eq!(own, 0);
        // Black: no material but the enemy king, no moves, no king.
        let expected = -(KING_VALUE as Score) + MOBILITY_WEIGHT * (0.0 - 5.0);
        assert_eq!(evaluate_board(&mut board, Color::Black), expected);
    }
}
