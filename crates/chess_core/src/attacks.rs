use log::debug;

use crate::{Board, Color, PieceType, Square};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1), (0, -1),
    (0, 1), (1, -1), (1, 0), (1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.piece_type == PieceType::King && piece.color == color)
            .map(|(sq, _)| sq)
    }

    /// Whether `color`'s king is attacked. A board without that king is
    /// never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => {
                debug!("no {} king on the board, treating as not in check", color);
                false
            }
        }
    }

    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        let holds = |sq: Option<Square>, piece_type: PieceType| {
            sq.and_then(|sq| self.get_piece(sq))
                .is_some_and(|p| p.color == by && p.piece_type == piece_type)
        };

        // An attacking pawn sits one row behind the target, from its own side.
        let pawn_row = -by.pawn_direction();
        if [-1, 1]
            .iter()
            .any(|&dc| holds(square.offset(pawn_row, dc), PieceType::Pawn))
        {
            return true;
        }

        if KNIGHT_OFFSETS
            .iter()
            .any(|&(dr, dc)| holds(square.offset(dr, dc), PieceType::Knight))
        {
            return true;
        }

        if self.ray_hits(square, &ROOK_DIRECTIONS, by, PieceType::Rook)
            || self.ray_hits(square, &BISHOP_DIRECTIONS, by, PieceType::Bishop)
        {
            return true;
        }

        KING_OFFSETS
            .iter()
            .any(|&(dr, dc)| holds(square.offset(dr, dc), PieceType::King))
    }

    // First piece along any ray is a `slider` or queen of colour `by`.
    fn ray_hits(&self, from: Square, directions: &[(i8, i8)], by: Color, slider: PieceType) -> bool {
        directions.iter().any(|&(dr, dc)| {
            let mut current = from.offset(dr, dc);
            while let Some(sq) = current {
                if let Some(piece) = self.get_piece(sq) {
                    return piece.color == by
                        && (piece.piece_type == slider || piece.piece_type == PieceType::Queen);
                }
                current = sq.offset(dr, dc);
            }
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Board, Color, Square};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn pawn_attacks_point_forward() {
        let board = Board::from_fen("4k3/8/8/3p4/8/8/4P3/4K3 w - - 0 1").unwrap();
        // White pawn on e2 covers d3 and f3.
        assert!(board.is_square_attacked(sq("d3"), Color::White));
        assert!(board.is_square_attacked(sq("f3"), Color::White));
        assert!(!board.is_square_attacked(sq("e3"), Color::White));
        // Black pawn on d5 covers c4 and e4, not c6.
        assert!(board.is_square_attacked(sq("e4"), Color::Black));
        assert!(!board.is_square_attacked(sq("c6"), Color::Black));
    }

    #[test]
    fn sliders_stop_at_blockers() {
        let board = Board::from_fen("4k3/8/8/8/1b6/2P5/8/R3K3 w - - 0 1").unwrap();
        assert!(board.is_square_attacked(sq("a8"), Color::White));
        assert!(board.is_square_attacked(sq("d1"), Color::White));
        // Bishop on b4 is blocked by the pawn on c3.
        assert!(!board.is_square_attacked(sq("e1"), Color::Black));
        assert!(board.is_square_attacked(sq("c3"), Color::Black));
        assert!(!board.is_in_check(Color::White));
    }

    #[test]
    fn knights_and_kings() {
        let board = Board::from_fen("4k3/8/8/8/8/5n2/8/4K3 w - - 0 1").unwrap();
        assert!(board.is_in_check(Color::White));
        assert!(board.is_square_attacked(sq("d7"), Color::Black));
        assert!(board.is_square_attacked(sq("f2"), Color::White));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let board = Board::empty();
        assert_eq!(board.find_king(Color::White), None);
        assert!(!board.is_in_check(Color::White));
    }
}
