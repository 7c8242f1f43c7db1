use crate::attacks::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use crate::{Board, CastleSide, Color, Move, MoveKind, Piece, PieceType, Square};

/// Promotion is always to a queen.
pub const PROMOTION_PIECE: PieceType = PieceType::Queen;

const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (-1, 1), (1, -1), (1, 1),
    (-1, 0), (1, 0), (0, -1), (0, 1),
];

impl Board {
    /// Moves `piece` on `square` could make by movement rules alone, without
    /// checking whether its own king is left in check.
    pub fn generate_pseudo_moves(&self, square: Square, piece: Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        match piece.piece_type {
            PieceType::Pawn => self.pawn_moves(square, piece.color, &mut moves),
            PieceType::Knight => self.step_moves(square, piece.color, &KNIGHT_OFFSETS, &mut moves),
            PieceType::Bishop => self.slide_moves(square, piece.color, &BISHOP_DIRECTIONS, &mut moves),
            PieceType::Rook => self.slide_moves(square, piece.color, &ROOK_DIRECTIONS, &mut moves),
            PieceType::Queen => self.slide_moves(square, piece.color, &QUEEN_DIRECTIONS, &mut moves),
            PieceType::King => {
                self.step_moves(square, piece.color, &KING_OFFSETS, &mut moves);
                if !piece.has_moved && !self.is_in_check(piece.color) {
                    for side in [CastleSide::Kingside, CastleSide::Queenside] {
                        if self.can_castle(square, piece.color, side) {
                            moves.push(Move::castle(square, side));
                        }
                    }
                }
            }
        }
        moves
    }

    /// Every move of `color` that does not leave its own king attacked, in
    /// board scan order (a8 to h1), then per-piece generation order.
    pub fn generate_legal_moves(&mut self, color: Color) -> Vec<Move> {
        let mut legal = Vec::new();
        for square in Square::all() {
            let Some(piece) = self.get_piece(square) else {
                continue;
            };
            if piece.color != color {
                continue;
            }
            for mv in self.generate_pseudo_moves(square, piece) {
                let record = self.apply_dry_run(mv);
                let safe = !self.is_in_check(color);
                self.undo_move(&record);
                if safe {
                    legal.push(mv);
                }
            }
        }
        legal
    }

    fn pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let dir = color.pawn_direction();
        let first = moves.len();

        if let Some(one) = from.offset(dir, 0) {
            if self.get_piece(one).is_none() {
                moves.push(Move::new(from, one));
                if from.row == color.pawn_start_row() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.get_piece(two).is_none() {
                            moves.push(Move::with_kind(from, two, MoveKind::DoublePush));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            if self.get_piece(target).is_some_and(|p| p.color != color) {
                moves.push(Move::new(from, target));
            }
            // Only an enemy pawn standing beside us can be taken en passant.
            let victim = Square {
                row: from.row,
                col: target.col,
            };
            if self.en_passant == Some(target)
                && self.get_piece(victim).is_some_and(|p| {
                    p.piece_type == PieceType::Pawn && p.color != color
                })
            {
                moves.push(Move::with_kind(from, target, MoveKind::EnPassant));
            }
        }

        for mv in &mut moves[first..] {
            if mv.to.row == color.promotion_row() {
                mv.kind = MoveKind::Promotion(PROMOTION_PIECE);
            }
        }
    }

    fn step_moves(&self, from: Square, color: Color, offsets: &[(i8, i8)], moves: &mut Vec<Move>) {
        for &(dr, dc) in offsets {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            if self.get_piece(to).map_or(true, |p| p.color != color) {
                moves.push(Move::new(from, to));
            }
        }
    }

    fn slide_moves(&self, from: Square, color: Color, directions: &[(i8, i8)], moves: &mut Vec<Move>) {
        for &(dr, dc) in directions {
            let mut current = from.offset(dr, dc);
            while let Some(to) = current {
                match self.get_piece(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(blocker) => {
                        if blocker.color != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                current = to.offset(dr, dc);
            }
        }
    }

    /// King on its home square, unmoved rook of the same colour in the
    /// corner, empty squares between them, and the king's transit squares
    /// not attacked. Whether the king itself is in check is the caller's
    /// concern.
    fn can_castle(&self, king: Square, color: Color, side: CastleSide) -> bool {
        let row = color.back_row();
        if king != (Square { row, col: 4 }) {
            return false;
        }

        let rook_square = Square {
            row,
            col: side.rook_from_col(),
        };
        let rook_ready = self.get_piece(rook_square).is_some_and(|rook| {
            rook.piece_type == PieceType::Rook && rook.color == color && !rook.has_moved
        });
        if !rook_ready {
            return false;
        }

        let (between, transit): (&[u8], &[u8]) = match side {
            CastleSide::Kingside => (&[5, 6][..], &[5, 6][..]),
            CastleSide::Queenside => (&[1, 2, 3][..], &[2, 3][..]),
        };
        if between
            .iter()
            .any(|&col| self.get_piece(Square { row, col }).is_some())
        {
            return false;
        }

        let enemy = color.opponent();
        !transit
            .iter()
            .any(|&col| self.is_square_attacked(Square { row, col }, enemy))
    }
}
