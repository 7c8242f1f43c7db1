use crate::{Board, CastleSide, ChessError, Color, Piece, PieceType, Square};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn castle_char(color: Color, side: CastleSide) -> char {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => 'K',
        (Color::White, CastleSide::Queenside) => 'Q',
        (Color::Black, CastleSide::Kingside) => 'k',
        (Color::Black, CastleSide::Queenside) => 'q',
    }
}

impl Board {
    /// Builds a board from Forsyth-Edwards Notation.
    ///
    /// The board tracks castling through `has_moved` flags, so a king or rook
    /// is marked unmoved only when it stands on its home square and the
    /// castling field grants the matching right. The halfmove and fullmove
    /// fields may be omitted.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            return Err(ChessError::InvalidFen(format!(
                "expected 4 to 6 fields, got {}",
                fields.len()
            )));
        }

        let mut board = Board::empty();

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::InvalidFen(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0u8;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(ChessError::InvalidFen(format!("bad empty count '{c}'")));
                    }
                    col = col
                        .checked_add(skip as u8)
                        .filter(|&n| n <= 8)
                        .ok_or_else(|| {
                            ChessError::InvalidFen(format!("rank {} is too long", 8 - row))
                        })?;
                } else {
                    let piece = Piece::from_char(c).ok_or_else(|| {
                        ChessError::InvalidFen(format!("unknown piece letter '{c}'"))
                    })?;
                    let square = Square::new(row as u8, col).ok_or_else(|| {
                        ChessError::InvalidFen(format!("rank {} is too long", 8 - row))
                    })?;
                    board.set_piece(square, Some(piece));
                    col += 1;
                }
            }
            if col != 8 {
                return Err(ChessError::InvalidFen(format!(
                    "rank {} covers {} squares",
                    8 - row,
                    col
                )));
            }
        }

        board.turn = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(ChessError::InvalidFen(format!("bad side to move '{other}'")));
            }
        };

        let rights = fields[2];
        if rights != "-" && !rights.chars().all(|c| "KQkq".contains(c)) {
            return Err(ChessError::InvalidFen(format!("bad castling field '{rights}'")));
        }
        board.mark_moved_pieces(rights);

        board.en_passant = match fields[3] {
            "-" => None,
            square => Some(
                Square::from_algebraic(square)
                    .map_err(|_| ChessError::InvalidFen(format!("bad en passant square '{square}'")))?,
            ),
        };

        let counter = |idx: usize, default: u32| -> Result<u32, ChessError> {
            match fields.get(idx) {
                Some(text) => text
                    .parse()
                    .map_err(|_| ChessError::InvalidFen(format!("bad move counter '{text}'"))),
                None => Ok(default),
            }
        };
        board.halfmove_clock = counter(4, 0)?;
        board.fullmove_number = counter(5, 1)?;

        Ok(board)
    }

    // Kings and rooks count as unmoved only if they keep a castling right.
    // Pawns off their start row have necessarily moved.
    fn mark_moved_pieces(&mut self, rights: &str) {
        for square in Square::all() {
            let Some(mut piece) = self.get_piece(square) else {
                continue;
            };
            let color = piece.color;
            let home_row = square.row == color.back_row();
            let has_right = |side: CastleSide| rights.contains(castle_char(color, side));

            piece.has_moved = match piece.piece_type {
                PieceType::Pawn => square.row != color.pawn_start_row(),
                PieceType::King => {
                    !(home_row
                        && square.col == 4
                        && (has_right(CastleSide::Kingside) || has_right(CastleSide::Queenside)))
                }
                PieceType::Rook => ![CastleSide::Kingside, CastleSide::Queenside]
                    .into_iter()
                    .any(|side| home_row && square.col == side.rook_from_col() && has_right(side)),
                _ => false,
            };
            self.set_piece(square, Some(piece));
        }
    }

    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for row in 0..8u8 {
            let mut empty = 0;
            for col in 0..8u8 {
                match self.get_piece(Square { row, col }) {
                    Some(piece) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if row < 7 {
                placement.push('/');
            }
        }

        let turn = match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        };

        let mut rights = String::new();
        for color in [Color::White, Color::Black] {
            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                if self.castling_available(color, side) {
                    rights.push(castle_char(color, side));
                }
            }
        }
        if rights.is_empty() {
            rights.push('-');
        }

        let en_passant = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{placement} {turn} {rights} {en_passant} {} {}",
            self.halfmove_clock, self.fullmove_number
        )
    }

    // Castling right in the FEN sense: king and rook both unmoved at home,
    // regardless of whether castling is playable right now.
    fn castling_available(&self, color: Color, side: CastleSide) -> bool {
        let row = color.back_row();
        let unmoved = |col: u8, piece_type: PieceType| {
            self.get_piece(Square { row, col }).is_some_and(|p| {
                p.piece_type == piece_type && p.color == color && !p.has_moved
            })
        };
        unmoved(4, PieceType::King) && unmoved(side.rook_from_col(), PieceType::Rook)
    }
}
