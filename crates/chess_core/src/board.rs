use std::fmt;

use log::debug;

use crate::{ChessError, Color, Move, MoveRecord, Piece, PieceType, Square};
use crate::moves::RookShift;

type Grid = [[Option<Piece>; 8]; 8];

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The position engine: board contents, side to move, en passant and move
/// counters, plus the undo journal of every committed move.
///
/// All mutation goes through [`Board::apply_move`] / [`Board::undo`] (or the
/// dry-run pair), which must nest in strict LIFO order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: Grid,
    pub(crate) turn: Color,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: Vec<MoveRecord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_initial_position();
        board
    }

    /// A board with no pieces, white to move.
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
            turn: Color::White,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    /// Back to the standard starting position with an empty history.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn setup_initial_position(&mut self) {
        for (col, &piece_type) in BACK_RANK.iter().enumerate() {
            self.squares[0][col] = Some(Piece::new(piece_type, Color::Black));
            self.squares[7][col] = Some(Piece::new(piece_type, Color::White));
            self.squares[1][col] = Some(Piece::new(PieceType::Pawn, Color::Black));
            self.squares[6][col] = Some(Piece::new(PieceType::Pawn, Color::White));
        }
    }

    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    pub(crate) fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize].take()
    }

    pub fn current_turn(&self) -> Color {
        self.turn
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Records of committed moves, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Every occupied square with its piece, in row-major order from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get_piece(sq).map(|piece| (sq, piece)))
    }

    /// Owned copy of the grid for consumers that must not alias the live board.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            squares: self.squares,
        }
    }

    /// Applies `mv` and pushes its record onto the history.
    ///
    /// `mv` must come from this board's move generator for the current
    /// position; an empty origin square panics.
    pub fn apply_move(&mut self, mv: Move) -> MoveRecord {
        self.make(mv, true)
    }

    /// Moves the pieces for `mv` without touching the turn, the counters or
    /// the history. The returned record must be handed to
    /// [`Board::undo_move`] before anything else mutates the board.
    pub fn apply_dry_run(&mut self, mv: Move) -> MoveRecord {
        self.make(mv, false)
    }

    fn make(&mut self, mv: Move, commit: bool) -> MoveRecord {
        let moved = match self.get_piece(mv.from) {
            Some(piece) => piece,
            None => panic!("no piece on {} to play {}", mv.from, mv),
        };
        let captured = self.get_piece(mv.to);

        let mut record = MoveRecord {
            mv,
            moved,
            captured,
            en_passant_victim: None,
            rook: None,
            prev_turn: self.turn,
            prev_en_passant: self.en_passant,
            prev_halfmove: self.halfmove_clock,
            prev_fullmove: self.fullmove_number,
            committed: commit,
        };

        if mv.is_en_passant_capture() {
            record.en_passant_victim = self.take_piece(record.en_passant_square());
        }

        if let Some(side) = mv.castle_side() {
            let from = Square {
                row: mv.from.row,
                col: side.rook_from_col(),
            };
            let to = Square {
                row: mv.from.row,
                col: side.rook_to_col(),
            };
            if let Some(rook) = self.take_piece(from) {
                self.set_piece(to, Some(rook.moved()));
                record.rook = Some(RookShift { from, to, rook });
            }
        }

        let placed = match mv.promotion() {
            Some(piece_type) => Piece::new(piece_type, moved.color).moved(),
            None => moved.moved(),
        };
        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(placed));

        self.en_passant = mv.en_passant_target();

        if commit {
            self.turn = self.turn.opponent();
            if moved.piece_type == PieceType::Pawn || captured.is_some() {
                self.halfmove_clock = 0;
            } else {
                self.halfmove_clock += 1;
            }
            if moved.color == Color::Black {
                self.fullmove_number += 1;
            }
            self.history.push(record);
        }

        record
    }

    /// Takes back the most recent committed move.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        self.restore(&record);
        Some(record)
    }

    /// Reverses `record`, which must be the most recently applied move
    /// (committed or dry run).
    pub fn undo_move(&mut self, record: &MoveRecord) {
        if record.committed {
            let top = self.history.pop();
            debug_assert_eq!(top.as_ref(), Some(record), "undo out of order");
        }
        self.restore(record);
    }

    fn restore(&mut self, record: &MoveRecord) {
        self.turn = record.prev_turn;
        self.halfmove_clock = record.prev_halfmove;
        self.fullmove_number = record.prev_fullmove;
        self.en_passant = record.prev_en_passant;

        let mv = record.mv;
        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(record.moved));

        if let Some(victim) = record.en_passant_victim {
            self.set_piece(record.en_passant_square(), Some(victim));
        } else if let Some(captured) = record.captured {
            self.set_piece(mv.to, Some(captured));
        }

        if let Some(shift) = record.rook {
            self.set_piece(shift.to, None);
            self.set_piece(shift.from, Some(shift.rook));
        }
    }

    /// The legal move from `from` to `to` for the side to move, if any.
    pub fn find_move(&mut self, from: Square, to: Square) -> Option<Move> {
        self.generate_legal_moves(self.turn)
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
    }

    /// Checked variant of [`Board::apply_move`] for moves that did not come
    /// from this board's generator.
    pub fn play_move(&mut self, mv: Move) -> Result<MoveRecord, ChessError> {
        if !self.generate_legal_moves(self.turn).contains(&mv) {
            return Err(ChessError::IllegalMove(mv.to_string()));
        }
        debug!("playing {} for {}", mv, self.turn);
        Ok(self.apply_move(mv))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let c = cell.map_or('.', Piece::to_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// Detached copy of the board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSnapshot {
    squares: Grid,
}

impl BoardSnapshot {
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }
}
