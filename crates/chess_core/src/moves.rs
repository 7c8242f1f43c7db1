use std::fmt;

use crate::{Color, Piece, PieceType, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Column the rook starts on.
    pub fn rook_from_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Column the rook lands on, next to the king.
    pub fn rook_to_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    pub fn king_to_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }
}

/// What kind of move this is. Captures are not a separate kind: whether the
/// destination is occupied is a property of the board, not the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    /// Pawn advancing two squares from its start row.
    DoublePush,
    EnPassant,
    Castle(CastleSide),
    Promotion(PieceType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self::with_kind(from, to, MoveKind::Normal)
    }

    pub fn with_kind(from: Square, to: Square, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }

    pub fn with_promotion(from: Square, to: Square, promotion: PieceType) -> Self {
        Self::with_kind(from, to, MoveKind::Promotion(promotion))
    }

    pub fn castle(from: Square, side: CastleSide) -> Self {
        let to = Square {
            row: from.row,
            col: side.king_to_col(),
        };
        Self::with_kind(from, to, MoveKind::Castle(side))
    }

    pub fn castle_side(&self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::Castle(side) => Some(side),
            _ => None,
        }
    }

    pub fn promotion(&self) -> Option<PieceType> {
        match self.kind {
            MoveKind::Promotion(piece_type) => Some(piece_type),
            _ => None,
        }
    }

    pub fn is_en_passant_capture(&self) -> bool {
        self.kind == MoveKind::EnPassant
    }

    /// The square skipped by a double pawn push, which becomes the next
    /// en passant target.
    pub fn en_passant_target(&self) -> Option<Square> {
        match self.kind {
            MoveKind::DoublePush => Some(Square {
                row: (self.from.row + self.to.row) / 2,
                col: self.from.col,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion() {
            write!(f, "{}", promotion.to_char())?;
        }
        Ok(())
    }
}

/// Rook relocated as part of castling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RookShift {
    pub from: Square,
    pub to: Square,
    /// Rook as it stood before castling.
    pub rook: Piece,
}

/// Undo journal entry: everything needed to reverse one applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    /// Moving piece as it was before the move.
    pub moved: Piece,
    /// Piece standing on the destination square, if any.
    pub captured: Option<Piece>,
    /// Pawn removed by an en passant capture. Never on `mv.to`.
    pub en_passant_victim: Option<Piece>,
    pub rook: Option<RookShift>,
    pub prev_turn: Color,
    pub prev_en_passant: Option<Square>,
    pub prev_halfmove: u32,
    pub prev_fullmove: u32,
    /// Whether the move was pushed onto the board history.
    pub committed: bool,
}

impl MoveRecord {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some() || self.en_passant_victim.is_some()
    }

    /// Square the en passant victim stood on: beside the capturing pawn's
    /// origin, on the destination file.
    pub fn en_passant_square(&self) -> Square {
        Square {
            row: self.mv.from.row,
            col: self.mv.to.col,
        }
    }
}
