use thiserror::Error;

/// Errors raised at the parsing and validation edges of the core.
///
/// Move generation and search never produce these; they only operate on
/// moves the board generated itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid square notation: {0:?}")]
    InvalidSquare(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),
}
