// Core chess game logic modules
pub mod attacks;
pub mod board;
pub mod error;
pub mod fen;
pub mod movegen;
pub mod moves;
pub mod perft;
pub mod piece;
pub mod square;
pub mod state;

// Re-export main types for convenience
pub use board::{Board, BoardSnapshot};
pub use error::ChessError;
pub use moves::{CastleSide, Move, MoveKind, MoveRecord};
pub use perft::{perft, perft_divide};
pub use piece::{Color, Piece, PieceType};
pub use square::Square;
pub use state::GameState;
