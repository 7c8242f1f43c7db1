pub mod ai;
pub mod error;
pub mod evaluation;
pub mod search;

pub use ai::{ChessAI, Difficulty};
pub use error::EngineError;
pub use evaluation::{evaluate_board, Score};
pub use search::{negamax, search_root, search_root_with_window, RootWindow, SearchResult, SearchStats};
