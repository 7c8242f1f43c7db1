use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use chess_core::{Board, Move};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::search::{search_root, RootWindow};
use crate::EngineError;

const MEDIUM_DEPTH: u32 = 2;
const HARD_DEPTH: u32 = 3;

/// Strength tier of the computer opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Uniformly random legal move.
    #[default]
    Easy,
    /// Two-ply search, every root move searched with a full window.
    Medium,
    /// Three-ply alpha-beta search.
    Hard,
}

impl Difficulty {
    pub fn tier(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn from_tier(tier: u8) -> Option<Self> {
        match tier {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            _ => Err(EngineError::UnknownDifficulty(s.to_string())),
        }
    }
}

#[derive(Clone)]
pub struct ChessAI {
    difficulty: Difficulty,
    rng: StdRng,
}

impl ChessAI {
    pub fn new(difficulty: Difficulty) -> Self {
        ChessAI {
            difficulty,
            rng: StdRng::from_entropy(),
        }
    }

    /// Same as [`ChessAI::new`] but with reproducible random choices.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        ChessAI {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Chooses a move for the side to move, or `None` if it has none.
    ///
    /// The search walks `board` in place and leaves it as it found it.
    pub fn choose_move(&mut self, board: &mut Board) -> Option<Move> {
        let side = board.current_turn();
        let start_time = Instant::now();

        let (depth, window) = match self.difficulty {
            Difficulty::Easy => {
                let moves = board.generate_legal_moves(side);
                let mv = moves.choose(&mut self.rng).copied();
                debug!("{} plays random move {:?} out of {}", side, mv.map(|m| m.to_string()), moves.len());
                return mv;
            }
            Difficulty::Medium => (MEDIUM_DEPTH, RootWindow::FullWidth),
            Difficulty::Hard => (HARD_DEPTH, RootWindow::AlphaBeta),
        };

        let result = search_root(board, depth, window)?;
        debug!(
            "{} plays {} at depth {}: score {}, {} nodes, {} cutoffs, {:?}",
            side,
            result.best_move,
            depth,
            result.score,
            result.stats.nodes,
            result.stats.cutoffs,
            start_time.elapsed()
        );
        Some(result.best_move)
    }
}

impl Default for ChessAI {
    fn default() -> Self {
        ChessAI::new(Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Color, Square};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn difficulty_parses_names_and_tiers() {
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("1".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(
            "expert".parse::<Difficulty>(),
            Err(EngineError::UnknownDifficulty("expert".to_string()))
        );
        for tier in 1..=3 {
            let difficulty = Difficulty::from_tier(tier).unwrap();
            assert_eq!(difficulty.tier(), tier);
            assert_eq!(difficulty.to_string().parse::<Difficulty>().unwrap(), difficulty);
        }
        assert_eq!(Difficulty::from_tier(4), None);
    }

    #[test]
    fn random_tier_plays_legal_moves() {
        let mut board = Board::new();
        let mut ai = ChessAI::with_seed(Difficulty::Easy, 7);
        for _ in 0..10 {
            let turn = board.current_turn();
            let mv = ai.choose_move(&mut board).unwrap();
            assert!(board.generate_legal_moves(turn).contains(&mv));
            board.apply_move(mv);
        }
        assert_eq!(board.history().len(), 10);
    }

    #[test]
    fn same_seed_same_random_game() {
        let play = |seed| {
            let mut board = Board::new();
            let mut ai = ChessAI::with_seed(Difficulty::Easy, seed);
            (0..6)
                .map(|_| {
                    let mv = ai.choose_move(&mut board).unwrap();
                    board.apply_move(mv);
                    mv
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(play(42), play(42));
    }

    #[test]
    fn no_move_when_game_is_over() {
        let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut ai = ChessAI::with_seed(difficulty, 1);
            assert_eq!(ai.choose_move(&mut board), None);
        }
    }

    #[test]
    fn searching_tiers_punish_a_blunder() {
        let fen = "4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1";
        let mut ai = ChessAI::with_seed(Difficulty::Medium, 0);
        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            ai.set_difficulty(difficulty);
            assert_eq!(ai.difficulty(), difficulty);
            let mut board = Board::from_fen(fen).unwrap();
            let mv = ai.choose_move(&mut board).unwrap();
            assert_eq!((mv.from, mv.to), (sq("d1"), sq("d5")), "{difficulty}");
            assert_eq!(board, Board::from_fen(fen).unwrap());
            assert_eq!(board.current_turn(), Color::White);
        }
    }
}
