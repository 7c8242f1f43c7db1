use log::warn;

use crate::{Board, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Ongoing { in_check: bool },
    Checkmate { winner: Color },
    Stalemate,
}

impl GameState {
    pub fn is_over(self) -> bool {
        !matches!(self, GameState::Ongoing { .. })
    }
}

impl Board {
    /// Status of the game from the side to move's point of view.
    pub fn game_state(&mut self) -> GameState {
        let turn = self.turn;
        if self.find_king(turn).is_none() {
            warn!("no {} king on the board, game state is degenerate", turn);
        }
        let has_moves = !self.generate_legal_moves(turn).is_empty();
        let in_check = self.is_in_check(turn);

        match (has_moves, in_check) {
            (true, _) => GameState::Ongoing { in_check },
            (false, true) => GameState::Checkmate {
                winner: turn.opponent(),
            },
            (false, false) => GameState::Stalemate,
        }
    }
}
