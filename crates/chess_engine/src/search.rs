use chess_core::{Board, Move};
use log::trace;

use crate::evaluation::{evaluate_with_mobility, Score};

/// Score of a side to move that has been checkmated.
pub const MATED: Score = Score::NEG_INFINITY;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, root excluded.
    pub nodes: u64,
    /// Move loops cut short by a beta cutoff.
    pub cutoffs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Score of `best_move` from the perspective of the side to move.
    pub score: Score,
    pub stats: SearchStats,
}

/// How the root move loop treats the search window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootWindow {
    /// Every root move searched with a fresh, unbounded window.
    FullWidth,
    /// Alpha raised by each root move's score, as in the recursion.
    AlphaBeta,
}

/// Negamax with alpha-beta pruning, scored for the side to move.
///
/// Terminal positions are detected before the depth check: checkmate is
/// [`MATED`], stalemate is zero. The board is explored by apply/undo and is
/// left exactly as it was found.
pub fn negamax(board: &mut Board, depth: u32, mut alpha: Score, beta: Score, stats: &mut SearchStats) -> Score {
    stats.nodes += 1;

    let side = board.current_turn();
    let moves = board.generate_legal_moves(side);
    if moves.is_empty() {
        return if board.is_in_check(side) { MATED } else { 0.0 };
    }

    if depth == 0 {
        return evaluate_with_mobility(board, side, moves.len());
    }

    let mut best = Score::NEG_INFINITY;
    for mv in moves {
        board.apply_move(mv);
        let score = -negamax(board, depth - 1, -beta, -alpha, stats);
        board.undo();

        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }
    best
}

/// Picks the best move for the side to move, searching `depth` plies.
///
/// Ties keep the earliest move in generation order. Returns `None` only when
/// the side to move has no legal move.
pub fn search_root(board: &mut Board, depth: u32, window: RootWindow) -> Option<SearchResult> {
    match window {
        RootWindow::AlphaBeta => {
            search_root_with_window(board, depth, Score::NEG_INFINITY, Score::INFINITY)
        }
        RootWindow::FullWidth => root_loop(board, depth, Score::NEG_INFINITY, Score::INFINITY, false),
    }
}

/// Alpha-beta root search starting from the window `(alpha, beta)`.
pub fn search_root_with_window(board: &mut Board, depth: u32, alpha: Score, beta: Score) -> Option<SearchResult> {
    root_loop(board, depth, alpha, beta, true)
}

fn root_loop(board: &mut Board, depth: u32, mut alpha: Score, beta: Score, narrow: bool) -> Option<SearchResult> {
    let side = board.current_turn();
    let moves = board.generate_legal_moves(side);
    let mut stats = SearchStats::default();
    let mut best: Option<(Move, Score)> = None;

    for mv in moves {
        board.apply_move(mv);
        let (a, b) = if narrow {
            (alpha, beta)
        } else {
            (Score::NEG_INFINITY, Score::INFINITY)
        };
        let score = -negamax(board, depth.saturating_sub(1), -b, -a, &mut stats);
        board.undo();
        trace!("{} {}: {}", side, mv, score);

        // The first move is taken even when it loses, so a mated-in-one
        // side still gets a move.
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
        if narrow {
            if let Some((_, best_score)) = best {
                alpha = alpha.max(best_score);
            }
        }
    }

    best.map(|(best_move, score)| SearchResult {
        best_move,
        score,
        stats,
    })
}
