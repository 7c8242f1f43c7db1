use chess_core::{Board, GameState};
use chess_engine::{search_root, search_root_with_window, ChessAI, Difficulty, RootWindow};

const ITALIAN: &str = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";

#[test]
fn hard_search_is_deterministic() {
    let mut board = Board::from_fen(ITALIAN).unwrap();
    let mut first_ai = ChessAI::with_seed(Difficulty::Hard, 1);
    let mut second_ai = ChessAI::with_seed(Difficulty::Hard, 99);

    let first = first_ai.choose_move(&mut board).unwrap();
    let again = first_ai.choose_move(&mut board).unwrap();
    let other = second_ai.choose_move(&mut board).unwrap();
    assert_eq!(first, again);
    assert_eq!(first, other);
    assert_eq!(board, Board::from_fen(ITALIAN).unwrap());
}

#[test]
fn initial_window_does_not_change_the_answer() {
    let mut board = Board::from_fen(ITALIAN).unwrap();
    let unbounded = search_root(&mut board, 3, RootWindow::AlphaBeta).unwrap();

    for bound in [1.0e9, 1.0e5, 30_000.0] {
        let windowed = search_root_with_window(&mut board, 3, -bound, bound).unwrap();
        assert_eq!(windowed.best_move, unbounded.best_move, "window ±{bound}");
        assert_eq!(windowed.score, unbounded.score, "window ±{bound}");
    }
}

#[test]
fn root_pruning_only_saves_work() {
    let mut board = Board::from_fen(ITALIAN).unwrap();
    let full = search_root(&mut board, 3, RootWindow::FullWidth).unwrap();
    let pruned = search_root(&mut board, 3, RootWindow::AlphaBeta).unwrap();
    assert_eq!(full.best_move, pruned.best_move);
    assert_eq!(full.score, pruned.score);
    assert!(pruned.stats.nodes <= full.stats.nodes);
}

#[test]
fn hard_finds_the_back_rank_mate() {
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
    let mut ai = ChessAI::with_seed(Difficulty::Hard, 0);
    let mv = ai.choose_move(&mut board).unwrap();
    board.apply_move(mv);
    assert!(matches!(board.game_state(), GameState::Checkmate { .. }));
}

#[test]
fn engines_can_play_each_other() {
    let mut board = Board::new();
    let mut white = ChessAI::with_seed(Difficulty::Medium, 3);
    let mut black = ChessAI::with_seed(Difficulty::Easy, 3);

    let mut played = 0;
    for ply in 0..8 {
        if board.game_state().is_over() {
            break;
        }
        let ai = if ply % 2 == 0 { &mut white } else { &mut black };
        let mv = ai.choose_move(&mut board).expect("ongoing game has a move");
        board.play_move(mv).unwrap();
        played += 1;
    }
    assert_eq!(board.history().len(), played);

    for _ in 0..played {
        board.undo();
    }
    assert_eq!(board, Board::new());
}
