use crate::{Board, Move};

/// Counts leaf nodes of the legal move tree `depth` plies deep.
pub fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.generate_legal_moves(board.current_turn());
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        board.apply_move(mv);
        nodes += perft(board, depth - 1);
        board.undo();
    }
    nodes
}

/// Per-root-move breakdown of [`perft`], in generation order.
pub fn perft_divide(board: &mut Board, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let moves = board.generate_legal_moves(board.current_turn());
    moves
        .into_iter()
        .map(|mv| {
            board.apply_move(mv);
            let nodes = perft(board, depth - 1);
            board.undo();
            (mv, nodes)
        })
        .collect()
}
