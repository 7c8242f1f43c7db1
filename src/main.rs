use anyhow::{Context, Result};
use chess_core::{perft, perft_divide, Board, Color, GameState};
use chess_engine::{ChessAI, Difficulty};
use clap::{Parser, Subcommand};
use log::info;

#[derive(Parser)]
#[command(version, about = "Chess move generator and computer opponent")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count leaf nodes of the legal move tree.
    Perft {
        depth: u32,
        /// Position to start from, standard start if omitted.
        #[arg(long)]
        fen: Option<String>,
        /// Print the node count below every root move.
        #[arg(long)]
        divide: bool,
    },
    /// Ask the computer for a move in a position.
    Best {
        #[arg(long)]
        fen: Option<String>,
        #[arg(long, default_value_t = Difficulty::Hard)]
        difficulty: Difficulty,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Let two computer players play each other from the start.
    Selfplay {
        #[arg(long, default_value_t = Difficulty::Medium)]
        white: Difficulty,
        #[arg(long, default_value_t = Difficulty::Easy)]
        black: Difficulty,
        /// Stop after this many half-moves.
        #[arg(long, default_value_t = 80)]
        max_moves: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn load_board(fen: Option<&str>) -> Result<Board> {
    match fen {
        Some(fen) => Board::from_fen(fen).with_context(|| format!("cannot load position {fen:?}")),
        None => Ok(Board::new()),
    }
}

fn make_ai(difficulty: Difficulty, seed: Option<u64>) -> ChessAI {
    match seed {
        Some(seed) => ChessAI::with_seed(difficulty, seed),
        None => ChessAI::new(difficulty),
    }
}

fn describe(state: GameState) -> String {
    match state {
        GameState::Ongoing { in_check: true } => "ongoing, in check".to_string(),
        GameState::Ongoing { in_check: false } => "ongoing".to_string(),
        GameState::Checkmate { winner } => format!("checkmate, {winner} wins"),
        GameState::Stalemate => "stalemate".to_string(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Perft { depth, fen, divide } => {
            let mut board = load_board(fen.as_deref())?;
            if divide {
                let mut total = 0;
                for (mv, nodes) in perft_divide(&mut board, depth) {
                    println!("{mv}: {nodes}");
                    total += nodes;
                }
                println!("\nNodes searched: {total}");
            } else {
                println!("{}", perft(&mut board, depth));
            }
        }
        Command::Best {
            fen,
            difficulty,
            seed,
        } => {
            let mut board = load_board(fen.as_deref())?;
            let mut ai = make_ai(difficulty, seed);
            match ai.choose_move(&mut board) {
                Some(mv) => println!("{mv}"),
                None => println!("no move ({})", describe(board.game_state())),
            }
        }
        Command::Selfplay {
            white,
            black,
            max_moves,
            seed,
        } => {
            let mut board = Board::new();
            let mut white_ai = make_ai(white, seed);
            let mut black_ai = make_ai(black, seed.map(|s| s.wrapping_add(1)));
            info!("self-play: white {white}, black {black}");

            for _ in 0..max_moves {
                let ai = match board.current_turn() {
                    Color::White => &mut white_ai,
                    Color::Black => &mut black_ai,
                };
                let Some(mv) = ai.choose_move(&mut board) else {
                    break;
                };
                let number = board.fullmove_number();
                board.play_move(mv).with_context(|| format!("engine chose {mv}"))?;
                println!("{number}. {mv}");
            }

            println!("\n{board}\n\n{}\n{}", board.to_fen(), describe(board.game_state()));
        }
    }

    Ok(())
}
