//! Terminal game: the engine plays White, the user plays Black.
//!
//! Moves are typed in coordinate notation (`e2e4`, promotions like `a7a8q`)
//! and validated against the rules backend before they touch the board.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use game_core::{PieceKind, PieceValueTable, Rules, Side};
use minimax_engine::MinimaxEngine;
use standard_rules::{BoardStatus, StandardBoard};

fn print_usage() {
    println!("Play chess against the minimax engine (engine is White)");
    println!();
    println!("Usage:");
    println!("  play [--depth N] [--fen FEN] [--values FILE.toml]");
    println!();
    println!("Options:");
    println!("  --depth N        Search depth in plies, 1-8 (default 3)");
    println!("  --fen FEN        Start from a FEN position instead of the initial one");
    println!("  --values FILE    TOML piece-weight table overriding the defaults");
}

struct Options {
    depth: u8,
    fen: Option<String>,
    values: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options {
        depth: 3,
        fen: None,
        values: None,
    };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--depth" | "-d" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--depth requires a value".to_string())?;
                let depth: u8 = value
                    .parse()
                    .map_err(|_| format!("Invalid depth: {}", value))?;
                opts.depth = depth.clamp(1, 8);
                i += 1;
            }
            "--fen" => {
                opts.fen = Some(
                    args.get(i + 1)
                        .ok_or_else(|| "--fen requires a value".to_string())?
                        .clone(),
                );
                i += 1;
            }
            "--values" => {
                opts.values = Some(
                    args.get(i + 1)
                        .ok_or_else(|| "--values requires a value".to_string())?
                        .clone(),
                );
                i += 1;
            }
            "--help" | "-h" => return Err(String::new()),
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(opts)
}

fn piece_char(side: Side, kind: PieceKind) -> char {
    let c = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match side {
        Side::White => c.to_ascii_uppercase(),
        Side::Black => c,
    }
}

fn render(pos: &StandardBoard) -> String {
    let mut squares = ['.'; 64];
    for (sq, piece) in pos.pieces() {
        squares[sq as usize] = piece_char(piece.side, piece.kind);
    }
    let mut out = String::new();
    for rank in (0..8).rev() {
        out.push((b'1' + rank) as char);
        for file in 0..8 {
            out.push(' ');
            out.push(squares[(rank * 8 + file) as usize]);
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h");
    out
}

fn announce_result(pos: &StandardBoard) {
    println!();
    println!("Game over!");
    match pos.status() {
        BoardStatus::Checkmate => match pos.side_to_move() {
            Side::White => println!("Checkmate - Black wins"),
            Side::Black => println!("Checkmate - White wins"),
        },
        BoardStatus::Stalemate => println!("Stalemate - draw"),
        BoardStatus::Ongoing => println!("Position is still playable"),
    }
}

/// Reads moves from the user until one parses and is legal.
fn read_user_move(pos: &StandardBoard) -> Option<standard_rules::StandardMove> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("Your move (e.g. e7e5): ");
        stdout.flush().ok();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return None, // EOF
            Ok(_) => {}
            Err(_) => return None,
        }
        match pos.parse_move(&line) {
            Some(mv) => return Some(mv),
            None => println!("Invalid move, try again."),
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(msg) => {
            if !msg.is_empty() {
                eprintln!("Error: {}", msg);
                eprintln!();
            }
            print_usage();
            process::exit(if msg.is_empty() { 0 } else { 1 });
        }
    };

    let mut pos = match &opts.fen {
        Some(fen) => match StandardBoard::from_fen(fen) {
            Ok(pos) => pos,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => StandardBoard::startpos(),
    };

    let mut engine = match &opts.values {
        Some(path) => match PieceValueTable::load(Path::new(path)) {
            Ok(values) => MinimaxEngine::with_values(values),
            Err(e) => {
                eprintln!("Warning: {}", e);
                eprintln!("Using default piece values");
                MinimaxEngine::new()
            }
        },
        None => MinimaxEngine::new(),
    };

    println!("Depth: {} plies. You play Black.", opts.depth);

    loop {
        println!();
        println!("{}", render(&pos));

        if pos.is_game_over() {
            break;
        }

        if pos.side_to_move() == Side::White {
            let Some(mv) = engine.best_move(&mut pos, opts.depth) else {
                break;
            };
            pos.play(mv);
            println!();
            println!("Engine plays: {} ({} nodes)", mv, engine.nodes());
        } else {
            println!();
            let Some(mv) = read_user_move(&pos) else {
                println!("Input closed, leaving the game.");
                return;
            };
            pos.play(mv);
        }
    }

    announce_result(&pos);
}
