//! Console driver for the gambit rules engine.
//!
//! Plays a game from notation typed on stdin, replays token sequences,
//! and runs perft counts or random playouts from the command line.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use gambit_rules::coretypes::MoveInfo;
use gambit_rules::perft::perft;
use gambit_rules::playout::seeded_playout;
use gambit_rules::Game;

/// Play and replay chess games by move notation.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Space separated notation tokens to replay before anything else, e.g. "e4 e5 Nf3".
    #[arg(short, long)]
    replay: Option<String>,

    /// Name of the White player.
    #[arg(long, default_value = "White")]
    white: String,

    /// Name of the Black player.
    #[arg(long, default_value = "Black")]
    black: String,

    /// If set, debug information strings are printed for every move.
    #[arg(short, long, default_value = "false")]
    debug: bool,

    /// Count move paths to this depth from the current position, then exit.
    #[arg(long)]
    perft: Option<u8>,

    /// Number of threads perft may use.
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Play this many random moves, print the game, then exit.
    #[arg(long)]
    playout: Option<usize>,

    /// Seed for --playout. A random seed is used if not provided.
    #[arg(long, requires = "playout")]
    seed: Option<u64>,
}

#[derive(Debug, PartialEq, Eq)]
enum InputKind {
    Exit,
    Newgame,
    Help,
    Moves,
    History,
    Board,
    Replay(String),
    Token(String),
    Empty,
}

impl From<&str> for InputKind {
    fn from(s: &str) -> Self {
        let s = s.trim();
        let (command, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        if command == "replay" {
            return Self::Replay(rest.trim().to_string());
        }
        match s {
            "" => Self::Empty,
            "exit" | "quit" => Self::Exit,
            "newgame" | "ng" => Self::Newgame,
            "help" => Self::Help,
            "moves" => Self::Moves,
            "history" => Self::History,
            "board" | "d" => Self::Board,
            token => Self::Token(token.to_string()),
        }
    }
}

/// Print a debugging string if debugging is enabled.
fn debug(can_debug: bool, s: &str) -> io::Result<()> {
    if can_debug {
        let mut handle = io::stdout().lock();
        writeln!(handle, "info string debug {s}")?;
        handle.flush()
    } else {
        Ok(())
    }
}

/// Print an error string.
fn error(s: &str) -> io::Result<()> {
    let mut handle = io::stdout().lock();
    writeln!(handle, "info string error {s}")?;
    handle.flush()
}

fn report_move(can_debug: bool, info: &MoveInfo) -> io::Result<()> {
    debug(
        can_debug,
        &format!("{info} {:?} {:?}", info.piece_kind(), info.move_kind()),
    )
}

fn print_help() {
    println!("Commands:");
    println!("newgame | ng    => Begin a new game.");
    println!("replay <tokens> => Begin a new game and play the given moves.");
    println!("moves           => List the moves available to the side to move.");
    println!("history         => Print the moves played so far.");
    println!("board | d       => Print the board.");
    println!("help            => Print this help text.");
    println!("exit            => End the game.");
    println!("\nTo make a move, enter its notation.");
    println!("Examples: e4, Nf3, exd5, O-Og1 (castle kingside), O-O-Oc8 (castle queenside).");
}

fn print_moves(game: &Game) {
    let mut tokens: Vec<String> = game
        .moves()
        .into_iter()
        .filter_map(|move_| game.notation(move_))
        .collect();
    tokens.sort();
    println!("{} moves: {}", tokens.len(), tokens.join(" "));
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut game = Game::with_players(cli.white.as_str(), cli.black.as_str());

    if let Some(tokens) = &cli.replay {
        game.initialize_from_notation(tokens)
            .with_context(|| format!("could not replay {tokens:?}"))?;
        debug(cli.debug, &format!("replayed {}", game.history()))?;
    }

    if let Some(depth) = cli.perft {
        let info = perft(&game, depth, cli.threads);
        println!("perft({depth}): {}", info.nodes);
        return Ok(());
    }

    if let Some(plies) = cli.playout {
        let seed = cli.seed.unwrap_or_else(rand::random);
        debug(cli.debug, &format!("playout seed {seed}"))?;
        for info in seeded_playout(&mut game, plies, seed) {
            report_move(cli.debug, &info)?;
        }
        println!("{game}");
        println!("{}", game.history());
        return Ok(());
    }

    println!("Gambit {}\n", env!("CARGO_PKG_VERSION"));
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        println!("{game}");
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        match InputKind::from(input.as_str()) {
            InputKind::Exit => break,
            InputKind::Empty => continue,
            InputKind::Newgame => {
                game.initialize();
                println!("Starting new game...");
            }
            InputKind::Help => print_help(),
            InputKind::Moves => print_moves(&game),
            InputKind::History => println!("{}", game.history()),
            InputKind::Board => {}
            InputKind::Replay(tokens) => {
                if let Err(e) = game.initialize_from_notation(&tokens) {
                    error(&e.to_string())?;
                }
                debug(cli.debug, &format!("replayed {}", game.history()))?;
            }
            InputKind::Token(token) => match game.play(&token) {
                Ok(info) => report_move(cli.debug, &info)?,
                Err(e) => error(&e.to_string())?,
            },
        }
    }
    Ok(())
}
