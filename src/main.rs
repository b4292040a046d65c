//! Scacco command line: evaluate one puzzle position and print the verdict.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scacco::{
    classify, find_captures, validate, Capturer, KingStatus, PieceKind, PieceRecord, Position,
    PuzzleMode,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Classify a white king as safe, in check, checkmated or stalemated
    Checkmate {
        /// Square of the white king, e.g. e4
        #[arg(short, long)]
        king: String,

        /// Black piece as kind:square, e.g. queen:h5 (repeatable)
        #[arg(short, long = "black")]
        black: Vec<PieceRecord>,

        /// Print the board after the verdict
        #[arg(long)]
        board: bool,
    },
    /// List the black pieces a white king or pawn can capture
    Capture {
        /// White piece as kind:square, king or pawn only, e.g. pawn:b2
        #[arg(short, long)]
        white: PieceRecord,

        /// Black piece as kind:square, e.g. rook:a3 (repeatable)
        #[arg(short, long = "black")]
        black: Vec<PieceRecord>,

        /// Print the board after the result
        #[arg(long)]
        board: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    scacco::init();

    match args.mode {
        Mode::Checkmate { king, black, board } => {
            let white = PieceRecord::new(PieceKind::King, king.to_ascii_lowercase());
            let mut position =
                Position::from_records(white, black).context("could not set up position")?;
            validate(PuzzleMode::Checkmate, &position).context("invalid checkmate puzzle")?;

            match classify(&mut position) {
                KingStatus::Checkmate => println!("checkmate"),
                KingStatus::Check(escapes) => {
                    let list: Vec<String> = escapes.iter().map(|s| s.to_string()).collect();
                    println!("check");
                    println!("escape squares: {}", list.join(", "));
                }
                KingStatus::Stalemate => println!("stalemate"),
                KingStatus::Safe => println!("safe"),
                KingStatus::Invalid => println!("invalid position"),
            }
            if board {
                println!("\n{}", position.board);
            }
        }
        Mode::Capture {
            white,
            black,
            board,
        } => {
            let capturer = Capturer::try_from(white.kind)?;
            let position =
                Position::from_records(white, black).context("could not set up position")?;
            validate(PuzzleMode::Capture, &position).context("invalid capture puzzle")?;
            let captures = find_captures(capturer, &position.white.label, &position.black);

            if captures.is_empty() {
                println!("no black piece can be captured by the white {}", capturer.kind());
            } else {
                println!("the white {} can capture:", capturer.kind());
                for rec in &captures {
                    println!("  {}", rec);
                }
            }
            if board {
                println!("\n{}", position.board);
            }
        }
    }

    Ok(())
}
