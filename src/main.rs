use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use queens_referee::board::ConflictReport;
use queens_referee::input;

/// Validate an N-queens (or N-rooks) board for placement conflicts.
#[derive(Parser)]
#[command(
    name = "queens_referee",
    about = "Check a board file for N-queens placement conflicts"
)]
struct Cli {
    /// Path to the board file (.json bare matrix, or .toml with a `rows` key)
    board: PathBuf,

    /// Piece rules for the verdict: rooks (rows and columns) or queens
    /// (rows, columns, and both diagonals)
    #[arg(long, default_value = "queens")]
    piece: String,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Also print the board grid
    #[arg(long)]
    show_board: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "queens_referee=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Exit codes: 0 = no conflict, 1 = conflict, 2 = usage or input error.
    match run(&Cli::parse()) {
        Ok(false) => {}
        Ok(true) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(2);
        }
    }
}

/// Returns whether the board conflicts under the chosen piece rules.
fn run(cli: &Cli) -> Result<bool> {
    match cli.piece.as_str() {
        "rooks" | "queens" => {}
        other => bail!("unknown piece rules '{}' (expected 'rooks' or 'queens')", other),
    }

    let board = input::load_board(&cli.board)
        .with_context(|| format!("loading board from {}", cli.board.display()))?;
    let report = ConflictReport::of(&board);
    debug!(n = board.size(), pieces = board.piece_count(), "board inspected");

    if cli.show_board {
        print!("{board}");
    }
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
    } else {
        print_report(&report);
    }

    Ok(match cli.piece.as_str() {
        "rooks" => report.rooks,
        _ => report.queens,
    })
}

fn print_report(report: &ConflictReport) {
    println!("rows:            {}", verdict(report.rows));
    println!("columns:         {}", verdict(report.cols));
    println!("major diagonals: {}", verdict(report.major_diagonals));
    println!("minor diagonals: {}", verdict(report.minor_diagonals));
    println!("rooks verdict:   {}", verdict(report.rooks));
    println!("queens verdict:  {}", verdict(report.queens));
}

fn verdict(conflicted: bool) -> &'static str {
    if conflicted {
        "conflict"
    } else {
        "ok"
    }
}
