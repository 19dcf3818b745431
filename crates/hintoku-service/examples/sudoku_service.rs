//! Example demonstrating the service facade end to end.
//!
//! Generates a puzzle, prints the wire-shaped records as JSON, and asks for
//! the first hint on the fresh board.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example sudoku_service
//! ```
//!
//! Pick a difficulty (unknown names fall back to easy):
//!
//! ```sh
//! cargo run --example sudoku_service -- --difficulty hard
//! ```
//!
//! Print today's deterministic daily puzzle instead:
//!
//! ```sh
//! cargo run --example sudoku_service -- --daily
//! ```
//!
//! Enable boundary logging:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example sudoku_service
//! ```

use std::process;

use chrono::Utc;
use clap::Parser;
use hintoku_service::SudokuService;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty name (easy, medium, hard). Unknown names fall back to easy.
    #[arg(long, value_name = "NAME", default_value = "easy")]
    difficulty: String,

    /// Print today's daily puzzle instead of generating a fresh one.
    #[arg(long)]
    daily: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let service = SudokuService::new();

    let response = if args.daily {
        let record = service.daily(Utc::now().date_naive());
        println!("Daily puzzle:");
        println!("{}", serde_json::to_string_pretty(&record).unwrap());
        hintoku_service::PuzzleResponse {
            puzzle: record.puzzle,
            solution: record.solution,
        }
    } else {
        let response = service.generate(&args.difficulty);
        println!("Generated puzzle:");
        println!("{}", serde_json::to_string_pretty(&response).unwrap());
        response
    };

    match service.hint(&response.puzzle, &response.solution) {
        Ok(Some(hint)) => {
            println!();
            println!("First hint:");
            println!("{}", serde_json::to_string_pretty(&hint).unwrap());
        }
        Ok(None) => println!("Board is already solved, no hint."),
        Err(err) => {
            eprintln!("Hint request rejected: {err}");
            process::exit(1);
        }
    }
}
