//! Example demonstrating seeded Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator`
//! - Generate puzzles at a chosen difficulty
//! - Replay a specific puzzle from its seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty (unknown names fall back to easy):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Replay a known puzzle from its 64-hex-digit seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed \
//!     c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Generate several puzzles at once:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 5
//! ```

use std::process;

use clap::Parser;
use hintoku_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty name (easy, medium, hard). Unknown names fall back to easy.
    #[arg(long, value_name = "NAME", default_value = "easy")]
    difficulty: String,

    /// Fixed seed (64 hex digits). A fresh random seed is drawn when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    let args = Args::parse();
    let difficulty = Difficulty::from_name(&args.difficulty);
    let generator = PuzzleGenerator::new();

    let seed: Option<PuzzleSeed> = match args.seed.as_deref() {
        Some(text) => match text.parse() {
            Ok(seed) => Some(seed),
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        },
        None => None,
    };

    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(1);
    }

    for i in 0..args.count {
        if i > 0 {
            println!();
        }
        let generated = match seed {
            Some(seed) => generator.generate_with_seed(difficulty, seed),
            None => generator.generate(difficulty),
        };
        print_puzzle(&generated);
    }
}

fn print_puzzle(generated: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Difficulty:");
    println!("  {}", generated.difficulty);
    println!();
    println!("Puzzle:");
    println!("  {}", generated.puzzle);
    println!();
    println!("Solution:");
    println!("  {}", generated.solution);
}
