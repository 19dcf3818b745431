//! Puzzle construction: diagonal seeding, backtracking completion, carving.

use hintoku_core::{Board, Digit, Position};
use rand::{Rng, seq::SliceRandom as _};

use crate::{Difficulty, PuzzleSeed};

/// A generated puzzle together with its solution and provenance.
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    /// The playable board with cells removed.
    pub puzzle: Board,
    /// The completed solution the puzzle was carved from.
    pub solution: Board,
    /// Difficulty the puzzle was generated at.
    pub difficulty: Difficulty,
    /// Seed that reproduces this exact puzzle.
    pub seed: PuzzleSeed,
}

/// Stateless Sudoku puzzle generator.
///
/// Generation proceeds in three steps:
///
/// 1. The three diagonal 3×3 boxes (top-left corners `(0,0)`, `(3,3)`,
///    `(6,6)`) are each filled with an independent random permutation of
///    1-9. The diagonal boxes share no row or column, so this never
///    conflicts.
/// 2. The remaining cells are completed by exhaustive backtracking in
///    row-major order, trying candidate digits in ascending order. The grid
///    is a single mutable buffer handed down the recursion and restored on
///    backtrack.
/// 3. All 81 positions are shuffled and the first
///    [`removal_count`](Difficulty::removal_count) of them are blanked.
///
/// Carving does not verify that the puzzle keeps a unique solution; harder
/// settings remove enough cells that some boards admit several completions.
///
/// The generator holds no state; all randomness comes from a per-call
/// [`PuzzleSeed`], so it can be shared freely between threads.
///
/// # Examples
///
/// ```
/// use hintoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let seed = PuzzleSeed::from_phrase("generator docs");
///
/// let generated = generator.generate_with_seed(Difficulty::Easy, seed);
/// assert_eq!(generated.puzzle.count_empty(), 30);
///
/// // The same seed reproduces the same puzzle.
/// let replayed = generator.generate_with_seed(Difficulty::Easy, seed);
/// assert_eq!(replayed.puzzle, generated.puzzle);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed` and `difficulty`.
    #[must_use]
    pub fn generate_with_seed(&self, difficulty: Difficulty, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();

        let mut solution = Board::new();
        fill_diagonal_boxes(&mut solution, &mut rng);
        let completed = complete(&mut solution);
        assert!(completed, "a diagonally seeded board is always completable");

        let puzzle = carve(&solution, difficulty.removal_count(), &mut rng);
        GeneratedPuzzle {
            puzzle,
            solution,
            difficulty,
            seed,
        }
    }
}

/// Fills the three diagonal boxes with random permutations of 1-9.
fn fill_diagonal_boxes<R: Rng>(board: &mut Board, rng: &mut R) {
    for box_index in [0, 4, 8] {
        let mut digits = Digit::ALL;
        digits.shuffle(rng);
        for (cell, digit) in (0..9).zip(digits) {
            board.place(Position::from_box(box_index, cell), digit);
        }
    }
}

/// Completes the board by backtracking over empty cells in row-major order,
/// trying candidates in ascending order. Returns `false` if no completion
/// exists; the board is left unchanged in that case.
fn complete(board: &mut Board) -> bool {
    let Some(pos) = board.empty_positions().next() else {
        return true;
    };
    for digit in board.candidates_at(pos) {
        board.place(pos, digit);
        if complete(board) {
            return true;
        }
        board.clear(pos);
    }
    false
}

/// Copies the solution and blanks a shuffled prefix of `removal_count`
/// positions.
fn carve<R: Rng>(solution: &Board, removal_count: usize, rng: &mut R) -> Board {
    let mut puzzle = solution.clone();
    let mut positions = Position::ALL;
    positions.shuffle(rng);
    for &pos in positions.iter().take(removal_count) {
        puzzle.clear(pos);
    }
    puzzle
}
