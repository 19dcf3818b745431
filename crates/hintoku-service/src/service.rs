//! The stateless service facade.

use chrono::NaiveDate;
use hintoku_analyzer::{Hint, HintAnalyzer, ValidationError};
use hintoku_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

use crate::{
    dto::{CellRef, DailyPuzzle, HintResponse, PuzzleResponse},
    message,
};

/// One service object exposing puzzle generation and hint analysis.
///
/// Constructed once at process start and shared freely: the service owns a
/// [`PuzzleGenerator`] and a [`HintAnalyzer`], both stateless, so every
/// method is safe to call concurrently without locks. The service is the
/// boundary layer; it logs operations and renders hint messages, which the
/// core crates never do.
///
/// # Examples
///
/// ```
/// use hintoku_service::SudokuService;
///
/// let service = SudokuService::new();
/// let response = service.generate("medium");
///
/// assert_eq!(response.puzzle.len(), 81);
/// assert_eq!(response.solution.len(), 81);
/// assert_eq!(response.puzzle.matches('0').count(), 40);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SudokuService {
    generator: PuzzleGenerator,
    analyzer: HintAnalyzer,
}

impl SudokuService {
    /// Creates a service.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generator: PuzzleGenerator::new(),
            analyzer: HintAnalyzer::new(),
        }
    }

    /// Generates a puzzle at the named difficulty with a fresh seed.
    ///
    /// The difficulty parse is lenient: unknown names produce an easy
    /// puzzle, so this path has no error branch.
    #[must_use]
    pub fn generate(&self, difficulty_name: &str) -> PuzzleResponse {
        let difficulty = Difficulty::from_name(difficulty_name);
        let generated = self.generator.generate(difficulty);
        log::debug!(
            "generated {difficulty} puzzle from seed {}",
            generated.seed
        );
        puzzle_response(&generated)
    }

    /// Generates the puzzle determined by an explicit seed.
    #[must_use]
    pub fn generate_with_seed(&self, difficulty: Difficulty, seed: PuzzleSeed) -> PuzzleResponse {
        let generated = self.generator.generate_with_seed(difficulty, seed);
        log::debug!("generated {difficulty} puzzle from seed {seed}");
        puzzle_response(&generated)
    }

    /// Analyzes the current board against its solution and renders the best
    /// hint, or `None` when the board is already solved or nothing applies.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when either string is malformed or the
    /// state disagrees with the solution on a filled cell.
    pub fn hint(
        &self,
        current_state: &str,
        solution: &str,
    ) -> Result<Option<HintResponse>, ValidationError> {
        match self.analyzer.analyze_strings(current_state, solution) {
            Ok(Some(hint)) => {
                log::debug!(
                    "hint: {} at {} (impact {})",
                    hint.technique,
                    hint.position,
                    hint.impact_score
                );
                Ok(Some(hint_response(&hint)))
            }
            Ok(None) => {
                log::debug!("no hint available, board is solved");
                Ok(None)
            }
            Err(err) => {
                log::warn!("rejected hint request: {err}");
                Err(err)
            }
        }
    }

    /// Produces the puzzle of the day for `date`.
    ///
    /// Determinism stands in for storage: the seed is derived from the ISO
    /// date, so every request for the same day yields the identical record.
    /// Daily puzzles are always medium difficulty.
    #[must_use]
    pub fn daily(&self, date: NaiveDate) -> DailyPuzzle {
        let seed = PuzzleSeed::from_phrase(&format!("daily:{date}"));
        let generated = self
            .generator
            .generate_with_seed(Difficulty::Medium, seed);
        log::debug!("daily puzzle for {date} from seed {seed}");
        DailyPuzzle {
            date,
            puzzle: generated.puzzle.to_string(),
            solution: generated.solution.to_string(),
            difficulty: generated.difficulty,
        }
    }
}

fn puzzle_response(generated: &GeneratedPuzzle) -> PuzzleResponse {
    PuzzleResponse {
        puzzle: generated.puzzle.to_string(),
        solution: generated.solution.to_string(),
    }
}

fn hint_response(hint: &Hint) -> HintResponse {
    HintResponse {
        row: hint.position.row(),
        col: hint.position.col(),
        value: hint.value.to_char(),
        technique: hint.technique.name().to_owned(),
        related_cells: hint
            .related_cells
            .iter()
            .map(|pos| CellRef {
                row: pos.row(),
                col: pos.col(),
            })
            .collect(),
        message: message::technique_message(hint.technique.name(), hint.value.to_char()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "123456789456789123789123456231564897564897231897231564312645978645978312978312645";

    #[test]
    fn test_generate_honors_difficulty_names() {
        let service = SudokuService::new();
        for (name, blanks) in [("easy", 30), ("medium", 40), ("hard", 50)] {
            let response = service.generate(name);
            assert_eq!(response.puzzle.len(), 81);
            assert_eq!(response.solution.len(), 81);
            assert_eq!(response.puzzle.matches('0').count(), blanks);
            assert!(!response.solution.contains('0'));
        }
    }

    #[test]
    fn test_generate_unknown_difficulty_falls_back_to_easy() {
        let service = SudokuService::new();
        let response = service.generate("impossible");
        assert_eq!(response.puzzle.matches('0').count(), 30);
    }

    #[test]
    fn test_generate_puzzle_agrees_with_solution() {
        let service = SudokuService::new();
        let response =
            service.generate_with_seed(Difficulty::Hard, PuzzleSeed::from_phrase("service"));
        for (puzzle_char, solution_char) in response.puzzle.chars().zip(response.solution.chars()) {
            if puzzle_char != '0' {
                assert_eq!(puzzle_char, solution_char);
            }
        }
    }

    #[test]
    fn test_hint_on_solved_board_is_none() {
        let service = SudokuService::new();
        assert_eq!(service.hint(SOLVED, SOLVED), Ok(None));
    }

    #[test]
    fn test_hint_renders_the_analysis() {
        let service = SudokuService::new();
        let state = format!("0{}", &SOLVED[1..]);
        let hint = service.hint(&state, SOLVED).unwrap().unwrap();

        assert_eq!((hint.row, hint.col), (0, 0));
        assert_eq!(hint.value, '1');
        assert_eq!(hint.technique, "single_candidate");
        assert_eq!(hint.related_cells.len(), 24);
        assert_eq!(
            hint.message,
            message::technique_message("single_candidate", '1')
        );
    }

    #[test]
    fn test_hint_rejects_malformed_input() {
        let service = SudokuService::new();
        assert!(service.hint(&SOLVED[..80], SOLVED).is_err());

        let mut mismatch = String::from(SOLVED);
        mismatch.replace_range(0..1, "2");
        assert!(service.hint(&mismatch, SOLVED).is_err());
    }

    #[test]
    fn test_daily_is_deterministic_per_date() {
        let service = SudokuService::new();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let first = service.daily(date);
        let second = service.daily(date);
        assert_eq!(first, second);
        assert_eq!(first.date, date);
        assert_eq!(first.difficulty, Difficulty::Medium);
        assert_eq!(first.puzzle.matches('0').count(), 40);

        let next_day = service.daily(date.succ_opt().unwrap());
        assert_ne!(first.solution, next_day.solution);
    }

    #[test]
    fn test_daily_puzzle_has_a_hint() {
        let service = SudokuService::new();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let daily = service.daily(date);
        let hint = service.hint(&daily.puzzle, &daily.solution).unwrap();
        assert!(hint.is_some());
    }
}
