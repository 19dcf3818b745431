//! Per-cell hint analysis and selection.

use std::cmp::Reverse;

use hintoku_core::{Board, Digit, House, Position};

use crate::{Technique, ValidationError, validation};

/// A proposed next move with the reasoning that justifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// The cell to fill.
    pub position: Position,
    /// The digit that belongs there.
    pub value: Digit,
    /// The technique that justifies the placement.
    pub technique: Technique,
    /// Heuristic ranking score; see [`HintAnalyzer`] for the exact counting.
    pub impact_score: u32,
    /// The cells supporting the technique, in row/column/box group order.
    pub related_cells: Vec<Position>,
}

/// Stateless hint analyzer.
///
/// Given a player's board and the known solution, the analyzer scores every
/// empty cell and picks the single most helpful move:
///
/// - **Impact score**: the number of empty cells in the cell's row, plus its
///   column, plus its box. The cell itself is counted once per group, and
///   cells shared between groups count once per group too. The overlaps are
///   intentionally not deduplicated; the score ranks rather than measures.
/// - **Technique**: `single_candidate` when row/column/box elimination leaves
///   exactly the solution digit; otherwise `hidden_single` when the solution
///   digit fits in no other cell of the row, column, or box (checked in that
///   order); otherwise `basic_elimination`.
/// - **Selection**: highest impact first, then the longer technique name
///   (a stand-in for technique complexity), then row-major scan order.
///
/// A cell whose supporting-cell set comes out empty yields no hint, and a
/// board identical to its solution yields `None`.
///
/// # Examples
///
/// ```
/// use hintoku_analyzer::{HintAnalyzer, Technique};
///
/// let solution =
///     "123456789456789123789123456231564897564897231897231564312645978645978312978312645";
/// let state = format!("0{}", &solution[1..]);
///
/// let analyzer = HintAnalyzer::new();
/// let hint = analyzer.analyze_strings(&state, solution)?.unwrap();
///
/// assert_eq!(hint.position.index(), 0);
/// assert_eq!(hint.value.to_char(), '1');
/// assert_eq!(hint.technique, Technique::SingleCandidate);
/// # Ok::<(), hintoku_analyzer::ValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HintAnalyzer;

impl HintAnalyzer {
    /// Creates an analyzer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates the boundary strings and analyzes them.
    ///
    /// Returns `Ok(None)` when the state is already solved or no cell yields
    /// a supported hint; absence of a hint is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when either string is malformed, the
    /// solution is incomplete, or the state disagrees with the solution on a
    /// filled cell.
    pub fn analyze_strings(
        &self,
        current_state: &str,
        solution: &str,
    ) -> Result<Option<Hint>, ValidationError> {
        let (state, solution) = validation::validate_boards(current_state, solution)?;
        Ok(self.analyze(&state, &solution))
    }

    /// Analyzes already-parsed boards.
    ///
    /// The caller is expected to have validated the pair (see
    /// [`analyze_strings`](Self::analyze_strings)); a cell the solution
    /// leaves empty is skipped rather than failing the scan.
    #[must_use]
    pub fn analyze(&self, state: &Board, solution: &Board) -> Option<Hint> {
        let mut candidates: Vec<Hint> = state
            .empty_positions()
            .filter_map(|pos| hint_for(state, solution, pos))
            .collect();
        // Stable sort: row-major scan order breaks full ties.
        candidates.sort_by_key(|hint| {
            (
                Reverse(hint.impact_score),
                Reverse(hint.technique.complexity_weight()),
            )
        });
        candidates.into_iter().next()
    }
}

/// Builds the hint candidate for one empty cell, or `None` when the cell has
/// no supporting cells (or no solution digit, for unvalidated input).
fn hint_for(state: &Board, solution: &Board, pos: Position) -> Option<Hint> {
    let value = solution.get(pos)?;
    let (technique, related_cells) = classify(state, pos, value);
    if related_cells.is_empty() {
        return None;
    }
    Some(Hint {
        position: pos,
        value,
        technique,
        impact_score: impact_score(state, pos),
        related_cells,
    })
}

/// Sums the empty-cell counts of the cell's row, column, and box.
///
/// The cell and any box-overlap cells are counted once per group; the
/// original scoring triple-counts on purpose.
fn impact_score(state: &Board, pos: Position) -> u32 {
    let empties: usize = houses_of(pos)
        .into_iter()
        .map(|house| {
            house
                .positions()
                .iter()
                .filter(|&&peer| state.get(peer).is_none())
                .count()
        })
        .sum();
    // Three houses of nine cells bound the score at 27.
    #[expect(clippy::cast_possible_truncation)]
    let score = empties as u32;
    score
}

/// Classifies the technique for a cell and collects its supporting cells.
fn classify(state: &Board, pos: Position, value: Digit) -> (Technique, Vec<Position>) {
    if state.candidates_at(pos).as_single() == Some(value) {
        let mut related = Vec::new();
        for house in houses_of(pos) {
            related.extend(filled_in(state, house, pos));
        }
        return (Technique::SingleCandidate, related);
    }

    for house in houses_of(pos) {
        if is_sole_admitting(state, house, pos, value) {
            let related = house
                .positions()
                .into_iter()
                .filter(|&peer| peer != pos)
                .collect();
            return (Technique::HiddenSingle, related);
        }
    }

    (
        Technique::BasicElimination,
        filled_in(state, House::row_of(pos), pos),
    )
}

/// Row, column, and box of `pos`, in classification order.
fn houses_of(pos: Position) -> [House; 3] {
    [House::row_of(pos), House::column_of(pos), House::box_of(pos)]
}

/// The filled cells of `house` other than `pos`, in house scan order.
fn filled_in(state: &Board, house: House, pos: Position) -> Vec<Position> {
    house
        .positions()
        .into_iter()
        .filter(|&peer| peer != pos && state.get(peer).is_some())
        .collect()
}

/// Returns `true` if `pos` is the only cell of `house` where `value` could
/// still be placed.
fn is_sole_admitting(state: &Board, house: House, pos: Position, value: Digit) -> bool {
    state.admits(pos, value)
        && house
            .positions()
            .into_iter()
            .all(|peer| peer == pos || !state.admits(peer, value))
}
