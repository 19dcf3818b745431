//! Test utilities for hint analysis.
//!
//! This module provides [`HintTester`], a fluent harness for asserting what
//! the analyzer selects for a given board pair.
//!
//! # Example
//!
//! ```
//! use hintoku_analyzer::{Technique, testing::HintTester};
//! use hintoku_core::{Digit, Position};
//!
//! let solution =
//!     "123456789456789123789123456231564897564897231897231564312645978645978312978312645";
//!
//! HintTester::from_strs(
//!     "
//!     _23 456 789
//!     456 789 123
//!     789 123 456
//!     231 564 897
//!     564 897 231
//!     897 231 564
//!     312 645 978
//!     645 978 312
//!     978 312 645",
//!     solution,
//! )
//! .assert_position(Position::new(0, 0))
//! .assert_value(Digit::D1)
//! .assert_technique(Technique::SingleCandidate);
//! ```

use hintoku_core::{Board, Digit, Position};

use crate::{Hint, HintAnalyzer, Technique};

/// A test harness around one analyzer run.
///
/// The tester parses the boards leniently (whitespace ignored, `_`/`.`/`0`
/// for blanks), runs [`HintAnalyzer::analyze`], and offers chainable
/// assertions on the selected hint. All assertion methods panic with a
/// descriptive message on failure and use `#[track_caller]` to report the
/// test's own source location.
#[derive(Debug)]
pub struct HintTester {
    hint: Option<Hint>,
}

impl HintTester {
    /// Analyzes a pair of already-parsed boards.
    #[must_use]
    pub fn new(state: &Board, solution: &Board) -> Self {
        let hint = HintAnalyzer::new().analyze(state, solution);
        Self { hint }
    }

    /// Analyzes a pair of board strings.
    ///
    /// # Panics
    ///
    /// Panics if either string cannot be parsed as a board.
    #[track_caller]
    #[must_use]
    pub fn from_strs(state: &str, solution: &str) -> Self {
        let state: Board = state.parse().expect("state fixture must parse");
        let solution: Board = solution.parse().expect("solution fixture must parse");
        Self::new(&state, &solution)
    }

    /// Asserts that no hint was selected.
    #[track_caller]
    pub fn assert_no_hint(self) -> Self {
        assert!(
            self.hint.is_none(),
            "Expected no hint, but the analyzer selected {:?}",
            self.hint
        );
        self
    }

    /// Asserts the selected hint's cell.
    #[track_caller]
    pub fn assert_position(self, expected: Position) -> Self {
        let hint = self.expect_hint();
        assert_eq!(
            hint.position, expected,
            "Expected the hint at {expected}, but the analyzer selected {hint:?}"
        );
        self
    }

    /// Asserts the selected hint's digit.
    #[track_caller]
    pub fn assert_value(self, expected: Digit) -> Self {
        let hint = self.expect_hint();
        assert_eq!(
            hint.value, expected,
            "Expected hint value {expected}, but the analyzer selected {hint:?}"
        );
        self
    }

    /// Asserts the selected hint's technique.
    #[track_caller]
    pub fn assert_technique(self, expected: Technique) -> Self {
        let hint = self.expect_hint();
        assert_eq!(
            hint.technique, expected,
            "Expected technique {expected}, but the analyzer selected {hint:?}"
        );
        self
    }

    /// Asserts the selected hint's impact score.
    #[track_caller]
    pub fn assert_impact(self, expected: u32) -> Self {
        let hint = self.expect_hint();
        assert_eq!(
            hint.impact_score, expected,
            "Expected impact score {expected}, but the analyzer selected {hint:?}"
        );
        self
    }

    /// Asserts the exact supporting-cell list, in order.
    #[track_caller]
    pub fn assert_related_eq(self, expected: &[Position]) -> Self {
        let hint = self.expect_hint();
        assert_eq!(
            hint.related_cells, expected,
            "Supporting cells differ for {hint:?}"
        );
        self
    }

    /// Asserts the number of supporting cells.
    #[track_caller]
    pub fn assert_related_len(self, expected: usize) -> Self {
        let hint = self.expect_hint();
        assert_eq!(
            hint.related_cells.len(),
            expected,
            "Expected {expected} supporting cells, but the analyzer selected {hint:?}"
        );
        self
    }

    /// Returns the selected hint, consuming the tester.
    #[must_use]
    pub fn into_hint(self) -> Option<Hint> {
        self.hint
    }

    #[track_caller]
    fn expect_hint(&self) -> &Hint {
        self.hint
            .as_ref()
            .expect("Expected a hint, but the analyzer selected none")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "123456789456789123789123456231564897564897231897231564312645978645978312978312645";

    fn one_blank() -> String {
        format!("0{}", &SOLVED[1..])
    }

    #[test]
    fn test_assertions_pass_on_matching_hint() {
        HintTester::from_strs(&one_blank(), SOLVED)
            .assert_position(Position::new(0, 0))
            .assert_value(Digit::D1)
            .assert_technique(Technique::SingleCandidate)
            .assert_impact(3)
            .assert_related_len(24);
    }

    #[test]
    fn test_into_hint_exposes_the_selection() {
        let hint = HintTester::from_strs(&one_blank(), SOLVED)
            .into_hint()
            .unwrap();
        assert_eq!(hint.position, Position::new(0, 0));

        assert!(HintTester::from_strs(SOLVED, SOLVED).into_hint().is_none());
    }

    #[test]
    #[should_panic(expected = "Expected no hint")]
    fn test_assert_no_hint_fails_when_hint_exists() {
        HintTester::from_strs(&one_blank(), SOLVED).assert_no_hint();
    }

    #[test]
    #[should_panic(expected = "Expected a hint")]
    fn test_assertions_fail_without_hint() {
        HintTester::from_strs(SOLVED, SOLVED).assert_value(Digit::D1);
    }

    #[test]
    #[should_panic(expected = "Expected hint value 9")]
    fn test_assert_value_fails_on_wrong_digit() {
        HintTester::from_strs(&one_blank(), SOLVED).assert_value(Digit::D9);
    }

    #[test]
    #[should_panic(expected = "state fixture must parse")]
    fn test_from_strs_rejects_bad_fixture() {
        let _ = HintTester::from_strs("not a board", SOLVED);
    }
}
