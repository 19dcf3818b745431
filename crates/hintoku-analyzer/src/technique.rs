//! Solving-technique classification.

use std::fmt::{self, Display};

/// The reasoning that justifies a hint.
///
/// Classification tries the variants in declaration order and stops at the
/// first match; [`BasicElimination`](Self::BasicElimination) is the
/// unconditional fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    /// Exactly one digit survives row/column/box elimination for the cell.
    SingleCandidate,
    /// The digit fits in no other cell of one of the cell's houses.
    HiddenSingle,
    /// The digits already placed in the row narrow the cell down.
    BasicElimination,
}

impl Technique {
    /// Returns the wire name of this technique.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SingleCandidate => "single_candidate",
            Self::HiddenSingle => "hidden_single",
            Self::BasicElimination => "basic_elimination",
        }
    }

    /// Ranking weight used between hints of equal impact.
    ///
    /// The weight is the character length of the wire name, a proxy for how
    /// much reasoning the technique bundles rather than a semantic ordering.
    /// It makes `basic_elimination` (17) outrank `single_candidate` (16)
    /// outrank `hidden_single` (13).
    #[must_use]
    pub const fn complexity_weight(self) -> usize {
        self.name().len()
    }
}

impl Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(Technique::SingleCandidate.name(), "single_candidate");
        assert_eq!(Technique::HiddenSingle.name(), "hidden_single");
        assert_eq!(Technique::BasicElimination.name(), "basic_elimination");
        assert_eq!(Technique::HiddenSingle.to_string(), "hidden_single");
    }

    #[test]
    fn test_complexity_weights() {
        assert_eq!(Technique::SingleCandidate.complexity_weight(), 16);
        assert_eq!(Technique::HiddenSingle.complexity_weight(), 13);
        assert_eq!(Technique::BasicElimination.complexity_weight(), 17);

        // The fallback outweighs both targeted techniques.
        assert!(
            Technique::BasicElimination.complexity_weight()
                > Technique::SingleCandidate.complexity_weight()
        );
        assert!(
            Technique::SingleCandidate.complexity_weight()
                > Technique::HiddenSingle.complexity_weight()
        );
    }
}
