//! Difficulty levels and their cell-removal counts.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Puzzle difficulty, determining how many cells are blanked out of the
/// completed solution.
///
/// Parsing via [`Difficulty::from_name`] never fails: unrecognized names
/// fall back to [`Difficulty::Easy`], so a caller passing through arbitrary
/// user input always receives a puzzle.
///
/// # Examples
///
/// ```
/// use hintoku_generator::Difficulty;
///
/// assert_eq!(Difficulty::Hard.removal_count(), 50);
/// assert_eq!(Difficulty::from_name("medium"), Difficulty::Medium);
/// assert_eq!(Difficulty::from_name("brutal"), Difficulty::Easy);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 30 cells removed.
    #[default]
    Easy,
    /// 40 cells removed.
    Medium,
    /// 50 cells removed.
    Hard,
}

impl Difficulty {
    /// Array containing all difficulties, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the number of cells removed from the solved board at this
    /// difficulty.
    #[must_use]
    pub const fn removal_count(self) -> usize {
        match self {
            Self::Easy => 30,
            Self::Medium => 40,
            Self::Hard => 50,
        }
    }

    /// Returns the lowercase name of this difficulty.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parses a difficulty from its name, ASCII case-insensitively.
    ///
    /// Any name that is not `easy`, `medium`, or `hard` yields
    /// [`Difficulty::Easy`]. Unknown difficulty requests produce an easy
    /// puzzle rather than an error.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_counts() {
        assert_eq!(Difficulty::Easy.removal_count(), 30);
        assert_eq!(Difficulty::Medium.removal_count(), 40);
        assert_eq!(Difficulty::Hard.removal_count(), 50);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Difficulty::from_name("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name("hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("HARD"), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("Medium"), Difficulty::Medium);
    }

    #[test]
    fn test_from_name_falls_back_to_easy() {
        assert_eq!(Difficulty::from_name("brutal"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name(""), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("extreme"), Difficulty::Easy);
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn test_display_matches_name() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string(), difficulty.name());
        }
    }
}
