//! Error types for layout construction, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - L001: `TooFewValidWords` (Not enough usable answers after preprocessing)
//! - L002: `LayoutConstructionFailed` (No attempt could interlock three words)
//!
//! # Examples
//!
//! ```
//! use crossgrid::errors::LayoutError;
//! use crossgrid::{generate_layout, ClueInput, LayoutOptions};
//!
//! let clues = vec![ClueInput::new("Feline", "cat"), ClueInput::new("Too short", "ox")];
//! match generate_layout(&clues, &LayoutOptions::default()) {
//!     Err(e @ LayoutError::TooFewValidWords { .. }) => {
//!         assert_eq!(e.code(), "L001");
//!         println!("{}", e.display_detailed());
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

/// The minimum number of words a layout must contain.
pub const MIN_LAYOUT_WORDS: usize = 3;

/// Failure outcomes of [`crate::generate_layout`].
///
/// Both variants are final for the given input: the engine already retries
/// internally across its attempt budget, so the caller must change the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Fewer than [`MIN_LAYOUT_WORDS`] answers survived cleaning and filtering.
    #[error("too few valid words: {valid} usable answer(s), at least {required} needed")]
    TooFewValidWords { valid: usize, required: usize },

    /// Preprocessing succeeded, but no attempt managed to interlock enough words.
    #[error("no valid layout found: best attempt placed {best_placed} of {candidates} word(s)")]
    LayoutConstructionFailed { best_placed: usize, candidates: usize },
}

impl LayoutError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LayoutError::TooFewValidWords { .. } => "L001",
            LayoutError::LayoutConstructionFailed { .. } => "L002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            LayoutError::TooFewValidWords { .. } => "Not enough usable answers after preprocessing",
            LayoutError::LayoutConstructionFailed { .. } => "No attempt could interlock three words",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            LayoutError::TooFewValidWords { .. } => "Answers are uppercased and stripped of everything outside A-Z. Only answers of 3 to 12 letters are kept, and duplicates are dropped. This error is raised before any placement work when fewer than three answers remain.",
            LayoutError::LayoutConstructionFailed { .. } => "Every placement attempt ended with fewer than three mutually interlocking words. Words can only join the grid by sharing a letter with a word already placed, so answers with no letters in common cannot form a layout.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LayoutError::TooFewValidWords { .. } => Some("Supply at least three answers of 3-12 letters each (e.g. 'JAZZ', 'BAND', 'BEAT')"),
            LayoutError::LayoutConstructionFailed { .. } => Some("Add more answers, preferably ones sharing common letters with the others"),
        }
    }

    /// True when the failure is caused by the supplied answers themselves
    /// rather than by the search coming up short.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, LayoutError::TooFewValidWords { .. })
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<LayoutError> {
        vec![
            LayoutError::TooFewValidWords { valid: 1, required: MIN_LAYOUT_WORDS },
            LayoutError::LayoutConstructionFailed { best_placed: 1, candidates: 3 },
        ]
    }

    #[test]
    fn test_error_codes_are_unique_and_well_formed() {
        let mut codes = std::collections::HashSet::new();
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{code}' should be 4 characters (L0XX)");
            assert!(code.starts_with("L0"), "Error code '{code}' should start with 'L0'");
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{code}' should end with a number");
            assert!(codes.insert(code), "Duplicate error code found: {code}");
        }
    }

    #[test]
    fn test_display_includes_counts() {
        let err = LayoutError::TooFewValidWords { valid: 2, required: 3 };
        let msg = err.to_string();
        assert!(msg.contains('2') && msg.contains('3'), "message should carry counts: {msg}");

        let err = LayoutError::LayoutConstructionFailed { best_placed: 1, candidates: 4 };
        assert!(err.to_string().contains("1 of 4"));
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        for err in all_variants() {
            let detailed = err.display_detailed();
            assert!(detailed.contains(err.code()));
            assert!(detailed.contains(&err.to_string()));
            if let Some(help) = err.help() {
                assert!(detailed.contains(help));
                assert_ne!(help, err.to_string(), "help should add information beyond the message");
            }
        }
    }

    #[test]
    fn test_descriptions_and_details_are_substantial() {
        for err in all_variants() {
            assert!(!err.description().is_empty());
            assert!(err.details().len() > err.description().len());
        }
    }

    #[test]
    fn test_input_error_classification() {
        assert!(LayoutError::TooFewValidWords { valid: 0, required: 3 }.is_input_error());
        assert!(!LayoutError::LayoutConstructionFailed { best_placed: 2, candidates: 3 }.is_input_error());
    }

    #[test]
    fn test_format_without_help() {
        assert_eq!(format_error_with_code_and_help("boom", "L999", None), "boom (L999)");
    }
}
