//! `candidates`: turns raw clue/answer records into placeable candidates
//!
//! Raw records come from callers (JSON, a clue-list file, the WASM boundary)
//! and may carry any case or punctuation. Preprocessing:
//! - uppercases the answer and strips everything outside `A`–`Z`;
//! - keeps answers of `MIN_WORD_LEN..=MAX_WORD_LEN` letters;
//! - drops later duplicates of an already-seen answer;
//! - sorts survivors longest-first (stable, so ties keep input order).
//!
//! Clue text is carried through untouched.
//!
//! Clue-list files hold one `ANSWER;clue` record per line. Parsing from a
//! string works everywhere (including WASM); reading from a path is native-only.

use crate::errors::{LayoutError, MIN_LAYOUT_WORDS};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Shortest answer the engine will place.
pub const MIN_WORD_LEN: usize = 3;
/// Longest answer the engine will place.
pub const MAX_WORD_LEN: usize = 12;

/// One raw record supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueInput {
    #[serde(alias = "question")]
    pub clue: String,
    pub answer: String,
}

impl ClueInput {
    pub fn new(clue: impl Into<String>, answer: impl Into<String>) -> Self {
        Self { clue: clue.into(), answer: answer.into() }
    }
}

/// A cleaned answer ready for placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Uppercase `A`–`Z` only, `MIN_WORD_LEN..=MAX_WORD_LEN` letters.
    pub word: String,
    pub clue: String,
}

impl Candidate {
    pub(crate) fn letters(&self) -> Vec<char> {
        self.word.chars().collect()
    }
}

/// Uppercase `raw` and keep only `A`–`Z`.
#[must_use]
pub fn normalize_answer(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Clean, filter, de-duplicate and sort raw records.
///
/// # Errors
///
/// Returns [`LayoutError::TooFewValidWords`] if fewer than three answers survive.
pub fn prepare_candidates(inputs: &[ClueInput]) -> Result<Vec<Candidate>, LayoutError> {
    let mut seen: HashSet<String> = HashSet::with_capacity(inputs.len());

    let mut candidates: Vec<Candidate> = inputs
        .iter()
        .filter_map(|input| {
            let word = normalize_answer(&input.answer);
            if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len()) {
                debug!("rejecting answer {:?} (cleaned to {word:?}, {} letters)", input.answer, word.len());
                return None;
            }
            if !seen.insert(word.clone()) {
                debug!("dropping duplicate answer {word}");
                return None;
            }
            Some(Candidate { word, clue: input.clue.clone() })
        })
        .collect();

    // stable: equal lengths keep input order
    candidates.sort_by(|a, b| b.word.len().cmp(&a.word.len()));

    if candidates.len() < MIN_LAYOUT_WORDS {
        return Err(LayoutError::TooFewValidWords {
            valid: candidates.len(),
            required: MIN_LAYOUT_WORDS,
        });
    }

    debug_assert!(
        candidates.windows(2).all(|w| w[0].word.len() >= w[1].word.len()),
        "Candidates must be sorted longest-first"
    );

    Ok(candidates)
}

/// A list of raw clue records read from text.
#[derive(Debug, Clone, Default)]
pub struct ClueList {
    pub clues: Vec<ClueInput>,
}

impl ClueList {
    /// Parse `ANSWER;clue` lines.
    ///
    /// Blank lines and lines starting with `#` are ignored. Lines without a `;`
    /// are skipped with a warning. Only the first `;` splits, so clues may
    /// contain semicolons.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> ClueList {
        let clues = contents
            .lines()
            .enumerate()
            .filter_map(|(line_no, raw_line)| {
                let line = raw_line.trim();
                if line.is_empty() || line.starts_with('#') {
                    return None;
                }
                match line.split_once(';') {
                    Some((answer, clue)) => Some(ClueInput::new(clue.trim(), answer.trim())),
                    None => {
                        warn!("skipping line {}: expected `ANSWER;clue`, got {line:?}", line_no + 1);
                        None
                    }
                }
            })
            .collect();

        ClueList { clues }
    }

    /// Native-only convenience method: read a clue list from a file path and parse it.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<ClueList> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read clue list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(answers: &[&str]) -> Vec<ClueInput> {
        answers
            .iter()
            .enumerate()
            .map(|(i, a)| ClueInput::new(format!("clue {i}"), *a))
            .collect()
    }

    fn words(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.word.as_str()).collect()
    }

    #[test]
    fn test_normalize_answer() {
        assert_eq!(normalize_answer("rock 'n' roll"), "ROCKNROLL");
        assert_eq!(normalize_answer("Jazz!"), "JAZZ");
        assert_eq!(normalize_answer("B-52s"), "BS");
        assert_eq!(normalize_answer("Café"), "CAF");
        assert_eq!(normalize_answer(""), "");
    }

    #[test]
    fn test_sorts_longest_first_stably() {
        let got = prepare_candidates(&inputs(&["jam", "jazz", "rock", "melody"])).unwrap();
        assert_eq!(words(&got), vec!["MELODY", "JAZZ", "ROCK", "JAM"]);
    }

    #[test]
    fn test_filters_length_bounds() {
        let got = prepare_candidates(&inputs(&[
            "ox",
            "cat",
            "abcdefghijkl",
            "abcdefghijklm",
            "dog",
        ]))
        .unwrap();
        assert_eq!(words(&got), vec!["ABCDEFGHIJKL", "CAT", "DOG"]);
    }

    #[test]
    fn test_length_counted_after_cleaning() {
        // "a.b" cleans to two letters and is rejected; "x-ray" cleans to XRAY
        let got = prepare_candidates(&inputs(&["a.b", "x-ray", "cat", "dog"])).unwrap();
        assert_eq!(words(&got), vec!["XRAY", "CAT", "DOG"]);
    }

    #[test]
    fn test_deduplicates_keeping_first_clue() {
        let raw = vec![
            ClueInput::new("first", "Jazz"),
            ClueInput::new("second", "JAZZ!"),
            ClueInput::new("c", "band"),
            ClueInput::new("d", "beat"),
        ];
        let got = prepare_candidates(&raw).unwrap();
        assert_eq!(words(&got), vec!["JAZZ", "BAND", "BEAT"]);
        assert_eq!(got[0].clue, "first");
    }

    #[test]
    fn test_clue_text_untouched() {
        let raw = vec![
            ClueInput::new("  Miles Davis's genre?  ", "jazz"),
            ClueInput::new("b", "band"),
            ClueInput::new("c", "beat"),
        ];
        let got = prepare_candidates(&raw).unwrap();
        assert_eq!(got[0].clue, "  Miles Davis's genre?  ");
    }

    #[test]
    fn test_too_few_valid_words() {
        let err = prepare_candidates(&inputs(&["ok", "cat", "a1", "dog"])).unwrap_err();
        assert_eq!(err, LayoutError::TooFewValidWords { valid: 2, required: 3 });

        let err = prepare_candidates(&[]).unwrap_err();
        assert_eq!(err, LayoutError::TooFewValidWords { valid: 0, required: 3 });
    }

    #[test]
    fn test_duplicates_do_not_count_toward_minimum() {
        let err = prepare_candidates(&inputs(&["cat", "CAT", "cat!", "dog"])).unwrap_err();
        assert_eq!(err, LayoutError::TooFewValidWords { valid: 2, required: 3 });
    }

    #[test]
    fn test_parse_clue_list() {
        let text = "JAZZ;Improvised genre\n\n# comment\nBAND; Group of players \nno separator here\nBEAT;Pulse; steady";
        let list = ClueList::parse_from_str(text);
        assert_eq!(
            list.clues,
            vec![
                ClueInput::new("Improvised genre", "JAZZ"),
                ClueInput::new("Group of players", "BAND"),
                ClueInput::new("Pulse; steady", "BEAT"),
            ]
        );
    }

    #[test]
    fn test_parse_empty_clue_list() {
        assert!(ClueList::parse_from_str("").clues.is_empty());
    }

    #[test]
    fn test_question_alias_deserializes() {
        let json = r#"[{"question": "Genre", "answer": "jazz"}, {"clue": "Group", "answer": "band"}]"#;
        let parsed: Vec<ClueInput> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed[0], ClueInput::new("Genre", "jazz"));
        assert_eq!(parsed[1], ClueInput::new("Group", "band"));
    }
}
