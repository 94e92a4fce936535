//! Guess evaluation against the target word
//!
//! Two passes over the guess:
//! - exact matches first, each consuming its target letter
//! - then misplaced letters, left to right, consuming the leftmost
//!   unconsumed occurrence in the target

use serde::{Deserialize, Serialize};

/// Letters per word
pub const WORD_LEN: usize = 5;

/// Per-letter feedback for a submitted guess
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    /// In the word and in the right spot
    Correct,
    /// In the word, wrong spot
    Present,
    /// Not in the word (or all occurrences already accounted for)
    Absent,
}

impl LetterStatus {
    /// Ordering used when folding several guesses into one key color
    pub fn rank(self) -> u8 {
        match self {
            LetterStatus::Absent => 0,
            LetterStatus::Present => 1,
            LetterStatus::Correct => 2,
        }
    }
}

/// Feedback for one guess, one status per position
pub type Evaluation = [LetterStatus; WORD_LEN];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluateError {
    #[error("both guess and target must be 5 letters (got {guess} and {target})")]
    LengthMismatch { guess: usize, target: usize },

    #[error("word contains a non-alphabetic character: {0:?}")]
    NotAlphabetic(String),
}

/// Normalize a word to uppercase ASCII letters, rejecting anything else
pub fn normalize_word(word: &str) -> Result<[u8; WORD_LEN], EvaluateError> {
    let upper = word.trim().to_ascii_uppercase();
    if !upper.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(EvaluateError::NotAlphabetic(word.to_string()));
    }
    upper
        .as_bytes()
        .try_into()
        .map_err(|_| EvaluateError::LengthMismatch {
            guess: upper.len(),
            target: WORD_LEN,
        })
}

/// Evaluate `guess` against `target` (case-insensitive)
pub fn evaluate(guess: &str, target: &str) -> Result<Evaluation, EvaluateError> {
    let guess_len = guess.trim().chars().count();
    let target_len = target.trim().chars().count();
    if guess_len != WORD_LEN || target_len != WORD_LEN {
        return Err(EvaluateError::LengthMismatch {
            guess: guess_len,
            target: target_len,
        });
    }

    let guess = normalize_word(guess)?;
    let target = normalize_word(target)?;

    let mut evaluation = [LetterStatus::Absent; WORD_LEN];
    let mut remaining: [Option<u8>; WORD_LEN] = target.map(Some);

    for i in 0..WORD_LEN {
        if guess[i] == target[i] {
            evaluation[i] = LetterStatus::Correct;
            remaining[i] = None;
        }
    }

    for i in 0..WORD_LEN {
        if evaluation[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(guess[i])) {
            evaluation[i] = LetterStatus::Present;
            *slot = None;
        }
    }

    Ok(evaluation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::LetterStatus::{Absent as A, Correct as C, Present as P};

    #[test]
    fn test_exact_match() {
        assert_eq!(evaluate("CRANE", "CRANE").unwrap(), [C; WORD_LEN]);
    }

    #[test]
    fn test_no_common_letters() {
        assert_eq!(evaluate("BUMPY", "CRANE").unwrap(), [A; WORD_LEN]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            evaluate("crane", "CRATE").unwrap(),
            evaluate("CRANE", "crate").unwrap()
        );
        assert_eq!(evaluate("crane", "CRATE").unwrap(), [C, C, C, A, C]);
    }

    #[test]
    fn test_misplaced_letters() {
        assert_eq!(evaluate("LEMON", "MELON").unwrap(), [P, C, P, C, C]);
        // every letter present, none in place
        assert_eq!(evaluate("HEART", "EARTH").unwrap(), [P, P, P, P, P]);
    }

    #[test]
    fn test_duplicate_guess_letter_single_in_target() {
        // only one E in ABIDE, so only the leftmost misplaced E is marked
        assert_eq!(evaluate("SPEED", "ABIDE").unwrap(), [A, A, P, A, P]);
    }

    #[test]
    fn test_exact_match_consumes_before_misplaced() {
        assert_eq!(evaluate("EERIE", "THREE").unwrap(), [P, A, C, A, C]);
        // two Ls in the target, so both misplaced Ls are marked
        assert_eq!(evaluate("LLAMA", "HELLO").unwrap(), [P, P, A, A, A]);
        assert_eq!(evaluate("ALLOT", "HELLO").unwrap(), [A, P, C, P, A]);
    }

    #[test]
    fn test_marks_never_exceed_target_count() {
        let evaluation = evaluate("EEEEE", "GEESE").unwrap();
        let marked = evaluation.iter().filter(|s| **s != A).count();
        assert_eq!(marked, 3);
        assert_eq!(evaluation, [A, C, C, A, C]);
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            evaluate("CAT", "CRANE"),
            Err(EvaluateError::LengthMismatch { guess: 3, target: 5 })
        );
        assert!(evaluate("CRANE", "CRANES").is_err());
    }

    #[test]
    fn test_rejects_non_letters() {
        assert!(matches!(
            evaluate("CR4NE", "CRANE"),
            Err(EvaluateError::NotAlphabetic(_))
        ));
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&[C, P, A]).unwrap();
        assert_eq!(json, r#"["correct","present","absent"]"#);
        let parsed: LetterStatus = serde_json::from_str("\"present\"").unwrap();
        assert_eq!(parsed, P);
    }

    #[test]
    fn test_rank_order() {
        assert!(A.rank() < P.rank());
        assert!(P.rank() < C.rank());
    }
}
