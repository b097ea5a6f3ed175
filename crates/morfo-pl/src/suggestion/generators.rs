// Individual suggestion generators: each applies one class of edit operation
// to produce candidate words, then validates them against the word list.

use morfo_core::case::{CaseType, detect_case, set_case, to_lower};

use super::status::SuggestionStatus;

/// Letter pairs that differ only by a Polish diacritic, plus the u/ó
/// homophones. Applied in both directions.
const DIACRITIC_PAIRS: &[(char, char)] = &[
    ('a', 'ą'),
    ('c', 'ć'),
    ('e', 'ę'),
    ('l', 'ł'),
    ('n', 'ń'),
    ('o', 'ó'),
    ('s', 'ś'),
    ('z', 'ż'),
    ('z', 'ź'),
    ('ż', 'ź'),
    ('u', 'ó'),
];

/// Source of truth for candidate validation.
pub trait WordLookup {
    /// Whether `word` is a correct form.
    fn accepts(&self, word: &str) -> bool;
}

/// Trait for individual suggestion generators.
pub trait SuggestionGenerator {
    /// Generate candidates for the word tracked by `status`, validating each
    /// through `lookup`.
    fn generate(&self, lookup: &dyn WordLookup, status: &mut SuggestionStatus<'_>);
}

/// Check a candidate against the word list and record it if accepted.
pub fn suggest_for_buffer(
    lookup: &dyn WordLookup,
    status: &mut SuggestionStatus<'_>,
    buffer: &[char],
    priority: i32,
) {
    if status.should_abort() {
        return;
    }
    let candidate: String = buffer.iter().collect();
    status.charge();
    if lookup.accepts(&candidate) {
        status.add_suggestion(candidate, priority);
    }
}

// ---------------------------------------------------------------------------
// CaseChange
// ---------------------------------------------------------------------------

/// Try the word lowercased and with only the first letter capitalized.
pub struct CaseChange;

impl SuggestionGenerator for CaseChange {
    fn generate(&self, lookup: &dyn WordLookup, status: &mut SuggestionStatus<'_>) {
        let word: String = status.word().iter().collect();
        let candidates = match detect_case(&word) {
            CaseType::NoLetters => return,
            CaseType::AllLower => vec![set_case(&word, CaseType::FirstUpper)],
            _ => {
                let lower = to_lower(&word);
                let capitalized = set_case(&lower, CaseType::FirstUpper);
                vec![lower, capitalized]
            }
        };
        for candidate in candidates {
            let buffer: Vec<char> = candidate.chars().collect();
            suggest_for_buffer(lookup, status, &buffer, 1);
        }
    }
}

// ---------------------------------------------------------------------------
// Diacritics
// ---------------------------------------------------------------------------

/// Add, remove or swap a diacritic on one letter.
pub struct Diacritics;

impl SuggestionGenerator for Diacritics {
    fn generate(&self, lookup: &dyn WordLookup, status: &mut SuggestionStatus<'_>) {
        let word = status.word().to_vec();
        let mut buffer = word.clone();
        for i in 0..word.len() {
            for &(from, to) in DIACRITIC_PAIRS {
                if status.should_abort() {
                    return;
                }
                let replacement = if word[i] == from {
                    to
                } else if word[i] == to {
                    from
                } else {
                    continue;
                };
                if replacement == word[i] {
                    continue;
                }
                buffer[i] = replacement;
                suggest_for_buffer(lookup, status, &buffer, 1);
                buffer[i] = word[i];
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Try deleting one character at each position.
///
/// Skips positions where the character repeats its predecessor, since that
/// would produce the same candidate as the previous iteration.
pub struct Deletion;

impl SuggestionGenerator for Deletion {
    fn generate(&self, lookup: &dyn WordLookup, status: &mut SuggestionStatus<'_>) {
        let word = status.word().to_vec();
        if word.len() < 2 {
            return;
        }
        let mut buffer = Vec::with_capacity(word.len() - 1);
        for i in 0..word.len() {
            if status.should_abort() {
                break;
            }
            if i > 0 && word[i] == word[i - 1] {
                continue;
            }
            buffer.clear();
            buffer.extend_from_slice(&word[..i]);
            buffer.extend_from_slice(&word[i + 1..]);
            suggest_for_buffer(lookup, status, &buffer, 2);
        }
    }
}

// ---------------------------------------------------------------------------
// Swap
// ---------------------------------------------------------------------------

/// Swap each pair of adjacent characters.
pub struct Swap;

impl SuggestionGenerator for Swap {
    fn generate(&self, lookup: &dyn WordLookup, status: &mut SuggestionStatus<'_>) {
        let mut buffer = status.word().to_vec();
        for i in 1..buffer.len() {
            if status.should_abort() {
                break;
            }
            if buffer[i] == buffer[i - 1] {
                continue;
            }
            buffer.swap(i - 1, i);
            suggest_for_buffer(lookup, status, &buffer, 2);
            buffer.swap(i - 1, i);
        }
    }
}

// ---------------------------------------------------------------------------
// Replacement
// ---------------------------------------------------------------------------

/// Replace each character with every character from a set.
pub struct Replacement {
    pub characters: Vec<char>,
}

impl SuggestionGenerator for Replacement {
    fn generate(&self, lookup: &dyn WordLookup, status: &mut SuggestionStatus<'_>) {
        let word = status.word().to_vec();
        let mut buffer = word.clone();
        for i in 0..word.len() {
            for &c in &self.characters {
                if status.should_abort() {
                    return;
                }
                if c == word[i] {
                    continue;
                }
                buffer[i] = c;
                suggest_for_buffer(lookup, status, &buffer, 3);
            }
            buffer[i] = word[i];
        }
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Insert each character from a set at every position, end included.
pub struct Insertion {
    pub characters: Vec<char>,
}

impl SuggestionGenerator for Insertion {
    fn generate(&self, lookup: &dyn WordLookup, status: &mut SuggestionStatus<'_>) {
        let word = status.word().to_vec();
        let mut buffer = Vec::with_capacity(word.len() + 1);
        for &c in &self.characters {
            for j in 0..=word.len() {
                if status.should_abort() {
                    return;
                }
                // Inserting a copy of the neighbour yields the same word twice.
                if j > 0 && word[j - 1] == c {
                    continue;
                }
                buffer.clear();
                buffer.extend_from_slice(&word[..j]);
                buffer.push(c);
                buffer.extend_from_slice(&word[j..]);
                suggest_for_buffer(lookup, status, &buffer, 3);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// SplitWord
// ---------------------------------------------------------------------------

/// Split a run-together word in two ("niewiem" -> "nie wiem").
pub struct SplitWord;

impl SuggestionGenerator for SplitWord {
    fn generate(&self, lookup: &dyn WordLookup, status: &mut SuggestionStatus<'_>) {
        let word = status.word().to_vec();
        for i in 1..word.len() {
            if status.should_abort() {
                break;
            }
            let first: String = word[..i].iter().collect();
            let second: String = word[i..].iter().collect();
            status.charge();
            if !lookup.accepts(&first) {
                continue;
            }
            status.charge();
            if lookup.accepts(&second) {
                status.add_suggestion(format!("{first} {second}"), 4);
            }
        }
    }
}
