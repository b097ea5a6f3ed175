// Suggestion handling
//
//   - `assemble`: merge the oracle's list with hook output, deduplicate,
//     order and trim for a flagged word
//   - `generators`, `status`, `strategy`: edit-operation search used by the
//     word-list speller to produce the oracle's raw list

pub mod generators;
pub mod status;
pub mod strategy;

pub use generators::{SuggestionGenerator, WordLookup};
pub use status::{Suggestion, SuggestionStatus};
pub use strategy::{SuggestionStrategy, typing_strategy};

use std::cmp::Ordering;

use hashbrown::HashSet;
use morfo_core::case::to_lower;
use unicode_normalization::UnicodeNormalization;

/// Extra suggestions appended after the oracle's list.
pub trait SuggestionHook {
    /// Return extra candidates for `word`. `suggestions` is the oracle's list.
    fn additional_suggestions(&self, suggestions: &[String], word: &str) -> Vec<String>;
}

/// A hook that adds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdditionalSuggestions;

impl SuggestionHook for NoAdditionalSuggestions {
    fn additional_suggestions(&self, _suggestions: &[String], _word: &str) -> Vec<String> {
        Vec::new()
    }
}

impl<F> SuggestionHook for F
where
    F: Fn(&[String], &str) -> Vec<String>,
{
    fn additional_suggestions(&self, suggestions: &[String], word: &str) -> Vec<String> {
        self(suggestions, word)
    }
}

/// A total order over candidate corrections of `word`.
///
/// Applied once with a stable sort, so candidates that compare equal keep
/// the order in which the oracle and the hook produced them.
pub trait SuggestionOrder {
    fn compare(&self, word: &str, a: &str, b: &str) -> Ordering;
}

/// Keep the order in which candidates were produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleOrder;

impl SuggestionOrder for OracleOrder {
    fn compare(&self, _word: &str, _a: &str, _b: &str) -> Ordering {
        Ordering::Equal
    }
}

/// Rank candidates by case-insensitive edit distance to the flagged word.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistanceOrder;

impl SuggestionOrder for EditDistanceOrder {
    fn compare(&self, word: &str, a: &str, b: &str) -> Ordering {
        let word = to_lower(word);
        edit_distance(&word, &to_lower(a)).cmp(&edit_distance(&word, &to_lower(b)))
    }
}

/// Damerau-Levenshtein distance (optimal string alignment) over characters.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_two: Vec<usize> = vec![0; b.len() + 1];
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for i in 0..a.len() {
        curr[0] = i + 1;
        for j in 0..b.len() {
            let cost = usize::from(a[i] != b[j]);
            curr[j + 1] = (curr[j] + 1).min(prev[j + 1] + 1).min(prev[j] + cost);
            if i > 0 && j > 0 && a[i] == b[j - 1] && a[i - 1] == b[j] {
                curr[j + 1] = curr[j + 1].min(prev_two[j - 1] + 1);
            }
        }
        std::mem::swap(&mut prev_two, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Canonical composition (NFC), so that "ż" and "z" + U+0307 compare equal.
fn compose(word: &str) -> String {
    word.nfc().collect()
}

/// Build the final suggestion list for a flagged word.
///
/// 1. Append the hook's candidates to the oracle's list.
/// 2. Drop the flagged word itself and empty strings.
/// 3. Drop later duplicates, comparing composed lowercased forms.
/// 4. Stable-sort with `order`, then keep at most `limit` entries.
///
/// Candidates are returned as produced; only the comparisons normalize.
pub fn assemble(
    word: &str,
    raw: Vec<String>,
    hook: &dyn SuggestionHook,
    order: &dyn SuggestionOrder,
    limit: Option<usize>,
) -> Vec<String> {
    let extra = hook.additional_suggestions(&raw, word);
    let composed_word = compose(word);

    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<String> = raw
        .into_iter()
        .chain(extra)
        .filter(|s| !s.is_empty())
        .filter(|s| {
            let composed = compose(s);
            composed != composed_word && seen.insert(to_lower(&composed))
        })
        .collect();

    out.sort_by(|a, b| order.compare(word, a, b));
    if let Some(limit) = limit {
        out.truncate(limit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn edit_distance_basics() {
        assert_eq!(edit_distance("kot", "kot"), 0);
        assert_eq!(edit_distance("kot", "kto"), 1);
        assert_eq!(edit_distance("kot", "kota"), 1);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("łąka", "laka"), 2);
    }

    #[test]
    fn edit_distance_order_is_case_insensitive() {
        let order = EditDistanceOrder;
        assert_eq!(order.compare("Kto", "KOT", "kat"), Ordering::Less);
    }

    #[test]
    fn assemble_removes_flagged_word_and_duplicates() {
        let got = assemble(
            "xqzabc",
            strings(&["xqzabc", "abc", "Abc", "xabc", "ABC"]),
            &NoAdditionalSuggestions,
            &OracleOrder,
            None,
        );
        assert_eq!(got, vec!["abc", "xabc"]);
    }

    #[test]
    fn assemble_merges_canonically_equal_forms() {
        let got = assemble(
            "wazny",
            strings(&["ważny", "waz\u{307}ny", "Waz\u{307}ny"]),
            &NoAdditionalSuggestions,
            &OracleOrder,
            None,
        );
        assert_eq!(got, vec!["ważny"]);
    }

    #[test]
    fn assemble_drops_decomposed_spelling_of_flagged_word() {
        let got = assemble(
            "ważny",
            strings(&["waz\u{307}ny", "ważne"]),
            &NoAdditionalSuggestions,
            &OracleOrder,
            None,
        );
        assert_eq!(got, vec!["ważne"]);
    }

    #[test]
    fn assemble_appends_hook_output() {
        let hook = |_raw: &[String], word: &str| vec![format!("{word}-hook"), "kot".to_string()];
        let got = assemble("kto", strings(&["kot"]), &hook, &OracleOrder, None);
        assert_eq!(got, vec!["kot", "kto-hook"]);
    }

    #[test]
    fn assemble_orders_with_stable_sort() {
        let got = assemble(
            "kto",
            strings(&["kotka", "tok", "kot", "kat"]),
            &NoAdditionalSuggestions,
            &EditDistanceOrder,
            None,
        );
        // kot: 1; tok: 2; kat: 2; kotka: 3
        assert_eq!(got, vec!["kot", "tok", "kat", "kotka"]);
    }

    #[test]
    fn assemble_truncates_after_ordering() {
        let got = assemble(
            "kto",
            strings(&["kotka", "kot"]),
            &NoAdditionalSuggestions,
            &EditDistanceOrder,
            Some(1),
        );
        assert_eq!(got, vec!["kot"]);
    }

    #[test]
    fn assemble_empty_input_is_empty() {
        let got = assemble("kto", Vec::new(), &NoAdditionalSuggestions, &OracleOrder, None);
        assert!(got.is_empty());
    }
}
