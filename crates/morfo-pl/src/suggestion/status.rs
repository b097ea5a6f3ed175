// Suggestion search state: cost budget, abort conditions, deduplication

use hashbrown::HashSet;

/// A candidate correction with its computed priority.
///
/// Lower priority values indicate better suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub priority: i32,
}

/// Tracks found suggestions and the remaining budget while generators run.
///
/// Every dictionary lookup made on behalf of a generator is paid for with
/// `charge()`. Once `current_cost` reaches `max_cost` the search stops,
/// unless nothing has been found yet, in which case it may run up to twice
/// the budget.
pub struct SuggestionStatus<'a> {
    word: &'a [char],
    max_suggestions: usize,
    max_cost: usize,
    current_cost: usize,
    suggestions: Vec<Suggestion>,
    seen: HashSet<String>,
}

impl<'a> SuggestionStatus<'a> {
    pub fn new(word: &'a [char], max_suggestions: usize) -> Self {
        Self {
            word,
            max_suggestions,
            max_cost: 0,
            current_cost: 0,
            suggestions: Vec::with_capacity(max_suggestions.min(16)),
            seen: HashSet::new(),
        }
    }

    /// Returns `true` if no more candidates should be tried.
    pub fn should_abort(&self) -> bool {
        if self.suggestions.len() >= self.max_suggestions {
            return true;
        }
        if self.current_cost < self.max_cost {
            return false;
        }
        if self.suggestions.is_empty() && self.current_cost < 2 * self.max_cost {
            return false;
        }
        true
    }

    /// Pay for one dictionary lookup.
    pub fn charge(&mut self) {
        self.current_cost += 1;
    }

    pub fn set_max_cost(&mut self, max_cost: usize) {
        self.max_cost = max_cost;
    }

    pub fn current_cost(&self) -> usize {
        self.current_cost
    }

    /// Record a suggestion with a base priority.
    ///
    /// The stored priority is `priority * (count + 5)`, so that suggestions
    /// found later rank behind earlier ones of the same base priority.
    /// Repeated words and the word under correction itself are ignored.
    pub fn add_suggestion(&mut self, suggestion: String, priority: i32) {
        if self.suggestions.len() >= self.max_suggestions {
            return;
        }
        if self.word.iter().copied().eq(suggestion.chars()) {
            return;
        }
        if !self.seen.insert(suggestion.clone()) {
            return;
        }
        let final_priority = priority * (self.suggestions.len() as i32 + 5);
        self.suggestions.push(Suggestion {
            word: suggestion,
            priority: final_priority,
        });
    }

    /// Stable sort by priority, best first.
    pub fn sort_suggestions(&mut self) {
        self.suggestions.sort_by_key(|s| s.priority);
    }

    pub fn suggestion_count(&self) -> usize {
        self.suggestions.len()
    }

    pub fn word(&self) -> &[char] {
        self.word
    }

    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Consume the status and return the suggested words in priority order.
    pub fn into_words(mut self) -> Vec<String> {
        self.sort_suggestions();
        self.suggestions.into_iter().map(|s| s.word).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn new_status_is_empty() {
        let word = chars("kot");
        let status = SuggestionStatus::new(&word, 5);
        assert_eq!(status.suggestion_count(), 0);
        assert_eq!(status.current_cost(), 0);
        assert_eq!(status.word_len(), 3);
    }

    #[test]
    fn aborts_when_max_suggestions_reached() {
        let word = chars("ab");
        let mut status = SuggestionStatus::new(&word, 2);
        status.set_max_cost(1000);
        status.add_suggestion("a".to_string(), 1);
        assert!(!status.should_abort());
        status.add_suggestion("b".to_string(), 1);
        assert!(status.should_abort());
    }

    #[test]
    fn budget_doubles_while_nothing_found() {
        let word = chars("abc");
        let mut status = SuggestionStatus::new(&word, 5);
        status.set_max_cost(10);
        for _ in 0..10 {
            status.charge();
        }
        assert!(!status.should_abort());
        for _ in 0..10 {
            status.charge();
        }
        assert!(status.should_abort());
    }

    #[test]
    fn aborts_at_budget_once_something_found() {
        let word = chars("abc");
        let mut status = SuggestionStatus::new(&word, 5);
        status.set_max_cost(10);
        status.add_suggestion("abd".to_string(), 1);
        for _ in 0..9 {
            status.charge();
        }
        assert!(!status.should_abort());
        status.charge();
        assert!(status.should_abort());
    }

    #[test]
    fn later_suggestions_get_larger_priority() {
        let word = chars("abc");
        let mut status = SuggestionStatus::new(&word, 5);
        status.add_suggestion("first".to_string(), 10);
        status.add_suggestion("second".to_string(), 10);
        assert_eq!(status.suggestions()[0].priority, 50);
        assert_eq!(status.suggestions()[1].priority, 60);
    }

    #[test]
    fn duplicates_and_original_word_are_ignored() {
        let word = chars("kto");
        let mut status = SuggestionStatus::new(&word, 5);
        status.add_suggestion("kot".to_string(), 1);
        status.add_suggestion("kot".to_string(), 2);
        status.add_suggestion("kto".to_string(), 1);
        assert_eq!(status.suggestion_count(), 1);
    }

    #[test]
    fn into_words_sorts_by_priority() {
        let word = chars("abc");
        let mut status = SuggestionStatus::new(&word, 5);
        status.add_suggestion("high".to_string(), 100);
        status.add_suggestion("low".to_string(), 1);
        status.add_suggestion("mid".to_string(), 10);
        assert_eq!(status.into_words(), vec!["low", "mid", "high"]);
    }
}
