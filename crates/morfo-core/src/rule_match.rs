// Diagnostic produced for a flagged word

use serde::{Deserialize, Serialize};

use crate::enums::MessageKind;

/// A flagged span of text with replacement suggestions.
///
/// At most one match is produced per word. `start_pos..end_pos` is a
/// half-open character range in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch {
    /// Identifier of the rule that produced the match.
    pub rule_id: String,

    /// What is wrong with the span.
    pub kind: MessageKind,

    /// Start position of the flagged span (character offset).
    pub start_pos: usize,

    /// End position of the flagged span, exclusive.
    pub end_pos: usize,

    /// Suggested replacements, best first.
    pub suggestions: Vec<String>,
}

impl RuleMatch {
    /// Create a new match with no suggestions.
    pub fn new(
        rule_id: impl Into<String>,
        kind: MessageKind,
        start_pos: usize,
        end_pos: usize,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            kind,
            start_pos,
            end_pos,
            suggestions: Vec::new(),
        }
    }

    /// Length of the flagged span in characters.
    pub fn len(&self) -> usize {
        self.end_pos - self.start_pos
    }

    pub fn is_empty(&self) -> bool {
        self.start_pos == self.end_pos
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    pub fn short_message(&self) -> &'static str {
        self.kind.short_message()
    }

    pub fn set_suggestions(&mut self, suggestions: Vec<String>) {
        self.suggestions = suggestions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_match() {
        let m = RuleMatch::new("RULE", MessageKind::Spelling, 5, 8);
        assert_eq!(m.start_pos, 5);
        assert_eq!(m.end_pos, 8);
        assert_eq!(m.len(), 3);
        assert!(m.suggestions.is_empty());
        assert_eq!(m.message(), "Possible spelling mistake");
    }

    #[test]
    fn set_suggestions_replaces() {
        let mut m = RuleMatch::new("RULE", MessageKind::Spelling, 0, 7);
        m.set_suggestions(vec!["stolica".to_string()]);
        assert_eq!(m.suggestions, vec!["stolica"]);
        m.set_suggestions(Vec::new());
        assert!(m.suggestions.is_empty());
    }

    #[test]
    fn clone_is_independent() {
        let mut m = RuleMatch::new("RULE", MessageKind::Spelling, 0, 2);
        m.set_suggestions(vec!["fix".to_string()]);
        let mut cloned = m.clone();
        cloned.suggestions.push("another".to_string());
        assert_eq!(m.suggestions.len(), 1);
        assert_eq!(cloned.suggestions.len(), 2);
    }
}
