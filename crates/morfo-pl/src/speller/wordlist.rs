// In-memory spelling oracle backed by a plain word list

use std::path::Path;

use hashbrown::HashSet;
use log::{debug, trace};
use morfo_core::error::ResourceError;

use crate::speller::Speller;
use crate::suggestion::{SuggestionStatus, SuggestionStrategy, WordLookup};

/// Default number of corrections returned by [`WordListSpeller::suggestions`].
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// A [`Speller`] that accepts exactly the forms in its list.
///
/// Lookups are case-sensitive: "Warszawa" and "warszawa" are separate
/// entries. Corrections come from a [`SuggestionStrategy`] whose candidates
/// are validated against the same list.
pub struct WordListSpeller {
    words: HashSet<String>,
    strategy: SuggestionStrategy,
    max_suggestions: usize,
}

impl WordListSpeller {
    pub fn new() -> Self {
        Self {
            words: HashSet::new(),
            strategy: SuggestionStrategy::default(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    /// Parse a one-word-per-line list. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Self {
        let mut speller = Self::new();
        for line in text.lines() {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            speller.insert(word);
        }
        debug!("word list: loaded {} forms", speller.len());
        speller
    }

    /// Read and parse a word list file.
    pub fn from_path(path: &Path) -> Result<Self, ResourceError> {
        let text = std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Replace the suggestion strategy.
    pub fn with_strategy(mut self, strategy: SuggestionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    pub fn insert(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordListSpeller {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>> FromIterator<S> for WordListSpeller {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut speller = Self::new();
        for word in iter {
            speller.insert(word);
        }
        speller
    }
}

impl WordLookup for WordListSpeller {
    fn accepts(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl Speller for WordListSpeller {
    fn is_misspelled(&self, word: &str) -> Result<bool, ResourceError> {
        Ok(!self.contains(word))
    }

    fn suggestions(&self, word: &str) -> Result<Vec<String>, ResourceError> {
        let chars: Vec<char> = word.chars().collect();
        let mut status = SuggestionStatus::new(&chars, self.max_suggestions);
        self.strategy.generate(self, &mut status);
        trace!(
            "word list: {} candidates for {word:?} at cost {}",
            status.suggestion_count(),
            status.current_cost()
        );
        Ok(status.into_words())
    }
}
