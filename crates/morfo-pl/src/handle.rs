// PolishHandle: top-level integration point for Polish spell checking.
//
// Owns the speller, the stemmer, the prefix set, the options and the
// suggestion hook/order, and exposes the checking and tagging operations.
//
// The rule, the tagger and the compound analyzer borrow their collaborators,
// so the handle creates them on the fly in each method call instead of
// storing them next to the data they point into.

use std::path::Path;

use morfo_core::analysis::{Reading, TokenReadings};
use morfo_core::error::ResourceError;
use morfo_core::rule_match::RuleMatch;
use morfo_core::token::Token;

use crate::compound::{CompoundAnalyzer, CompoundVerdict};
use crate::morphology::{DualCaseTagger, LexiconStemmer, Stemmer, create_null_token};
use crate::polish::PrefixSet;
use crate::rule::{CheckSession, Evaluation, SpellerOptions, SpellerRule};
use crate::speller::{Speller, WordListSpeller};
use crate::suggestion::{
    EditDistanceOrder, NoAdditionalSuggestions, SuggestionHook, SuggestionOrder,
};

/// Errors raised while building or using a [`PolishHandle`].
#[derive(Debug, thiserror::Error)]
pub enum MorfoError {
    /// A collaborator failed.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// A lexicon line could not be parsed.
    #[error("invalid lexicon at line {line}: {reason}")]
    InvalidLexicon { line: usize, reason: String },

    /// The options are inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SpellerOptions {
    /// Reject extra prefixes that could never match a split.
    pub fn validate(&self) -> Result<(), MorfoError> {
        for prefix in &self.extra_prefixes {
            if prefix.chars().count() < 2 {
                return Err(MorfoError::InvalidConfig(format!(
                    "prefix {prefix:?} is shorter than two characters"
                )));
            }
            if prefix.chars().any(|c| c.is_whitespace() || c == '-') {
                return Err(MorfoError::InvalidConfig(format!(
                    "prefix {prefix:?} contains a separator"
                )));
            }
        }
        Ok(())
    }
}

/// Top-level handle that owns every Polish spell checking component.
pub struct PolishHandle {
    speller: Box<dyn Speller>,
    stemmer: Box<dyn Stemmer>,
    prefixes: PrefixSet,
    /// Set by `with_prefixes`; options no longer rebuild the prefix set.
    custom_prefixes: bool,
    options: SpellerOptions,
    hook: Box<dyn SuggestionHook>,
    order: Box<dyn SuggestionOrder>,
}

impl PolishHandle {
    /// Create a handle with default options, no suggestion hook and
    /// edit-distance ordering.
    pub fn new(speller: impl Speller + 'static, stemmer: impl Stemmer + 'static) -> Self {
        let options = SpellerOptions::default();
        Self {
            speller: Box::new(speller),
            stemmer: Box::new(stemmer),
            prefixes: options.prefix_set(),
            custom_prefixes: false,
            options,
            hook: Box::new(NoAdditionalSuggestions),
            order: Box::new(EditDistanceOrder),
        }
    }

    /// Load a word list and a lexicon from disk.
    pub fn from_paths(
        words: &Path,
        lexicon: &Path,
        options: SpellerOptions,
    ) -> Result<Self, MorfoError> {
        let speller = WordListSpeller::from_path(words)?;
        let stemmer = LexiconStemmer::from_path(lexicon)?;
        Self::new(speller, stemmer).with_options(options)
    }

    /// Replace the options. The prefix set is rebuilt from `extra_prefixes`
    /// unless one was supplied with [`with_prefixes`](Self::with_prefixes).
    pub fn with_options(mut self, options: SpellerOptions) -> Result<Self, MorfoError> {
        options.validate()?;
        if !self.custom_prefixes {
            self.prefixes = options.prefix_set();
        }
        self.options = options;
        Ok(self)
    }

    /// Replace the prefix set. It is kept as given in either call order:
    /// `extra_prefixes` of the current and any later options are ignored.
    pub fn with_prefixes(mut self, prefixes: PrefixSet) -> Self {
        self.prefixes = prefixes;
        self.custom_prefixes = true;
        self
    }

    pub fn with_hook(mut self, hook: impl SuggestionHook + 'static) -> Self {
        self.hook = Box::new(hook);
        self
    }

    pub fn with_order(mut self, order: impl SuggestionOrder + 'static) -> Self {
        self.order = Box::new(order);
        self
    }

    // =========================================================================
    // Checking
    // =========================================================================

    /// Matches for `word` at character offset `start_pos`.
    pub fn evaluate(&self, word: &str, start_pos: usize) -> Result<Vec<RuleMatch>, MorfoError> {
        Ok(self.evaluate_detailed(word, start_pos)?.matches)
    }

    /// Matches for `word` together with the compound verdicts that
    /// suppressed any of its parts.
    pub fn evaluate_detailed(
        &self,
        word: &str,
        start_pos: usize,
    ) -> Result<Evaluation, MorfoError> {
        let tagger = self.tagger();
        Ok(self.rule(&tagger).evaluate_detailed(word, start_pos)?)
    }

    /// Check a token sequence within a session.
    pub fn check_tokens(
        &self,
        tokens: &[Token],
        session: &mut CheckSession,
    ) -> Result<Vec<RuleMatch>, MorfoError> {
        let tagger = self.tagger();
        Ok(self.rule(&tagger).check_tokens(tokens, session)?)
    }

    /// Run compound analysis on `word` alone, whether or not it is misspelled.
    pub fn analyze_compound(&self, word: &str) -> Result<CompoundVerdict, MorfoError> {
        let tagger = self.tagger();
        let analyzer = CompoundAnalyzer::new(&self.prefixes, &*self.speller, &tagger);
        Ok(analyzer.analyze(word)?)
    }

    // =========================================================================
    // Tagging
    // =========================================================================

    /// Readings for each token, literal-case readings first.
    pub fn tag(&self, tokens: &[&str]) -> Result<Vec<TokenReadings>, MorfoError> {
        Ok(self.tagger().tag(tokens)?)
    }

    /// A placeholder reading with no lemma and no tag.
    pub fn create_null_token(token: &str, start_pos: usize) -> Reading {
        create_null_token(token, start_pos)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn options(&self) -> &SpellerOptions {
        &self.options
    }

    pub fn prefixes(&self) -> &PrefixSet {
        &self.prefixes
    }

    /// Return the crate version (from Cargo.toml).
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn tagger(&self) -> DualCaseTagger<'_> {
        DualCaseTagger::new(&*self.stemmer)
    }

    fn rule<'a>(&'a self, tagger: &'a DualCaseTagger<'a>) -> SpellerRule<'a> {
        SpellerRule::new(&*self.speller, tagger, &self.prefixes, &self.options)
            .with_hook(&*self.hook)
            .with_order(&*self.order)
    }
}
