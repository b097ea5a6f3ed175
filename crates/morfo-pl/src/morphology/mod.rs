// Morphological analysis module

mod lexicon;
mod tagger;

pub use lexicon::LexiconStemmer;
pub use tagger::{DualCaseTagger, create_null_token};

use morfo_core::analysis::TokenReadings;
use morfo_core::error::ResourceError;
use morfo_core::tag::Tag;

/// A single (lemma, tag) pair returned by a stemmer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StemReading {
    pub lemma: String,
    pub tag: Tag,
}

impl StemReading {
    pub fn new(lemma: impl Into<String>, tag: impl Into<Tag>) -> Self {
        Self {
            lemma: lemma.into(),
            tag: tag.into(),
        }
    }
}

/// Trait for low-level per-word stemmers.
///
/// Implementations look the form up exactly as given; case variants are
/// the caller's business (see [`DualCaseTagger`]). An empty result means
/// the form is unknown.
pub trait Stemmer {
    fn stem(&self, word: &str) -> Result<Vec<StemReading>, ResourceError>;
}

/// Trait for morphological reading providers.
///
/// Given an ordered sequence of tokens, returns one reading list per token
/// in the same order.
pub trait ReadingProvider {
    fn analyze_tokens(&self, tokens: &[&str]) -> Result<Vec<TokenReadings>, ResourceError>;
}

impl<T: Stemmer + ?Sized> Stemmer for &T {
    fn stem(&self, word: &str) -> Result<Vec<StemReading>, ResourceError> {
        (**self).stem(word)
    }
}

impl<T: ReadingProvider + ?Sized> ReadingProvider for &T {
    fn analyze_tokens(&self, tokens: &[&str]) -> Result<Vec<TokenReadings>, ResourceError> {
        (**self).analyze_tokens(tokens)
    }
}
