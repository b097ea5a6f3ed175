// Spelling oracle interface

pub mod wordlist;

pub use wordlist::WordListSpeller;

use morfo_core::error::ResourceError;

/// Trait for dictionary-backed spelling oracles.
///
/// The rule treats implementations as opaque: it only asks whether a word
/// is misspelled and, for flagged words, for a ranked list of corrections.
/// Both calls may fail when the backing dictionary cannot be reached; the
/// failure is handed back to the caller unchanged.
pub trait Speller {
    /// Whether `word` is absent from the dictionary.
    fn is_misspelled(&self, word: &str) -> Result<bool, ResourceError>;

    /// Ranked corrections for `word`, best first.
    fn suggestions(&self, word: &str) -> Result<Vec<String>, ResourceError>;
}

impl<T: Speller + ?Sized> Speller for &T {
    fn is_misspelled(&self, word: &str) -> Result<bool, ResourceError> {
        (**self).is_misspelled(word)
    }

    fn suggestions(&self, word: &str) -> Result<Vec<String>, ResourceError> {
        (**self).suggestions(word)
    }
}

impl<T: Speller + ?Sized> Speller for Box<T> {
    fn is_misspelled(&self, word: &str) -> Result<bool, ResourceError> {
        (**self).is_misspelled(word)
    }

    fn suggestions(&self, word: &str) -> Result<Vec<String>, ResourceError> {
        (**self).suggestions(word)
    }
}
