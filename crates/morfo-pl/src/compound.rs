// Compound suppression: decides whether a flagged word is really a
// prefix + stem compound or a two-part compound adjective.

use log::debug;
use morfo_core::analysis::TokenReadings;
use morfo_core::error::ResourceError;

use crate::morphology::ReadingProvider;
use crate::polish::PrefixSet;
use crate::polish::tags::{ADJECTIVAL_PREFIX, ADJECTIVE, ADVERB, COMPOUND_NUMERAL};
use crate::speller::Speller;

/// Shortest first part considered when splitting a word.
const MIN_FIRST_PART: usize = 2;

/// Which condition confirmed a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitKind {
    /// Known prefix followed by a correctly spelled stem ("arcy" + "ważny").
    Prefix,
    /// Adjectival or numeral modifier followed by an adjective
    /// ("biało" + "zielony", "trzynasto" + "bitowy").
    TagPair,
}

/// A split point that confirmed the word as a compound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSplit {
    /// Character index where the second part starts.
    pub at: usize,
    pub first: String,
    pub second: String,
    pub kind: SplitKind,
}

/// Result of compound analysis: every split that confirmed the word.
///
/// One confirming split is enough; the rest are kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompoundVerdict {
    pub word: String,
    pub splits: Vec<CompoundSplit>,
}

impl CompoundVerdict {
    fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            splits: Vec::new(),
        }
    }

    /// Whether the word should be accepted as a compound.
    pub fn is_compound(&self) -> bool {
        !self.splits.is_empty()
    }

    /// The first confirming split, if any.
    pub fn first_split(&self) -> Option<&CompoundSplit> {
        self.splits.first()
    }
}

/// Tries every split of a word against the prefix set, the speller and
/// the reading provider.
///
/// The analyzer has no side effects: recording accepted words is left to
/// the caller (see [`crate::rule::CheckSession`]).
pub struct CompoundAnalyzer<'a> {
    prefixes: &'a PrefixSet,
    speller: &'a dyn Speller,
    provider: &'a dyn ReadingProvider,
}

impl<'a> CompoundAnalyzer<'a> {
    pub fn new(
        prefixes: &'a PrefixSet,
        speller: &'a dyn Speller,
        provider: &'a dyn ReadingProvider,
    ) -> Self {
        Self {
            prefixes,
            speller,
            provider,
        }
    }

    /// Analyze `word`, scanning split points 2..len-1 (in characters).
    ///
    /// At each split the prefix condition is tried first; only when it does
    /// not hold are the two parts tagged and tested as a compound adjective.
    /// Words of at most two characters are never split.
    pub fn analyze(&self, word: &str) -> Result<CompoundVerdict, ResourceError> {
        let mut verdict = CompoundVerdict::new(word);
        let boundaries: Vec<usize> = word.char_indices().map(|(i, _)| i).collect();
        let len = boundaries.len();
        if len <= MIN_FIRST_PART {
            return Ok(verdict);
        }

        for at in MIN_FIRST_PART..len {
            let (first, second) = word.split_at(boundaries[at]);
            let kind = if self.is_prefix_compound(first, second)? {
                Some(SplitKind::Prefix)
            } else if self.is_adjective_compound(first, second)? {
                Some(SplitKind::TagPair)
            } else {
                None
            };

            if let Some(kind) = kind {
                debug!("compound: {word:?} = {first:?} + {second:?} ({kind:?})");
                verdict.splits.push(CompoundSplit {
                    at,
                    first: first.to_string(),
                    second: second.to_string(),
                    kind,
                });
            }
        }

        Ok(verdict)
    }

    /// Shorthand for `analyze(word)?.is_compound()`.
    pub fn is_compound(&self, word: &str) -> Result<bool, ResourceError> {
        Ok(self.analyze(word)?.is_compound())
    }

    fn is_prefix_compound(&self, first: &str, second: &str) -> Result<bool, ResourceError> {
        // Only consult the speller when the prefix matches.
        if !self.prefixes.contains(first) {
            return Ok(false);
        }
        Ok(!self.speller.is_misspelled(second)?)
    }

    fn is_adjective_compound(&self, first: &str, second: &str) -> Result<bool, ResourceError> {
        let tagged = self.provider.analyze_tokens(&[first, second])?;
        Ok(is_adjective_pair(&tagged))
    }
}

/// Modifier + adjective test over exactly two tagged tokens.
///
/// The modifier must be an adjectival prefix form, or a compound numeral
/// that is not also an adverb. The head must be some adjective form.
fn is_adjective_pair(tagged: &[TokenReadings]) -> bool {
    let [modifier, head] = tagged else {
        return false;
    };
    let modifier_ok = modifier.matches(ADJECTIVAL_PREFIX)
        || (modifier.matches(COMPOUND_NUMERAL) && !modifier.matches(ADVERB));
    modifier_ok && head.matches(ADJECTIVE)
}
