// Tagger that merges readings of a token's literal and lowercased forms

use log::trace;
use morfo_core::analysis::{Reading, TokenReadings};
use morfo_core::case::to_lower;
use morfo_core::error::ResourceError;

use crate::morphology::{ReadingProvider, StemReading, Stemmer};

/// Bridges a per-word [`Stemmer`] to the [`ReadingProvider`] interface.
///
/// Every token is looked up as written, and again lowercased when
/// lowercasing changes it. The readings of the literal form come
/// first, followed by those of the lowercased form. "Polski" therefore gets
/// both the proper-noun and the adjective readings.
///
/// A token unknown in both forms gets a single placeholder reading
/// anchored at the running character position, i.e. the sum of the
/// lengths of the preceding tokens. The position does not account for
/// whitespace between tokens.
pub struct DualCaseTagger<'a> {
    stemmer: &'a dyn Stemmer,
}

impl<'a> DualCaseTagger<'a> {
    /// Create a new tagger wrapping the given stemmer.
    pub fn new(stemmer: &'a dyn Stemmer) -> Self {
        Self { stemmer }
    }

    /// Tag every token, producing exactly one reading list per token.
    pub fn tag(&self, tokens: &[&str]) -> Result<Vec<TokenReadings>, ResourceError> {
        let mut tagged = Vec::with_capacity(tokens.len());
        let mut pos = 0;

        for &word in tokens {
            let readings = self.lookup(word)?;
            if readings.is_empty() {
                tagged.push(TokenReadings::unknown(word, pos));
            } else {
                tagged.push(TokenReadings::new(readings));
            }
            pos += word.chars().count();
        }

        Ok(tagged)
    }

    /// Look up the literal form, then the lowercased form if it differs,
    /// and merge the results in that order.
    fn lookup(&self, word: &str) -> Result<Vec<Reading>, ResourceError> {
        let literal = self.stemmer.stem(word)?;
        let lower = to_lower(word);
        let lowered = if lower != word {
            self.stemmer.stem(&lower)?
        } else {
            Vec::new()
        };
        trace!(
            "tagger: {word:?} literal={} lowered={}",
            literal.len(),
            lowered.len()
        );
        Ok(merge(word, literal, lowered))
    }
}

impl ReadingProvider for DualCaseTagger<'_> {
    fn analyze_tokens(&self, tokens: &[&str]) -> Result<Vec<TokenReadings>, ResourceError> {
        self.tag(tokens)
    }
}

/// Concatenate stem results, literal readings first. Every reading keeps the
/// token as written, even when it came from the lowercased lookup.
fn merge(word: &str, literal: Vec<StemReading>, lowered: Vec<StemReading>) -> Vec<Reading> {
    literal
        .into_iter()
        .chain(lowered)
        .map(|s| Reading::new(word, s.lemma, s.tag))
        .collect()
}

/// Create a placeholder reading (no lemma, no tag) for `token` at `start_pos`.
pub fn create_null_token(token: &str, start_pos: usize) -> Reading {
    Reading::unknown(token, start_pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// A mock stemmer with a fixed table that records every lookup.
    struct MockStemmer {
        calls: RefCell<Vec<String>>,
    }

    impl MockStemmer {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Stemmer for MockStemmer {
        fn stem(&self, word: &str) -> Result<Vec<StemReading>, ResourceError> {
            self.calls.borrow_mut().push(word.to_string());
            Ok(match word {
                "Polski" => vec![StemReading::new("Polska", "subst:sg:gen:f")],
                "polski" => vec![
                    StemReading::new("polski", "adj:sg:nom:m1:pos"),
                    StemReading::new("polski", "adj:sg:acc:m3:pos"),
                ],
                "kot" => vec![StemReading::new("kot", "subst:sg:nom:m2")],
                "stolica" => vec![StemReading::new("stolica", "subst:sg:nom:f")],
                _ => vec![],
            })
        }
    }

    struct FailingStemmer;

    impl Stemmer for FailingStemmer {
        fn stem(&self, _word: &str) -> Result<Vec<StemReading>, ResourceError> {
            Err(ResourceError::unavailable("stemmer", "dictionary not loaded"))
        }
    }

    #[test]
    fn literal_readings_come_before_lowercase_readings() {
        let stemmer = MockStemmer::new();
        let tagger = DualCaseTagger::new(&stemmer);
        let tagged = tagger.tag(&["Polski"]).unwrap();
        assert_eq!(tagged.len(), 1);
        let lemmas: Vec<_> = tagged[0]
            .readings()
            .iter()
            .map(|r| r.lemma.as_deref().unwrap())
            .collect();
        assert_eq!(lemmas, vec!["Polska", "polski", "polski"]);
        assert!(tagged[0].readings().iter().all(|r| r.token == "Polski"));
    }

    #[test]
    fn lowercase_word_is_looked_up_once() {
        let stemmer = MockStemmer::new();
        let tagger = DualCaseTagger::new(&stemmer);
        tagger.tag(&["kot"]).unwrap();
        assert_eq!(*stemmer.calls.borrow(), vec!["kot"]);
    }

    #[test]
    fn capitalized_word_is_looked_up_twice() {
        let stemmer = MockStemmer::new();
        let tagger = DualCaseTagger::new(&stemmer);
        tagger.tag(&["Stolica"]).unwrap();
        assert_eq!(*stemmer.calls.borrow(), vec!["Stolica", "stolica"]);
    }

    #[test]
    fn lowercase_only_reading_is_found_for_capitalized_word() {
        let stemmer = MockStemmer::new();
        let tagger = DualCaseTagger::new(&stemmer);
        let tagged = tagger.tag(&["Stolica"]).unwrap();
        assert!(tagged[0].has_tag("subst:sg:nom:f"));
        assert_eq!(tagged[0].readings()[0].token, "Stolica");
    }

    #[test]
    fn unknown_tokens_get_placeholders_at_running_offset() {
        let stemmer = MockStemmer::new();
        let tagger = DualCaseTagger::new(&stemmer);
        let tagged = tagger.tag(&["kot", "xqz", "ąę"]).unwrap();
        assert_eq!(tagged.len(), 3);
        assert!(!tagged[0].is_unknown());

        assert!(tagged[1].is_unknown());
        assert_eq!(tagged[1].readings()[0].start_pos, Some(3));

        // Offsets count characters, not bytes.
        assert!(tagged[2].is_unknown());
        assert_eq!(tagged[2].readings()[0].start_pos, Some(6));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let stemmer = MockStemmer::new();
        let tagger = DualCaseTagger::new(&stemmer);
        assert!(tagger.tag(&[]).unwrap().is_empty());
    }

    #[test]
    fn empty_token_gets_placeholder() {
        let stemmer = MockStemmer::new();
        let tagger = DualCaseTagger::new(&stemmer);
        let tagged = tagger.tag(&[""]).unwrap();
        assert_eq!(tagged.len(), 1);
        assert!(tagged[0].is_unknown());
    }

    #[test]
    fn stemmer_failure_propagates() {
        let tagger = DualCaseTagger::new(&FailingStemmer);
        let err = tagger.tag(&["kot"]).unwrap_err();
        assert!(matches!(err, ResourceError::Unavailable { resource: "stemmer", .. }));
    }

    #[test]
    fn provider_interface_delegates_to_tag() {
        let stemmer = MockStemmer::new();
        let tagger = DualCaseTagger::new(&stemmer);
        let provider: &dyn ReadingProvider = &tagger;
        let tagged = provider.analyze_tokens(&["kot", "Polski"]).unwrap();
        assert_eq!(tagged.len(), 2);
        assert!(tagged[1].has_partial_tag("adj:"));
    }

    #[test]
    fn null_token_has_no_lemma_or_tag() {
        let r = create_null_token("foo", 42);
        assert_eq!(r.token, "foo");
        assert_eq!(r.start_pos, Some(42));
        assert!(r.lemma.is_none());
        assert!(r.tag.is_none());
    }
}
