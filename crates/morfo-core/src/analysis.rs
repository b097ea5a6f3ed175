// Morphological readings attached to a token

use serde::{Deserialize, Serialize};

use crate::tag::{Tag, TagMatcher};

/// One morphological interpretation of a token: a lemma with its tag.
///
/// A reading with neither lemma nor tag is a placeholder for an unknown
/// word. Placeholders remember where they were created in `start_pos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// The surface form this reading was produced for.
    pub token: String,
    /// Dictionary base form.
    pub lemma: Option<String>,
    /// Part-of-speech / morphological class.
    pub tag: Option<Tag>,
    /// Positional anchor, only set on placeholder readings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_pos: Option<usize>,
}

impl Reading {
    /// Create a reading for a known word.
    pub fn new(token: impl Into<String>, lemma: impl Into<String>, tag: impl Into<Tag>) -> Self {
        Self {
            token: token.into(),
            lemma: Some(lemma.into()),
            tag: Some(tag.into()),
            start_pos: None,
        }
    }

    /// Create a placeholder reading (no lemma, no tag) anchored at `start_pos`.
    pub fn unknown(token: impl Into<String>, start_pos: usize) -> Self {
        Self {
            token: token.into(),
            lemma: None,
            tag: None,
            start_pos: Some(start_pos),
        }
    }

    /// Whether this reading carries no linguistic information.
    pub fn is_unknown(&self) -> bool {
        self.lemma.is_none() && self.tag.is_none()
    }
}

/// All readings for one token, in the order they were produced.
///
/// Never empty when built by a tagger: an unknown token still gets a
/// single placeholder reading.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenReadings {
    readings: Vec<Reading>,
}

impl TokenReadings {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self { readings }
    }

    /// Build the readings of an unknown token: one placeholder at `start_pos`.
    pub fn unknown(token: impl Into<String>, start_pos: usize) -> Self {
        Self {
            readings: vec![Reading::unknown(token, start_pos)],
        }
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn into_readings(self) -> Vec<Reading> {
        self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// The surface form of the token, taken from the first reading.
    pub fn token(&self) -> Option<&str> {
        self.readings.first().map(|r| r.token.as_str())
    }

    /// True when no reading carries a lemma or a tag.
    pub fn is_unknown(&self) -> bool {
        self.readings.iter().all(Reading::is_unknown)
    }

    /// True when any reading's tag equals `tag` exactly.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.matches(TagMatcher::Exact(tag))
    }

    /// True when any reading's tag starts with `prefix`.
    pub fn has_partial_tag(&self, prefix: &str) -> bool {
        self.matches(TagMatcher::Partial(prefix))
    }

    /// True when any reading's tag satisfies `matcher`.
    pub fn matches(&self, matcher: TagMatcher<'_>) -> bool {
        self.readings
            .iter()
            .any(|r| matcher.matches_opt(r.tag.as_ref()))
    }

    /// Iterate over the distinct lemmas in first-seen order.
    pub fn lemmas(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for lemma in self.readings.iter().filter_map(|r| r.lemma.as_deref()) {
            if !out.contains(&lemma) {
                out.push(lemma);
            }
        }
        out
    }
}

impl From<Vec<Reading>> for TokenReadings {
    fn from(readings: Vec<Reading>) -> Self {
        Self::new(readings)
    }
}
