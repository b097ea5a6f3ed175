// In-memory stemmer loaded from a tab-separated dictionary export

use std::path::Path;

use hashbrown::HashMap;
use log::{debug, warn};
use morfo_core::error::ResourceError;

use crate::handle::MorfoError;
use crate::morphology::{StemReading, Stemmer};

/// Separators between alternative tags inside a single tag field.
const TAG_SEPARATORS: &[char] = &['+', '|'];

/// A [`Stemmer`] backed by a form -> readings map.
///
/// The source format is one reading per line: `form<TAB>lemma<TAB>tag`.
/// Blank lines and lines starting with `#` are ignored. A tag field that
/// lists several tags separated by `+` or `|` yields one reading per tag.
#[derive(Debug, Default, Clone)]
pub struct LexiconStemmer {
    entries: HashMap<String, Vec<StemReading>>,
}

impl LexiconStemmer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a lexicon, rejecting the first malformed line.
    pub fn parse(text: &str) -> Result<Self, MorfoError> {
        let mut lexicon = Self::new();
        for (idx, line) in text.lines().enumerate() {
            if let Err(reason) = lexicon.add_line(line) {
                return Err(MorfoError::InvalidLexicon {
                    line: idx + 1,
                    reason,
                });
            }
        }
        debug!("lexicon: loaded {} forms", lexicon.len());
        Ok(lexicon)
    }

    /// Parse a lexicon, skipping malformed lines with a warning.
    pub fn parse_lenient(text: &str) -> Self {
        let mut lexicon = Self::new();
        for (idx, line) in text.lines().enumerate() {
            if let Err(reason) = lexicon.add_line(line) {
                warn!("lexicon: skipping line {}: {reason}", idx + 1);
            }
        }
        debug!("lexicon: loaded {} forms", lexicon.len());
        lexicon
    }

    /// Read and parse a lexicon file.
    pub fn from_path(path: &Path) -> Result<Self, MorfoError> {
        let text = std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Add a reading for `form`. Duplicate readings are kept once.
    pub fn insert(&mut self, form: impl Into<String>, reading: StemReading) {
        let readings = self.entries.entry(form.into()).or_default();
        if !readings.contains(&reading) {
            readings.push(reading);
        }
    }

    /// Number of distinct forms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn add_line(&mut self, line: &str) -> Result<(), String> {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let mut fields = line.split('\t');
        let (Some(form), Some(lemma), Some(tags)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(format!("expected 3 tab-separated fields in {line:?}"));
        };
        if fields.next().is_some() {
            return Err(format!("too many fields in {line:?}"));
        }
        if form.is_empty() || lemma.is_empty() {
            return Err("empty form or lemma".to_string());
        }

        let mut added = false;
        for tag in tags.split(TAG_SEPARATORS).filter(|t| !t.is_empty()) {
            self.insert(form, StemReading::new(lemma, tag));
            added = true;
        }
        if !added {
            return Err(format!("no tag for form {form:?}"));
        }
        Ok(())
    }
}

impl Stemmer for LexiconStemmer {
    fn stem(&self, word: &str) -> Result<Vec<StemReading>, ResourceError> {
        Ok(self.entries.get(word).cloned().unwrap_or_default())
    }
}
