// Polish spelling rule: turns oracle verdicts into matches with suggestions.
//
// Per word:
//   1. accept if the oracle knows it
//   2. accept if the compound analyzer confirms a split
//   3. flag; suggest the lowercased form alone if that is correct
//   4. otherwise suggest the oracle's list plus hook output, deduplicated
//      and ordered
//
// A rejected word written with a detachable quasi-prefix ("quasi-naukowy")
// is cut at the hyphen and each part is evaluated on its own.

use std::sync::LazyLock;

use hashbrown::HashSet;
use log::debug;
use morfo_core::case::to_lower;
use morfo_core::enums::MessageKind;
use morfo_core::error::ResourceError;
use morfo_core::rule_match::RuleMatch;
use morfo_core::token::Token;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::compound::{CompoundAnalyzer, CompoundVerdict};
use crate::morphology::ReadingProvider;
use crate::polish::PrefixSet;
use crate::speller::Speller;
use crate::suggestion::{
    EditDistanceOrder, NoAdditionalSuggestions, SuggestionHook, SuggestionOrder, assemble,
};

/// Identifier carried by every match of this rule.
pub const RULE_ID: &str = "MORFOLOGIK_RULE_PL_PL";

static TOKENIZING_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[Qq]uasi|[Nn]iby)-").expect("tokenizing prefix pattern is valid")
});

/// Rule configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellerOptions {
    /// Offer only the lowercased form when it is spelled correctly.
    pub convert_case: bool,

    /// Upper bound on suggestions per match. `None` keeps all of them.
    pub max_suggestions: Option<usize>,

    /// Split words at `quasi-` / `niby-` before checking.
    pub split_tokenizing_prefixes: bool,

    /// Prefixes added to the built-in Polish list.
    pub extra_prefixes: Vec<String>,
}

impl Default for SpellerOptions {
    fn default() -> Self {
        Self {
            convert_case: true,
            max_suggestions: None,
            split_tokenizing_prefixes: true,
            extra_prefixes: Vec::new(),
        }
    }
}

impl SpellerOptions {
    /// The built-in prefix set extended with `extra_prefixes`.
    pub fn prefix_set(&self) -> PrefixSet {
        PrefixSet::polish_with(&self.extra_prefixes)
    }
}

/// Words accepted as compounds during one check, so that later passes over
/// the same text do not flag them again.
#[derive(Debug, Clone, Default)]
pub struct CheckSession {
    accepted: HashSet<String>,
}

impl CheckSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, word: impl Into<String>) {
        self.accepted.insert(word.into());
    }

    pub fn is_accepted(&self, word: &str) -> bool {
        self.accepted.contains(word)
    }

    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    pub fn clear(&mut self) {
        self.accepted.clear();
    }

    /// Accepted words in no particular order.
    pub fn accepted(&self) -> impl Iterator<Item = &str> {
        self.accepted.iter().map(String::as_str)
    }
}

/// Matches produced for one word, with the compound verdicts that
/// suppressed any of its parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub matches: Vec<RuleMatch>,
    pub compounds: Vec<CompoundVerdict>,
}

/// The spelling rule over borrowed collaborators.
///
/// Holds no state of its own; the handle builds one per call.
pub struct SpellerRule<'a> {
    speller: &'a dyn Speller,
    provider: &'a dyn ReadingProvider,
    prefixes: &'a PrefixSet,
    options: &'a SpellerOptions,
    hook: &'a dyn SuggestionHook,
    order: &'a dyn SuggestionOrder,
}

impl<'a> SpellerRule<'a> {
    /// Create a rule with no suggestion hook and edit-distance ordering.
    pub fn new(
        speller: &'a dyn Speller,
        provider: &'a dyn ReadingProvider,
        prefixes: &'a PrefixSet,
        options: &'a SpellerOptions,
    ) -> Self {
        Self {
            speller,
            provider,
            prefixes,
            options,
            hook: &NoAdditionalSuggestions,
            order: &EditDistanceOrder,
        }
    }

    pub fn with_hook(mut self, hook: &'a dyn SuggestionHook) -> Self {
        self.hook = hook;
        self
    }

    pub fn with_order(mut self, order: &'a dyn SuggestionOrder) -> Self {
        self.order = order;
        self
    }

    /// Matches for `word` starting at character offset `start_pos`.
    ///
    /// Returns an empty list for accepted words, including the empty word.
    pub fn evaluate(&self, word: &str, start_pos: usize) -> Result<Vec<RuleMatch>, ResourceError> {
        Ok(self.evaluate_detailed(word, start_pos)?.matches)
    }

    /// Like [`evaluate`](Self::evaluate), also reporting compound verdicts.
    ///
    /// The whole word is checked first. Only a rejected word is split at
    /// `quasi-` / `niby-`.
    pub fn evaluate_detailed(
        &self,
        word: &str,
        start_pos: usize,
    ) -> Result<Evaluation, ResourceError> {
        let mut evaluation = Evaluation::default();
        if word.is_empty() || !self.speller.is_misspelled(word)? {
            return Ok(evaluation);
        }
        if !self.options.split_tokenizing_prefixes || !TOKENIZING_PREFIX.is_match(word) {
            self.evaluate_rejected(word, start_pos, &mut evaluation)?;
            return Ok(evaluation);
        }

        let mut index = 0;
        for m in TOKENIZING_PREFIX.find_iter(word) {
            let offset = start_pos + word[..index].chars().count();
            self.evaluate_part(&word[index..m.start()], offset, &mut evaluation)?;
            index = m.end();
        }
        let offset = start_pos + word[..index].chars().count();
        self.evaluate_part(&word[index..], offset, &mut evaluation)?;
        Ok(evaluation)
    }

    /// Check a token sequence, skipping and extending the session's
    /// accepted words.
    pub fn check_tokens(
        &self,
        tokens: &[Token],
        session: &mut CheckSession,
    ) -> Result<Vec<RuleMatch>, ResourceError> {
        let mut matches = Vec::new();
        for token in tokens {
            if session.is_accepted(&token.text) {
                continue;
            }
            let evaluation = self.evaluate_detailed(&token.text, token.pos)?;
            for verdict in evaluation.compounds {
                session.accept(verdict.word);
            }
            matches.extend(evaluation.matches);
        }
        Ok(matches)
    }

    fn evaluate_part(
        &self,
        word: &str,
        start_pos: usize,
        evaluation: &mut Evaluation,
    ) -> Result<(), ResourceError> {
        if word.is_empty() || !self.speller.is_misspelled(word)? {
            return Ok(());
        }
        self.evaluate_rejected(word, start_pos, evaluation)
    }

    /// Compound check and match construction for a word the oracle rejected.
    fn evaluate_rejected(
        &self,
        word: &str,
        start_pos: usize,
        evaluation: &mut Evaluation,
    ) -> Result<(), ResourceError> {
        let analyzer = CompoundAnalyzer::new(self.prefixes, self.speller, self.provider);
        let verdict = analyzer.analyze(word)?;
        if verdict.is_compound() {
            evaluation.compounds.push(verdict);
            return Ok(());
        }

        let end_pos = start_pos + word.chars().count();
        let mut rule_match = RuleMatch::new(RULE_ID, MessageKind::Spelling, start_pos, end_pos);
        rule_match.set_suggestions(self.suggest(word)?);
        debug!(
            "rule: flagged {word:?} at {start_pos}..{end_pos} with {} suggestions",
            rule_match.suggestions.len()
        );
        evaluation.matches.push(rule_match);
        Ok(())
    }

    fn suggest(&self, word: &str) -> Result<Vec<String>, ResourceError> {
        if self.options.convert_case {
            let lower = to_lower(word);
            if lower != word && !self.speller.is_misspelled(&lower)? {
                return Ok(vec![lower]);
            }
        }
        let raw = self.speller.suggestions(word)?;
        Ok(assemble(
            word,
            raw,
            self.hook,
            self.order,
            self.options.max_suggestions,
        ))
    }
}
