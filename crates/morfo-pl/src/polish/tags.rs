// Tag predicates over the Polish morphosyntactic tagset

use morfo_core::tag::TagMatcher;

/// Adjectival prefix form, the first part of "biało-zielony".
pub const ADJECTIVAL_PREFIX: TagMatcher<'static> = TagMatcher::Exact("adja");

/// Compound numeral form, the first part of "trzynasto-bitowy".
pub const COMPOUND_NUMERAL: TagMatcher<'static> = TagMatcher::Exact("num:comp");

/// Adverb. Excludes forms such as "dwukrotnie" that are also tagged as
/// compound numerals.
pub const ADVERB: TagMatcher<'static> = TagMatcher::Exact("adv");

/// Any inflected adjective form.
pub const ADJECTIVE: TagMatcher<'static> = TagMatcher::Partial("adj:");
