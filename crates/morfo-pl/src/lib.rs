//! Polish spell checking with compound suppression and dual-case tagging.
//!
//! The entry point is [`PolishHandle`], which owns a spelling oracle
//! ([`speller::Speller`]), a stemmer ([`morphology::Stemmer`]) and the
//! rule configuration, and exposes:
//!
//! - [`PolishHandle::evaluate`]: zero or one match per word, with
//!   suggestions
//! - [`PolishHandle::tag`]: merged readings of each token's literal and
//!   lowercased forms
//! - [`PolishHandle::create_null_token`]: a placeholder reading

pub mod compound;
pub mod handle;
pub mod morphology;
pub mod polish;
pub mod rule;
pub mod speller;
pub mod suggestion;

pub use handle::{MorfoError, PolishHandle};
pub use rule::{CheckSession, SpellerOptions, SpellerRule};
