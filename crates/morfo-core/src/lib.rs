//! Shared types for Morfo: tokens, morphological readings, tags and the
//! diagnostics produced by the spelling rule.

pub mod analysis;
pub mod case;
pub mod enums;
pub mod error;
pub mod rule_match;
pub mod tag;
pub mod token;
