// Polish language data shared by the compound analyzer and the speller rule

pub mod prefixes;
pub mod tags;

pub use prefixes::PrefixSet;
