// Non-splitting Polish prefixes

use hashbrown::HashSet;
use morfo_core::case::to_lower;

/// Polish prefixes that form valid compounds with any correct stem and
/// must never be split off into a suggestion of their own.
const POLISH_PREFIXES: &[&str] = &[
    "arcy", "neo", "pre", "anty", "eks", "bez", "beze", "ekstra", "hiper", "infra", "kontr",
    "maksi", "midi", "między", "mini", "nad", "nade", "około", "ponad", "post", "pro", "przeciw",
    "pseudo", "super", "śród", "ultra", "wice", "wokół", "wokoło",
];

/// An immutable, case-normalized set of prefixes.
///
/// Built once during setup and shared by reference; lookups lowercase the
/// candidate before testing membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSet {
    prefixes: HashSet<String>,
}

impl PrefixSet {
    /// The built-in Polish prefix list.
    pub fn polish() -> Self {
        Self::from_iter(POLISH_PREFIXES.iter().copied())
    }

    /// The built-in list extended with `extra` prefixes.
    pub fn polish_with<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::polish();
        set.prefixes
            .extend(extra.into_iter().map(|p| to_lower(p.as_ref())));
        set
    }

    /// An empty set: no word is ever accepted through the prefix path.
    pub fn empty() -> Self {
        Self {
            prefixes: HashSet::new(),
        }
    }

    /// Whether the lowercased `candidate` is a known prefix.
    pub fn contains(&self, candidate: &str) -> bool {
        self.prefixes.contains(to_lower(candidate).as_str())
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl Default for PrefixSet {
    fn default() -> Self {
        Self::polish()
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            prefixes: iter.into_iter().map(|p| to_lower(p.as_ref())).collect(),
        }
    }
}
