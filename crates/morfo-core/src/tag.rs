// Part-of-speech tags and the two ways of comparing them

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque morphological class label from an external tagset.
///
/// The checker never interprets the inside of a tag. It only compares tags
/// for equality or checks whether a tag starts with a given class prefix,
/// see [`TagMatcher`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A predicate over tags.
///
/// - `Exact` holds when the tag is identical to the pattern.
/// - `Partial` holds when the tag begins with the pattern, e.g. `adj:`
///   accepts every inflected adjective form such as `adj:sg:nom:m1:pos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagMatcher<'a> {
    Exact(&'a str),
    Partial(&'a str),
}

impl TagMatcher<'_> {
    /// Check whether `tag` satisfies this predicate.
    pub fn matches(&self, tag: &Tag) -> bool {
        match *self {
            TagMatcher::Exact(pattern) => tag.as_str() == pattern,
            TagMatcher::Partial(prefix) => tag.as_str().starts_with(prefix),
        }
    }

    /// Check an optional tag; a missing tag never matches.
    pub fn matches_opt(&self, tag: Option<&Tag>) -> bool {
        tag.is_some_and(|t| self.matches(t))
    }

    /// The raw pattern text.
    pub fn pattern(&self) -> &str {
        match *self {
            TagMatcher::Exact(p) | TagMatcher::Partial(p) => p,
        }
    }
}
