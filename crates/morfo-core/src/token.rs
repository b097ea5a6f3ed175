// Word tokens handed to the spell checker by an upstream tokenizer

use serde::{Deserialize, Serialize};

/// A single word-like unit of text together with its position.
///
/// Tokens are produced upstream; the checker never splits raw text itself.
/// Two tokens are equal when both their text and their offset agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The text content of this token.
    pub text: String,

    /// Position of this token within the source text (character offset).
    pub pos: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, pos: usize) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }

    /// Length of the token in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Character offset one past the last character of the token.
    pub fn end_pos(&self) -> usize {
        self.pos + self.char_len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Build tokens from consecutive words, assuming a single separator
/// character between each pair.
///
/// Convenience for callers that already hold whitespace-split words.
pub fn tokens_from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Vec<Token> {
    let mut pos = 0;
    let mut tokens = Vec::new();
    for word in words {
        let token = Token::new(word, pos);
        pos = token.end_pos() + 1;
        tokens.push(token);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_len_counts_characters_not_bytes() {
        let t = Token::new("śród", 3);
        assert_eq!(t.char_len(), 4);
        assert_eq!(t.end_pos(), 7);
    }

    #[test]
    fn identity_includes_offset() {
        assert_eq!(Token::new("kot", 0), Token::new("kot", 0));
        assert_ne!(Token::new("kot", 0), Token::new("kot", 4));
    }

    #[test]
    fn tokens_from_words_accumulates_offsets() {
        let tokens = tokens_from_words(["Ala", "ma", "kota"]);
        assert_eq!(tokens[0], Token::new("Ala", 0));
        assert_eq!(tokens[1], Token::new("ma", 4));
        assert_eq!(tokens[2], Token::new("kota", 7));
    }

    #[test]
    fn tokens_from_no_words_is_empty() {
        let tokens = tokens_from_words(std::iter::empty());
        assert!(tokens.is_empty());
    }
}
