// Case type detection and conversion

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "stolica".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Stolica".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "stoLica".
    Complex,
    /// All letters are uppercase: "STOLICA".
    AllUpper,
}

/// Detect the case pattern of a word.
///
/// Non-letter characters (digits, punctuation) are ignored when
/// determining the case pattern.
pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if first.is_uppercase() {
        first_uc = true;
        no_letters = false;
    }
    if first.is_lowercase() {
        all_uc = false;
        no_letters = false;
    }

    for c in chars {
        if c.is_uppercase() {
            no_letters = false;
            rest_lc = false;
        }
        if c.is_lowercase() {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Lowercase a word.
///
/// This is the single case-folding primitive used across the checker.
/// Polish needs no locale-specific tailoring beyond the Unicode default
/// mapping, which also handles Ą Ć Ę Ł Ń Ó Ś Ź Ż.
pub fn to_lower(word: &str) -> String {
    word.to_lowercase()
}

/// Apply a case pattern to a (typically lowercase) word.
///
/// - `NoLetters` / `Complex` -- no change.
/// - `AllLower` -- every letter is lowercased.
/// - `AllUpper` -- every letter is uppercased.
/// - `FirstUpper` -- first character is uppercased, rest are lowercased.
pub fn set_case(word: &str, case_type: CaseType) -> String {
    match case_type {
        CaseType::NoLetters | CaseType::Complex => word.to_string(),
        CaseType::AllLower => word.to_lowercase(),
        CaseType::AllUpper => word.to_uppercase(),
        CaseType::FirstUpper => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.as_str().to_lowercase().chars())
                    .collect(),
                None => String::new(),
            }
        }
    }
}
