// Shared enums

use serde::{Deserialize, Serialize};

/// What kind of problem a rule match reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// The word is not in the dictionary.
    Spelling,
}

impl MessageKind {
    /// Long human-readable message.
    pub fn message(self) -> &'static str {
        match self {
            MessageKind::Spelling => "Possible spelling mistake",
        }
    }

    /// Short description suitable for a tooltip.
    pub fn short_message(self) -> &'static str {
        match self {
            MessageKind::Spelling => "Spelling mistake",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spelling_messages() {
        assert_eq!(MessageKind::Spelling.message(), "Possible spelling mistake");
        assert_eq!(MessageKind::Spelling.short_message(), "Spelling mistake");
    }
}
