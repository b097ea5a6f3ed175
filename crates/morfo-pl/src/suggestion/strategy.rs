// Generator orchestration for the word-list speller

use super::generators::*;
use super::status::SuggestionStatus;

/// Polish letters ordered roughly by frequency; used for replacement and
/// insertion candidates.
const POLISH_LETTERS: &str = "aioeznrwcsytkdpmujlłąębghżśóćńfźqvx";

/// Default lookup budget.
pub const DEFAULT_MAX_COST: usize = 800;

/// Primary and secondary generator lists run under a cost budget.
///
/// Secondary generators run only when the primaries found nothing.
pub struct SuggestionStrategy {
    max_cost: usize,
    primary_generators: Vec<Box<dyn SuggestionGenerator + Send + Sync>>,
    generators: Vec<Box<dyn SuggestionGenerator + Send + Sync>>,
}

impl SuggestionStrategy {
    /// Run the strategy: primaries first, secondaries if nothing was found.
    pub fn generate(&self, lookup: &dyn WordLookup, status: &mut SuggestionStatus<'_>) {
        status.set_max_cost(self.max_cost);

        for generator in &self.primary_generators {
            if status.should_abort() {
                break;
            }
            generator.generate(lookup, status);
        }
        if status.suggestion_count() > 0 {
            return;
        }

        for generator in &self.generators {
            if status.should_abort() {
                break;
            }
            generator.generate(lookup, status);
        }
    }

    pub fn max_cost(&self) -> usize {
        self.max_cost
    }
}

impl Default for SuggestionStrategy {
    fn default() -> Self {
        typing_strategy(DEFAULT_MAX_COST)
    }
}

/// Strategy for ordinary typing errors in Polish text.
pub fn typing_strategy(max_cost: usize) -> SuggestionStrategy {
    let letters: Vec<char> = POLISH_LETTERS.chars().collect();

    let primary_generators: Vec<Box<dyn SuggestionGenerator + Send + Sync>> =
        vec![Box::new(CaseChange), Box::new(Diacritics)];

    let generators: Vec<Box<dyn SuggestionGenerator + Send + Sync>> = vec![
        Box::new(Swap),
        Box::new(Deletion),
        Box::new(Replacement {
            characters: letters.clone(),
        }),
        Box::new(Insertion {
            characters: letters,
        }),
        Box::new(SplitWord),
    ];

    SuggestionStrategy {
        max_cost,
        primary_generators,
        generators,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockLookup {
        words: Vec<&'static str>,
    }

    impl WordLookup for MockLookup {
        fn accepts(&self, word: &str) -> bool {
            self.words.iter().any(|w| *w == word)
        }
    }

    fn suggest(words: &[&'static str], input: &str, max: usize) -> Vec<String> {
        let lookup = MockLookup {
            words: words.to_vec(),
        };
        let word: Vec<char> = input.chars().collect();
        let mut status = SuggestionStatus::new(&word, max);
        SuggestionStrategy::default().generate(&lookup, &mut status);
        status.into_words()
    }

    #[test]
    fn primary_short_circuits_secondaries() {
        // The diacritic fix is found, so the deletion candidate "łka" is never tried.
        let got = suggest(&["łąka", "łka"], "łaka", 5);
        assert_eq!(got, vec!["łąka"]);
    }

    #[test]
    fn secondaries_run_when_primaries_fail() {
        assert_eq!(suggest(&["kot"], "kto", 5), vec!["kot"]);
        assert_eq!(suggest(&["kot"], "kott", 5), vec!["kot"]);
    }

    #[test]
    fn insertion_uses_polish_letters() {
        assert_eq!(suggest(&["mąka"], "mka", 5), vec!["mąka"]);
    }

    #[test]
    fn respects_max_suggestions() {
        let got = suggest(&["kat", "kit", "kut", "kęt"], "kot", 2);
        assert!(got.len() <= 2);
    }

    #[test]
    fn small_budget_terminates() {
        let lookup = MockLookup { words: vec![] };
        let word: Vec<char> = "xyzzyxyzzy".chars().collect();
        let mut status = SuggestionStatus::new(&word, 5);
        typing_strategy(1).generate(&lookup, &mut status);
        assert_eq!(status.suggestion_count(), 0);
        assert!(status.current_cost() <= 4);
    }

    #[test]
    fn default_budget() {
        assert_eq!(SuggestionStrategy::default().max_cost(), DEFAULT_MAX_COST);
    }
}
