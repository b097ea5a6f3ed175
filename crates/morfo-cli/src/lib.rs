// morfo-cli: shared utilities for the command-line tools.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use morfo_core::token::Token;
use morfo_pl::{PolishHandle, SpellerOptions};

/// Word list file name inside a dictionary directory.
pub const WORDS_FILE: &str = "words.txt";

/// Lexicon file name inside a dictionary directory.
pub const LEXICON_FILE: &str = "lexicon.tsv";

/// Environment variable naming the fallback dictionary directory.
pub const DICT_PATH_ENV: &str = "MORFO_DICT_PATH";

/// Dictionary, configuration and logging flags shared by every tool.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Word list, one accepted form per line
    #[arg(id = "words_file", short, long = "words", value_name = "FILE")]
    pub words: Option<PathBuf>,

    /// Lexicon in form<TAB>lemma<TAB>tag format
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// TOML file with speller options
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level. `RUST_LOG` takes precedence.
    pub fn init_logging(&self) {
        let log_level = if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }

    /// Speller options from `--config`, or the defaults.
    pub fn load_options(&self) -> Result<SpellerOptions> {
        match &self.config {
            Some(path) => load_options(path),
            None => Ok(SpellerOptions::default()),
        }
    }

    /// Build a handle from the resolved dictionary files and `options`.
    pub fn load_handle(&self, options: SpellerOptions) -> Result<PolishHandle> {
        let words = resolve_file(self.words.as_deref(), WORDS_FILE)?;
        let lexicon = resolve_file(self.lexicon.as_deref(), LEXICON_FILE)?;
        log::info!(
            "loading word list {} and lexicon {}",
            words.display(),
            lexicon.display()
        );
        PolishHandle::from_paths(&words, &lexicon, options).context("failed to load dictionaries")
    }
}

/// Parse a TOML options file.
pub fn load_options(path: &Path) -> Result<SpellerOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let options: SpellerOptions = toml::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    options.validate()?;
    Ok(options)
}

/// Pick a dictionary file.
///
/// Search order:
/// 1. the explicit path (if provided)
/// 2. `name` inside `MORFO_DICT_PATH`
/// 3. `name` inside the current directory
pub fn resolve_file(explicit: Option<&Path>, name: &str) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let search_paths = build_search_paths();
    for dir in &search_paths {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    bail!(
        "could not find {} in any of the search paths:\n{}",
        name,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    )
}

fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }
    paths
}

/// The words given on the command line joined by spaces, or all of stdin.
pub fn read_input(args: &[String]) -> Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

/// Split text at whitespace, recording character offsets.
pub fn whitespace_tokens(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut start = 0;

    for (pos, c) in text.chars().enumerate() {
        if c.is_whitespace() {
            if !current.is_empty() {
                tokens.push(Token::new(std::mem::take(&mut current), start));
            }
        } else {
            if current.is_empty() {
                start = pos;
            }
            current.push(c);
        }
    }
    if !current.is_empty() {
        tokens.push(Token::new(current, start));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_tokens_use_character_offsets() {
        let tokens = whitespace_tokens("  Ala ma\tkota\nżółw ");
        let got: Vec<_> = tokens.iter().map(|t| (t.text.as_str(), t.pos)).collect();
        assert_eq!(got, vec![("Ala", 2), ("ma", 6), ("kota", 9), ("żółw", 14)]);
    }

    #[test]
    fn whitespace_tokens_of_blank_text() {
        assert!(whitespace_tokens(" \n\t").is_empty());
    }

    #[test]
    fn explicit_path_wins() {
        let path = resolve_file(Some(Path::new("/some/words.txt")), WORDS_FILE).unwrap();
        assert_eq!(path, PathBuf::from("/some/words.txt"));
    }

    #[test]
    fn load_options_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("morfo.toml");
        std::fs::write(&path, "max_suggestions = 4\nextra_prefixes = [\"mega\"]\n").unwrap();
        let options = load_options(&path).unwrap();
        assert_eq!(options.max_suggestions, Some(4));
        assert!(options.convert_case);
        assert_eq!(options.extra_prefixes, vec!["mega"]);
    }

    #[test]
    fn load_options_rejects_bad_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("morfo.toml");
        std::fs::write(&path, "extra_prefixes = [\"m\"]\n").unwrap();
        assert!(load_options(&path).is_err());
    }
}
