// morfo-spell: Check Polish spelling of words from the command line or stdin.
//
// Text is split at whitespace and every word is checked with the Polish
// speller rule. Plain output prints one line per flagged word:
//   W: word [start..end] -> suggestion, suggestion
// With --json the matches are printed as a JSON array.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use morfo_cli::{CommonArgs, read_input, whitespace_tokens};
use morfo_pl::CheckSession;

/// Check Polish spelling with compound suppression.
#[derive(Debug, Parser)]
#[command(name = "morfo-spell", version, about)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Print matches as JSON
    #[arg(long)]
    json: bool,

    /// Maximum number of suggestions per word (overrides the config file)
    #[arg(short = 'n', long, value_name = "N")]
    max_suggestions: Option<usize>,

    /// Do not split words at quasi- / niby-
    #[arg(long)]
    no_split_prefixes: bool,

    /// Words to check; reads stdin when empty
    words: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.common.init_logging();

    let mut options = cli.common.load_options()?;
    if cli.max_suggestions.is_some() {
        options.max_suggestions = cli.max_suggestions;
    }
    if cli.no_split_prefixes {
        options.split_tokenizing_prefixes = false;
    }
    let handle = cli.common.load_handle(options)?;

    let text = read_input(&cli.words)?;
    let chars: Vec<char> = text.chars().collect();
    let tokens = whitespace_tokens(&text);

    let mut session = CheckSession::new();
    let matches = handle.check_tokens(&tokens, &mut session)?;
    log::debug!(
        "checked {} tokens, {} flagged, {} compounds accepted",
        tokens.len(),
        matches.len(),
        session.len()
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.json {
        serde_json::to_writer_pretty(&mut out, &matches)?;
        writeln!(out)?;
    } else {
        for m in &matches {
            let word: String = chars[m.start_pos..m.end_pos].iter().collect();
            if m.suggestions.is_empty() {
                writeln!(out, "W: {word} [{}..{}]", m.start_pos, m.end_pos)?;
            } else {
                writeln!(
                    out,
                    "W: {word} [{}..{}] -> {}",
                    m.start_pos,
                    m.end_pos,
                    m.suggestions.join(", ")
                )?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
