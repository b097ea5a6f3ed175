// morfo-tag: Print morphological readings of Polish words.
//
// Each token gets one line per reading:
//   token<TAB>lemma<TAB>tag
// Unknown tokens print `-` for lemma and tag.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use morfo_cli::{CommonArgs, read_input};

/// Tag Polish words, merging literal and lowercased readings.
#[derive(Debug, Parser)]
#[command(name = "morfo-tag", version, about)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Print readings as JSON
    #[arg(long)]
    json: bool,

    /// Words to tag; reads stdin when empty
    words: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.common.init_logging();

    let options = cli.common.load_options()?;
    let handle = cli.common.load_handle(options)?;

    let text = read_input(&cli.words)?;
    let words: Vec<&str> = text.split_whitespace().collect();
    let tagged = handle.tag(&words)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.json {
        serde_json::to_writer_pretty(&mut out, &tagged)?;
        writeln!(out)?;
    } else {
        for readings in &tagged {
            for reading in readings.readings() {
                let lemma = reading.lemma.as_deref().unwrap_or("-");
                let tag = reading.tag.as_ref().map_or("-", |t| t.as_str());
                writeln!(out, "{}\t{lemma}\t{tag}", reading.token)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
