use std::io::{self, Write};

use anyhow::Result;
use chain_sa::SuffixArrayBuilder;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chain-sa")]
#[command(about = "Prints the sorted suffixes of a text together with their LCP values")]
struct Cli {
    /// Text to sort the suffixes of
    #[arg(default_value = "abracadabrax")]
    text: String,

    /// Skip the LCP array
    #[arg(long)]
    no_lcp: bool,

    /// Refine chains one character at a time, without induced sorting
    #[arg(long)]
    plain: bool,

    /// Patterns to look up in the text
    #[arg(short = 'f', long = "find")]
    patterns: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let suffix_array = SuffixArrayBuilder::new()
        .with_lcp(!cli.no_lcp)
        .with_induced_sorting(!cli.plain)
        .build(cli.text.as_bytes());

    let mut stdout = io::stdout().lock();

    for (rank, (position, suffix)) in suffix_array.iter().enumerate() {
        write!(stdout, "{rank:>4} {position:>4}  {}", String::from_utf8_lossy(suffix))?;

        if suffix_array.lcp().is_some() {
            write!(stdout, " lcp = {}", suffix_array.lcp_at(rank)?)?;
        }

        writeln!(stdout)?;
    }

    for pattern in &cli.patterns {
        match suffix_array.index_of(pattern.as_bytes()) {
            Some(position) => writeln!(stdout, "{pattern:?} found at {position}")?,
            None => writeln!(stdout, "{pattern:?} not found")?,
        }
    }

    Ok(())
}
