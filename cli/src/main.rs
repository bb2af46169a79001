//! deckforge CLI - 402FC pitch deck generator
//!
//! Running with no arguments builds the full deck and writes
//! `402FC_Pitch_Deck.pptx` to the current directory.

use clap::Parser;
use colored::*;
use std::path::PathBuf;

/// Generate the 402FC pitch deck as a PowerPoint file
#[derive(Parser)]
#[command(
    name = "deckforge",
    author = "402FC project team",
    version,
    about = "Generate the 402FC pitch deck",
    long_about = "deckforge - programmatic pitch-deck generation.\n\n\
                  Builds the fixed ten-slide 402FC deck from themed layout\n\
                  primitives and saves it as a .pptx file."
)]
struct Cli {
    /// Output file path
    #[arg(short, long, default_value = deckforge::DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> deckforge::Result<()> {
    let path = deckforge::generate(&cli.output)?;
    println!(
        "{} Generated: {}",
        "✓".green().bold(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_output_path() {
        let cli = Cli::parse_from(["deckforge"]);
        assert_eq!(cli.output, PathBuf::from("402FC_Pitch_Deck.pptx"));
    }
}
