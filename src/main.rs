//! Word Dice - CLI
//!
//! Reads a die set and a word list and reports, per word, whether it can be
//! spelled with distinct dice and which dice it takes.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use log::{info, warn};
use std::io::{self, BufWriter};
use word_dice::{
    commands::{SpellConfig, run_spell, run_summary},
    core::DieSet,
    input::{
        CLASSIC_DICE,
        loader::{LoadOptions, dice_from_slice, load_dice, load_words, read_words},
    },
    output::print_summary,
    solver::Speller,
};

#[derive(Parser)]
#[command(
    name = "word_dice",
    about = "Find which words can be spelled with a set of lettered dice (max-flow matching)",
    version,
    author
)]
struct Cli {
    /// Dice file, one die per line, or 'classic' for the built-in 16 Boggle cubes
    dice: String,

    /// Word file, one word per line, or '-' to read words from stdin
    words: String,

    /// Show which die spells each letter
    #[arg(short, long)]
    assign: bool,

    /// Dump every word's flow network before solving it
    #[arg(short, long)]
    graph: bool,

    /// Print summary statistics instead of one line per word
    #[arg(short, long)]
    summary: bool,

    /// Match letters case-insensitively
    #[arg(short, long)]
    ignore_case: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Load the die set based on the dice argument
///
/// - "classic": embedded Boggle cubes
/// - "<path>": one die per line
fn load_dice_source(source: &str, options: LoadOptions) -> Result<DieSet> {
    match source {
        "classic" => Ok(dice_from_slice(CLASSIC_DICE, options)),
        "-" => bail!("dice cannot be read from stdin; pass a file or 'classic'"),
        path => load_dice(path, options).with_context(|| format!("cannot read dice file {path}")),
    }
}

fn load_word_source(source: &str, options: LoadOptions) -> Result<Vec<String>> {
    match source {
        "-" => read_words(io::stdin().lock(), options).context("cannot read words from stdin"),
        path => load_words(path, options).with_context(|| format!("cannot read word file {path}")),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = LoadOptions {
        ignore_case: cli.ignore_case,
    };

    let dice = load_dice_source(&cli.dice, options)?;
    let words = load_word_source(&cli.words, options)?;
    info!("loaded {} dice and {} words", dice.len(), words.len());

    let speller = Speller::new(&dice);

    if cli.summary {
        if cli.assign || cli.graph {
            warn!("--assign and --graph are ignored with --summary");
        }
        let stats = run_summary(&speller, &words, true);
        print_summary(&stats, &dice);
        return Ok(());
    }

    let config = SpellConfig {
        show_assignment: cli.assign,
        dump_graph: cli.graph,
    };
    let mut out = BufWriter::new(io::stdout().lock());
    let spellable = run_spell(&speller, &words, config, &mut out).context("cannot write results")?;
    info!("{spellable} of {} words spellable", words.len());

    Ok(())
}
