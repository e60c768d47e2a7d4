//! Stats command — word list table sizes and derived bounds.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::{load_store, resolve_word_list};

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Path to the word list file (overrides configuration).
    #[arg(short, long, value_name = "FILE")]
    pub word_list: Option<Utf8PathBuf>,
}

/// Load the word list and report its table sizes and derived bounds.
#[instrument(name = "cmd_stats", skip_all)]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    config: &jabbrev_core::Config,
) -> anyhow::Result<()> {
    let path = resolve_word_list(args.word_list.as_deref(), config)?;
    debug!(word_list = %path, "executing stats command");

    let store = load_store(args.word_list.as_deref(), config)?;
    let stats = store.stats();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{} {}", "Word list".bold(), path.cyan());
        println!();
        println!("{}", "Tables".bold().underline());
        println!("{}: {}", "Abbreviations".dimmed(), stats.abbreviations);
        println!(
            "{}: {}",
            "Non-abbreviations".dimmed(),
            stats.non_abbreviations
        );
        println!("{}: {}", "Prefix rules".dimmed(), stats.prefixes);
        println!("{}: {}", "Suffix rules".dimmed(), stats.suffixes);
        println!();
        println!("{}", "Derived bounds".bold().underline());
        println!("{}: {}", "Min prefix key".dimmed(), stats.prefix_min_len);
        println!("{}: {}", "Min suffix key".dimmed(), stats.suffix_min_len);
        println!(
            "{}: {}",
            "Max abbrev phrase spaces".dimmed(),
            stats.abbrev_max_words
        );
        println!(
            "{}: {}",
            "Max non-abbrev phrase spaces".dimmed(),
            stats.non_abbrev_max_words
        );
    }

    Ok(())
}
