//! Abbreviate command — reduce titles to their standard abbreviated form.

use std::io::{BufRead, IsTerminal};

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use jabbrev_core::{WordListStore, abbreviate};

use crate::query_log::QueryLog;

use super::load_store;

/// Arguments for the `abbreviate` subcommand.
#[derive(Args, Debug)]
pub struct AbbreviateArgs {
    /// Title words to abbreviate (joined with spaces). When omitted, titles
    /// are read line-by-line from stdin.
    #[arg(trailing_var_arg = true)]
    pub title: Vec<String>,

    /// Path to the word list file (overrides configuration).
    #[arg(short, long, value_name = "FILE")]
    pub word_list: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct AbbreviationRecord<'a> {
    title: &'a str,
    abbreviated: &'a str,
}

/// Abbreviate one title from arguments, or a stream of titles from stdin.
#[instrument(name = "cmd_abbreviate", skip_all)]
pub fn cmd_abbreviate(
    args: AbbreviateArgs,
    global_json: bool,
    config: &jabbrev_core::Config,
    query_log: Option<&QueryLog>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let store = load_store(args.word_list.as_deref(), config)?;

    if !args.title.is_empty() {
        let title = args.title.join(" ");
        return emit(&title, &store, global_json, query_log, max_input_bytes);
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("no title given: pass TITLE words or pipe titles on stdin");
    }

    debug!("reading titles from stdin");
    for line in stdin.lock().lines() {
        let title = line?;
        emit(&title, &store, global_json, query_log, max_input_bytes)?;
    }
    Ok(())
}

/// Abbreviate one title, record it in the query log, print the result.
fn emit(
    title: &str,
    store: &WordListStore,
    global_json: bool,
    query_log: Option<&QueryLog>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    if let Some(max) = max_input_bytes
        && title.len() > max
    {
        bail!(
            "input too large: title is {} bytes (limit: {max} bytes)",
            title.len()
        );
    }

    let short = abbreviate(title, store);

    // The query log is a side channel; a failed append must not fail the
    // abbreviation itself.
    if let Some(log) = query_log
        && let Err(err) = log.append(title)
    {
        warn!(error = %err, "query log append failed");
    }

    if global_json {
        let record = AbbreviationRecord {
            title,
            abbreviated: &short,
        };
        println!("{}", serde_json::to_string(&record)?);
    } else {
        println!("{short}");
    }
    Ok(())
}
