//! Interactive scratchpad demonstrating snapshot-based undo/redo.
//!
//! Holds one line of text in a `StateHolder` and a timeline of committed
//! snapshots in a `HistoryManager`. Commands on stdin mutate, commit,
//! undo, and redo; the loop is the glue moving snapshots between the two.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use rewind_core::{HistoryConfig, HistoryManager, Snapshot, StateHolder};
use serde::Serialize;

/// A scratchpad with linear undo/redo history.
#[derive(Parser, Debug)]
#[command(name = "rewind", version, about)]
struct Cli {
    /// Initial text for the scratchpad.
    #[arg(long)]
    text: Option<String>,

    /// Maximum number of snapshots kept before the oldest are evicted.
    #[arg(long, default_value_t = 10_000)]
    max_depth: usize,
}

/// JSON shape for the `history` command.
#[derive(Serialize)]
struct HistoryDump<'a> {
    cursor: Option<usize>,
    snapshots: &'a [Snapshot<String>],
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting rewind scratchpad");

    let mut holder = StateHolder::new(cli.text.unwrap_or_default());
    let mut history = HistoryManager::with_config(HistoryConfig {
        max_depth: cli.max_depth,
    });
    // The starting text is the first committed state, so undo can always
    // return to it.
    history.commit(holder.capture());

    println!("rewind scratchpad — type 'help' for commands");
    print_prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let input = line.trim();
        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "" => {}
            "set" => {
                holder.set_state(rest.to_string());
                println!("state: {:?}", holder.state());
            }
            "commit" => {
                history.commit(holder.capture());
                println!("committed ({} snapshots)", history.len());
            }
            "undo" => match history.undo() {
                Some(snapshot) => {
                    holder.restore(snapshot);
                    println!("state: {:?}", holder.state());
                }
                None => println!("nothing to undo"),
            },
            "redo" => match history.redo() {
                Some(snapshot) => {
                    holder.restore(snapshot);
                    println!("state: {:?}", holder.state());
                }
                None => println!("nothing to redo"),
            },
            "show" => println!("state: {:?}", holder.state()),
            "history" => {
                let dump = HistoryDump {
                    cursor: history.cursor(),
                    snapshots: history.snapshots(),
                };
                let json =
                    serde_json::to_string_pretty(&dump).context("failed to render history")?;
                println!("{json}");
            }
            "clear" => {
                history.clear();
                history.commit(holder.capture());
                println!("history cleared");
            }
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command: {other} (try 'help')"),
        }

        print_prompt()?;
    }

    Ok(())
}

fn print_prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush().context("failed to flush stdout")?;
    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  set <text>   replace the scratchpad text");
    println!("  commit       capture the text as a new snapshot");
    println!("  undo         step back one snapshot");
    println!("  redo         step forward one snapshot");
    println!("  show         print the current text");
    println!("  history      dump the timeline as JSON");
    println!("  clear        drop all history, keep the current text");
    println!("  quit         exit");
}
