//! bizproc CLI — query the business-process catalog from a terminal.
//!
//! Three modes:
//! - **Shell mode**: `bizproc [flags] COMMAND` — single command, exit
//! - **REPL mode**: `bizproc [flags]` — interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "пустая упаковка" | bizproc` — one query per line

mod commands;
mod format;
mod repl;

use std::io::IsTerminal;
use std::process;

use bizproc_engine::Engine;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_hits, format_record, format_summaries};
use repl::{run_pipe, run_repl};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    let catalog_path = matches
        .get_one::<String>("catalog")
        .cloned()
        .unwrap_or_else(|| "data/processes.json".to_string());

    let engine = match Engine::open(&catalog_path) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Failed to load catalog from '{catalog_path}': {e}");
            process::exit(1);
        }
    };

    match matches.subcommand() {
        Some(("search", sub)) => {
            let query = sub
                .get_many::<String>("query")
                .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            print!("{}", format_hits(&engine.search(&query)));
        }
        Some(("get", sub)) => {
            let id = sub.get_one::<String>("id").cloned().unwrap_or_default();
            match engine.get_by_id(&id) {
                Some(record) => print!("{}", format_record(record)),
                None => println!("No process with id '{id}'."),
            }
        }
        Some(("list", _)) => {
            print!("{}", format_summaries(&engine.get_all()));
        }
        Some(("suggest", sub)) => {
            let text = sub
                .get_many::<String>("text")
                .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            let author = std::env::var("USER").unwrap_or_else(|_| "local".to_string());
            engine.suggest(0, author, None, text);
            println!("Suggestion recorded. Thanks!");
        }
        _ => {
            if std::io::stdin().is_terminal() {
                run_repl(&engine);
            } else {
                run_pipe(&engine);
            }
        }
    }
}
