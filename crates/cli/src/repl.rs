//! REPL loop and pipe mode
//!
//! Interactive mode: prompt with history; free text is searched, id-shaped
//! input is looked up directly, meta-commands start with a dot.
//! Pipe mode: read queries from stdin, one per line.

use std::io::{self, BufRead};

use bizproc_engine::Engine;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::format::{format_hits, format_record, format_summaries, looks_like_id};

/// Run the interactive REPL.
pub fn run_repl(engine: &Engine) {
    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start interactive mode: {e}");
            return;
        }
    };

    println!("bizproc: type a query, a process id (e.g. B1.6), or .help");
    loop {
        match rl.readline("bizproc> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match trimmed {
                    ".quit" | ".exit" => break,
                    ".help" => {
                        print_help();
                        continue;
                    }
                    ".list" => {
                        print!("{}", format_summaries(&engine.get_all()));
                        continue;
                    }
                    _ => {}
                }

                execute(engine, trimmed);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Input error: {e}");
                break;
            }
        }
    }
}

/// Run one query per stdin line (non-interactive).
pub fn run_pipe(engine: &Engine) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        execute(engine, trimmed);
    }
}

/// Route one input line: id-shaped input to direct lookup, everything
/// else to search.
fn execute(engine: &Engine, input: &str) {
    if let Some(id) = looks_like_id(input) {
        if let Some(record) = engine.get_by_id(&id) {
            print!("{}", format_record(record));
            return;
        }
        // Unknown id-shaped input falls through to search
    }
    print!("{}", format_hits(&engine.search(input)));
}

fn print_help() {
    println!("Type a free-text query to search the catalog.");
    println!("Type a process id (e.g. B1.6) to show its card.");
    println!("  .list   show all processes");
    println!("  .help   this help");
    println!("  .quit   exit");
}
