//! Wombat tokenizer CLI
//!
//! A headless driver for debugging and conformance runs: tokenizes a file
//! (or an inline string) and streams the tokens to stdout and the parse
//! errors, with their positions, to stderr.

use anyhow::{bail, Result};
use std::env;
use std::fs;
use wombat_html::{Tokenizer, TokenizerState};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: wombat-cli <file.html> [--state <name>] [--last-start-tag <name>]");
        eprintln!("       wombat-cli --html '<p>...</p>' [--state <name>] [--last-start-tag <name>]");
        std::process::exit(1);
    }

    let mut html = None;
    let mut state = None;
    let mut last_start_tag = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--html" => {
                let Some(value) = args.get(i + 1) else {
                    bail!("--html requires an HTML string argument");
                };
                html = Some(value.clone());
                i += 2;
            }
            "--state" => {
                let Some(value) = args.get(i + 1) else {
                    bail!("--state requires a state name argument");
                };
                state = Some(parse_initial_state(value)?);
                i += 2;
            }
            "--last-start-tag" => {
                let Some(value) = args.get(i + 1) else {
                    bail!("--last-start-tag requires a tag name argument");
                };
                last_start_tag = Some(value.clone());
                i += 2;
            }
            path => {
                html = Some(fs::read_to_string(path)?);
                i += 1;
            }
        }
    }

    let Some(html) = html else {
        bail!("no input given; pass a file path or --html");
    };

    let mut tokenizer = Tokenizer::new(&html);
    if let Some(state) = state {
        tokenizer.set_state(state);
    }
    tokenizer.set_last_start_tag(last_start_tag.as_deref());

    let mut error_count = 0usize;
    loop {
        match tokenizer.next_token() {
            Ok(token) => {
                println!("{token}");
                if token.is_eof() {
                    break;
                }
            }
            Err(error) => {
                error_count += 1;
                eprintln!("parse error: {error}");
            }
        }
    }

    if error_count > 0 {
        eprintln!("{error_count} parse error(s)");
    }
    Ok(())
}

/// Map the conformance suite's state names onto tokenizer states.
fn parse_initial_state(name: &str) -> Result<TokenizerState> {
    let state = match name {
        "Data state" => TokenizerState::Data,
        "PLAINTEXT state" => TokenizerState::PLAINTEXT,
        "RCDATA state" => TokenizerState::RCDATA,
        "RAWTEXT state" => TokenizerState::RAWTEXT,
        "Script data state" => TokenizerState::ScriptData,
        "CDATA section state" => TokenizerState::CDATASection,
        _ => bail!("unknown tokenizer state: {name:?}"),
    };
    Ok(state)
}
