//! jsonpick CLI.
//!
//! Reads a JSON file, parses it, and prints the rendered value tree, a
//! single looked-up value, or the raw token stream. The core library never
//! exits the process; this wrapper maps errors to stderr and a failure code.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "jsonpick")]
#[command(about = "Parse a JSON file and pick values by dotted key path", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the JSON file to parse
    file: PathBuf,

    /// Print only the value at this dotted key path (e.g. `a.b.c`)
    #[arg(long, value_name = "PATH")]
    get: Option<String>,

    /// Dump the token stream instead of the parsed tree
    #[arg(long)]
    tokens: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let source = fs::read_to_string(&cli.file)?;

    if cli.tokens {
        let tokens = jsonpick::Lexer::new(&source).scan_tokens()?;
        for token in &tokens {
            println!("{token:?}");
        }
        return Ok(());
    }

    let value = jsonpick::parse(&source)?;
    match &cli.get {
        Some(path) => println!("{}", value.get_dotted(path)?),
        None => println!("{value}"),
    }
    Ok(())
}
