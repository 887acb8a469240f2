//! # BASIC
//!
//! Runs a program file, or starts the interactive prompt when none is given.

use basic::mach::Runtime;
use clap::Parser;
use std::path::PathBuf;

/// Line-numbered BASIC interpreter.
#[derive(Parser)]
#[command(name = "basic", version, about = "Line-numbered BASIC interpreter")]
struct Cli {
    /// Program file to run instead of starting the prompt.
    program: Option<PathBuf>,

    /// Seed for RND, for repeatable runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a debug log of program execution.
    #[arg(short, long)]
    verbose: bool,

    /// Where the log goes when logging is on.
    #[arg(long, default_value = "basic.log")]
    log_file: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose || std::env::var("RUST_LOG").is_ok() {
        match std::fs::File::create(&cli.log_file) {
            Ok(log_file) => {
                let filter = if std::env::var("RUST_LOG").is_ok() {
                    tracing_subscriber::EnvFilter::from_default_env()
                } else {
                    tracing_subscriber::EnvFilter::new("debug")
                };
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(log_file)
                    .with_ansi(false)
                    .init();
            }
            Err(e) => eprintln!("Cannot create {}: {e}", cli.log_file.display()),
        }
    }

    let runtime = Runtime::new(cli.seed);
    match cli.program {
        Some(path) => {
            if let Err(e) = basic::term::run_file(runtime, &path) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        None => basic::term::main(runtime),
    }
}
