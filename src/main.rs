//! scribe32 command-line tool
//!
//! `scribe32 encode` turns any file into checksummed base32 lines;
//! `scribe32 decode` turns them back, stopping at the first corrupted line.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scribe32", version = scribe32::VERSION, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode binary input into grouped base32 lines
    Encode(IoArgs),
    /// Decode grouped base32 lines back into binary
    Decode(IoArgs),
}

#[derive(Args, Debug)]
struct IoArgs {
    /// Input file name (standard input if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file name (standard output if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "scribe32=info",
        (false, _) => "scribe32=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Encode(args) => {
            let mut source = scribe32::io::open_source(args.input.as_deref())?;
            let sink = scribe32::io::open_sink(args.output.as_deref())?;
            scribe32::encode(&mut source, sink).context("encode failed")?;
        }
        Command::Decode(args) => {
            let mut source = scribe32::io::open_source(args.input.as_deref())?;
            let sink = scribe32::io::open_sink(args.output.as_deref())?;
            scribe32::decode(&mut source, sink).context("decode failed")?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("scribe32: {err:#}");
            ExitCode::FAILURE
        }
    }
}
