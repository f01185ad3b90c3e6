//! CLI entry point for structura

use std::path::PathBuf;
use std::process;

use clap::Parser;
use structura::{write_tree, write_tree_default};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "structura")]
#[command(about = "Write an indented listing of a directory tree to a text file")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// File to write the listing to, overwritten if it exists
    /// [default: structura_proiectului.txt]
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

fn init_logging() {
    // Logs go to stderr; RUST_LOG=structura=debug shows every directory visited
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("structura=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let args = Args::parse();

    let result = match &args.output {
        Some(output) => write_tree(&args.path, output),
        None => write_tree_default(&args.path),
    };

    if let Err(e) = result {
        eprintln!("structura: {}", e);
        process::exit(1);
    }
}
