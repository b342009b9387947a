use std::{io, path::PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordbits_cli::{run_file, run_repl};

#[derive(clap::Parser)]
#[clap(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
struct Cli {
    /// Script to run; starts a REPL when omitted.
    path: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `wordbits_core=trace`. Defaults to `WORDBITS_LOG`.
    #[arg(long)]
    log: Option<String>,
}

fn init_logging(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_env("WORDBITS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    match cli.path {
        Some(path) => run_file(&path)?,
        None => run_repl()?,
    }

    Ok(())
}
