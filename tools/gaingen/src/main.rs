use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::util::SubscriberInitExt;

use gaingen::GainTable;

#[derive(Parser)]
#[command(name = "gaingen")]
#[command(version, about = "Generate the BK4819 receive gain table", long_about = None)]
struct Cli {
    /// Wrap the entries in a `const Gain <NAME>[]` definition
    #[arg(long, value_name = "NAME")]
    c_array: Option<String>,

    /// Print target/actual/RF score for every step to stderr
    #[arg(long)]
    explain: bool,

    /// Log every selection
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .finish()
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let table = GainTable::build();
    info!(entries = table.len(), "gain table built");

    if cli.explain {
        eprint!("{}", table.explain());
    }

    let text = match cli.c_array.as_deref() {
        Some(name) => table.c_array(name),
        None => table.initializer_list(),
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write gain table")?;

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
