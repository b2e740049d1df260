use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::util::SubscriberInitExt;

use mapsize::DEFAULT_LIMIT;

#[derive(Parser)]
#[command(name = "mapsize")]
#[command(version, about = "Show the largest sections in a linker map file", long_about = None)]
#[command(arg_required_else_help = true)]
#[command(after_help = "Example: mapsize firmware.map 15")]
struct Cli {
    /// Path to the .map file produced by the linker
    map_file: PathBuf,

    /// Number of rows to show
    #[arg(default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Log parsing details to stderr
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
    let report = mapsize::analyze(&cli.map_file)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.render(cli.limit).as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write report")?;

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

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_shows_help_and_fails() {
        let err = Cli::try_parse_from(["mapsize"]).err().expect("must not parse");
        assert_eq!(err.kind(), ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand);
        assert_ne!(err.exit_code(), 0);
        assert!(err.to_string().contains("Example: mapsize firmware.map 15"));
    }

    #[test]
    fn non_integer_limit_is_rejected() {
        let err = Cli::try_parse_from(["mapsize", "f.map", "abc"])
            .err()
            .expect("must not parse");
        assert!(matches!(
            err.kind(),
            ErrorKind::ValueValidation | ErrorKind::InvalidValue
        ));
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn limit_defaults_to_twenty() {
        let cli = Cli::try_parse_from(["mapsize", "f.map"]).unwrap();
        assert_eq!(cli.map_file, PathBuf::from("f.map"));
        assert_eq!(cli.limit, 20);

        let cli = Cli::try_parse_from(["mapsize", "f.map", "15"]).unwrap();
        assert_eq!(cli.limit, 15);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("firmware.map");
        let cli = Cli::try_parse_from([OsStr::new("mapsize"), path.as_os_str()]).unwrap();

        let err = run(cli).expect_err("missing file must fail");
        let message = format!("{:#}", err);
        assert!(message.contains("not found"), "{}", message);
        assert!(message.contains("firmware.map"), "{}", message);
    }
}
