//! Macrosheet - sparse spreadsheet driven by text instructions

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use macrosheet_core::{Controller, SessionOptions, SessionSummary, Sheet, SparseSheet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Sparse spreadsheet with macro commands, driven by text instructions.
#[derive(Parser, Debug)]
#[command(name = "macrosheet", version, about)]
struct Cli {
    /// Read instructions from this file instead of stdin
    script: Option<PathBuf>,

    /// Configuration file [default: <config dir>/macrosheet/config.toml]
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Ignore configuration files and use built-in defaults
    #[arg(long, conflicts_with = "config")]
    no_config: bool,

    /// Suppress the welcome banner, menu and prompts
    #[arg(short, long)]
    quiet: bool,

    /// Log filter directive, e.g. "debug" or "macrosheet_engine=trace"
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

/// Pick the log filter: `--log`, then `RUST_LOG`, then the config file.
fn resolve_log_filter(cli: Option<&str>, env: Option<&str>, config: Option<&str>) -> String {
    [cli, env, config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER)
        .to_string()
}

fn init_tracing(directive: &str) -> Option<String> {
    let (filter, warning) = match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(err) => (
            EnvFilter::new(DEFAULT_LOG_FILTER),
            Some(format!("Invalid log filter '{}': {}", directive, err)),
        ),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    warning
}

fn run_session<R: BufRead>(
    input: R,
    options: SessionOptions,
    sheet: &mut SparseSheet,
) -> Result<SessionSummary> {
    let stdout = io::stdout();
    let mut controller = Controller::with_options(input, stdout.lock(), options);
    let summary = controller.run(sheet)?;
    Ok(summary)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let (config, mut warnings) = if cli.no_config {
        (config::Config::default(), Vec::new())
    } else {
        config::load_config(cli.config.as_ref())
    };

    let env_filter = std::env::var("RUST_LOG").ok();
    let directive = resolve_log_filter(
        cli.log.as_deref(),
        env_filter.as_deref(),
        config.log_filter.as_deref(),
    );
    warnings.extend(init_tracing(&directive));
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    let mut options = config.session;
    if cli.quiet {
        options.banner = false;
        options.prompts = false;
    }

    let mut sheet = SparseSheet::new();
    let summary = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            run_session(BufReader::new(file), options, &mut sheet)?
        }
        None => {
            let stdin = io::stdin();
            run_session(stdin.lock(), options, &mut sheet)?
        }
    };

    info!(
        instructions = summary.instructions,
        errors = summary.errors,
        width = sheet.width(),
        height = sheet.height(),
        "session finished"
    );

    // Scripted runs report failed instructions through the exit status.
    if cli.script.is_some() && summary.errors > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, resolve_log_filter};
    use clap::{CommandFactory, Parser};

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli =
            Cli::try_parse_from(["macrosheet", "-q", "--log", "debug", "script.txt"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.log.as_deref(), Some("debug"));
        assert_eq!(cli.script.unwrap().to_str(), Some("script.txt"));
    }

    #[test]
    fn test_no_config_conflicts_with_config() {
        assert!(Cli::try_parse_from(["macrosheet", "--no-config", "-c", "x.toml"]).is_err());
    }

    #[test]
    fn test_log_filter_precedence() {
        assert_eq!(resolve_log_filter(Some("trace"), Some("info"), Some("debug")), "trace");
        assert_eq!(resolve_log_filter(None, Some("info"), Some("debug")), "info");
        assert_eq!(resolve_log_filter(Some(" "), None, Some("debug")), "debug");
        assert_eq!(resolve_log_filter(None, None, None), "warn");
    }
}
