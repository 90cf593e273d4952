use anyhow::Context;
use clap::Parser;
use memcalc::config::Config;
use memcalc::shell::Shell;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// A stateful calculator shell with an accumulator and a memory register.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run this command and exit. May be given several times.
    #[arg(short, long = "exec", value_name = "COMMAND")]
    exec: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!("Command line arguments: {:?}", cli);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let mut shell = Shell::new(config);

    if cli.exec.is_empty() {
        let interactive = io::stdin().is_terminal();
        shell
            .run(io::stdin().lock(), io::stdout().lock(), interactive)
            .context("Failed to run shell")?;
        return Ok(());
    }

    let script = cli.exec.join("\n");
    let summary = shell
        .run(script.as_bytes(), io::stdout().lock(), false)
        .context("Failed to run commands")?;
    tracing::info!(
        "Ran {} commands, {} failed",
        summary.executed,
        summary.failed
    );

    if summary.failed > 0 {
        anyhow::bail!("{} of {} commands failed", summary.failed, summary.executed);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}
