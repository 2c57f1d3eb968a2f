//! cache-purge - Delete GitHub Actions caches by ref
//!
//! CLI entry point: resolves inputs, runs the purge and maps the outcome
//! to an exit code.

use cache_purge::cli::Cli;
use cache_purge::config::Config;
use cache_purge::error::PurgeResult;
use cache_purge::github::GithubClient;
use cache_purge::purge::{self, PurgeContext};
use cache_purge::report::{OutputMode, Reporter};
use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mode = OutputMode::detect();
    let reporter = mode.reporter();

    match run(&cli, reporter.as_ref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.set_failed(&purge::failure_message(&e));
            if mode == OutputMode::Terminal {
                if let Some(hint) = e.hint() {
                    eprintln!("{} {}", style("Hint:").yellow(), hint);
                }
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, reporter: &dyn Reporter) -> PurgeResult<()> {
    let config = Config::from_cli(cli)?;
    let client = GithubClient::new(&config.api_url, &config.token);
    debug!("Using API at {}", client.api_url());

    let ctx = PurgeContext {
        api: &client,
        reporter,
        repository: config.repository.clone(),
        fail_on_warning: config.fail_on_warning,
    };

    purge::run(&ctx, &config.ref_input).await?;
    Ok(())
}

/// Initialize logging: 0 = warn, 1 = info, 2+ = debug
///
/// `RUST_LOG` overrides the level; `RUNNER_DEBUG=1` (step debug logging in
/// GitHub Actions) raises it to debug.
fn init_logging(verbose: u8) {
    let runner_debug = std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1");
    let default_level = match (verbose, runner_debug) {
        (_, true) | (2.., _) => "cache_purge=debug",
        (1, _) => "cache_purge=info",
        _ => "cache_purge=warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
