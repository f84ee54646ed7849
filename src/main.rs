#![allow(clippy::uninlined_format_args)]

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use workerwatch::config::{Config, DEFAULT_SELECTOR};
use workerwatch::errors::WorkerwatchError;
use workerwatch::fetch::fetch_worker_count;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_NONZERO_COUNT: i32 = 1;

#[derive(Parser)]
#[command(name = "workerwatch")]
#[command(version)]
#[command(about = "Scrape an inactive-worker count from a status dashboard", long_about = None)]
struct Cli {
    /// URL of the status dashboard (http:// is prepended when no scheme is given)
    url: Option<String>,

    /// Run with verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// CSS selector for the worker count element
    #[arg(short, long, default_value = DEFAULT_SELECTOR)]
    selector: String,

    /// Exit with a non-zero code when the count is non-zero
    #[arg(short = 'e', long = "exit-code")]
    exit_code: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // The only place that decides the process exit code
    let code = match Config::new(cli.url, cli.selector, cli.verbose, cli.exit_code) {
        Ok(config) => {
            init_tracing(config.verbose);
            match run(&config).await {
                Ok(count) if config.strict_exit && count != 0 => EXIT_NONZERO_COUNT,
                Ok(_) => EXIT_SUCCESS,
                Err(err) => report_error(&err),
            }
        }
        Err(err) => report_error(&err),
    };
    std::process::exit(code);
}

async fn run(config: &Config) -> Result<i64, WorkerwatchError> {
    let count = fetch_worker_count(config).await?;

    // The count itself goes to stdout regardless of verbosity
    println!("{}", count);
    Ok(count)
}

fn report_error(err: &WorkerwatchError) -> i32 {
    eprintln!("Error: {}", err);
    if matches!(err, WorkerwatchError::MissingUrl) {
        eprintln!("Usage: workerwatch [OPTIONS] <URL>");
        eprintln!("Run 'workerwatch --help' for details.");
    }
    err.exit_code()
}

/// Diagnostic lines go to stdout per the CLI contract; errors go to stderr.
/// `RUST_LOG` overrides the verbose flag when set.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "workerwatch=debug"
    } else {
        "workerwatch=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(false),
        )
        .init();
}
