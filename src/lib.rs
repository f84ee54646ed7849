//! # workerwatch
#![allow(clippy::uninlined_format_args)]
//!
//! CLI tool that scrapes an inactive-worker count from a status dashboard.
//!
//! Launches a headless Chrome/Chromium instance, navigates to the given URL,
//! pulls one numeric value out of the rendered page via a CSS selector, and
//! prints it. With `--exit-code` the process exit code reflects the count,
//! which makes the tool usable directly in monitoring and alerting pipelines.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Print the inactive-worker count from a dashboard
//! workerwatch https://dashboard.example.com/status
//!
//! # A scheme-less target gets http:// prepended
//! workerwatch dashboard.example.com:8080
//!
//! # Scrape a different element
//! workerwatch https://dashboard.example.com/status -s ".queue .depth"
//!
//! # Alerting mode: exit 1 when any workers are inactive
//! workerwatch https://dashboard.example.com/status --exit-code
//!
//! # Show diagnostic output
//! workerwatch https://dashboard.example.com/status -v
//! ```
//!
//! ## Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0    | Count printed; zero, or strict mode disabled |
//! | 1    | Non-zero count under `--exit-code`, or any navigation/extraction failure |
//! | 22   | No URL supplied |
//!
//! ## Library Usage
//!
//! ```no_run
//! use workerwatch::{Config, fetch_worker_count};
//!
//! # async fn example() -> Result<(), workerwatch::WorkerwatchError> {
//! let config = Config::new(
//!     Some("dashboard.example.com".to_string()),
//!     workerwatch::DEFAULT_SELECTOR.to_string(),
//!     false, // verbose
//!     false, // strict exit codes
//! )?;
//!
//! let count = fetch_worker_count(&config).await?;
//! println!("{} inactive workers", count);
//! # Ok(())
//! # }
//! ```

/// Headless browser session and navigation outcomes
pub mod browser;

/// Invocation parameters and URL normalization
pub mod config;

/// Error type with per-kind exit codes
pub mod errors;

/// Markup querying and numeric extraction
pub mod extract;

/// The fetch-and-extract routine
pub mod fetch;

pub use browser::{BrowserSession, NavigationOutcome};
pub use config::{Config, DEFAULT_SELECTOR, normalize_target};
pub use errors::WorkerwatchError;
pub use extract::worker_count;
pub use fetch::fetch_worker_count;
