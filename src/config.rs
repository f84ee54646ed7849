use url::Url;

use crate::errors::WorkerwatchError;

/// Selector the dashboard renders the inactive-worker count under
pub const DEFAULT_SELECTOR: &str = ".stats .workers .card-body .inactive";

/// Validated invocation parameters, built once by the CLI layer and passed by
/// reference for the rest of the run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute URL of the status dashboard
    pub url: Url,
    /// CSS selector for the count element
    pub selector: String,
    /// Whether diagnostic logging is enabled
    pub verbose: bool,
    /// Whether a non-zero count should produce a non-zero exit code
    pub strict_exit: bool,
}

impl Config {
    /// Validate the raw target and assemble the run configuration.
    ///
    /// A missing or empty target is a usage error and must never reach the
    /// fetch routine.
    pub fn new(
        target: Option<String>,
        selector: String,
        verbose: bool,
        strict_exit: bool,
    ) -> Result<Self, WorkerwatchError> {
        let target = target.unwrap_or_default();
        if target.is_empty() {
            return Err(WorkerwatchError::MissingUrl);
        }

        let normalized = normalize_target(&target);
        let url = Url::parse(&normalized).map_err(|source| WorkerwatchError::InvalidUrl {
            input: normalized.clone(),
            source,
        })?;

        Ok(Config {
            url,
            selector,
            verbose,
            strict_exit,
        })
    }
}

/// Prepend `http://` to targets that lack a scheme.
///
/// Anything starting with the literal prefix `http` is used unmodified —
/// including strings like `httpfoo.com`, which therefore skip the prefix and
/// fail URL parsing instead.
pub fn normalize_target(target: &str) -> String {
    if target.starts_with("http") {
        target.to_string()
    } else {
        format!("http://{target}")
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
