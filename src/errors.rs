use thiserror::Error;

/// Custom error type that includes exit codes
#[derive(Debug, Error)]
pub enum WorkerwatchError {
    /// No target URL on the command line (exit code 22)
    #[error("no URL supplied")]
    MissingUrl,

    /// The normalized target does not parse as a URL (exit code 1)
    #[error("invalid URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        source: url::ParseError,
    },

    /// A request failed at the network level before the page loaded
    #[error("navigation failed: {0}")]
    RequestFailed(String),

    /// A response came back with a status outside the accepted range
    #[error("request answered with status {status} {status_text}")]
    BadStatus { status: i64, status_text: String },

    /// The selector string itself is not valid CSS
    #[error("invalid selector '{0}'")]
    InvalidSelector(String),

    /// The selector did not match exactly one element
    #[error(
        "element not found: selector '{selector}' matched {count} elements, expected exactly one\n  \
         - check that the URL is correct\n  \
         - check that the site is up and reachable\n  \
         - the page layout may have changed; try a different --selector"
    )]
    SelectorMismatch { selector: String, count: usize },

    /// The matched element's text does not start with a number
    #[error(
        "could not parse a number from element text '{text}'\n  \
         - check that the URL is correct\n  \
         - check that the site is up and reachable\n  \
         - the page layout may have changed; try a different --selector"
    )]
    CountNotNumeric { text: String },

    /// Browser launch or CDP plumbing failure
    #[error(transparent)]
    Browser(#[from] anyhow::Error),
}

impl WorkerwatchError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WorkerwatchError::MissingUrl => 22,
            _ => 1,
        }
    }
}

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;
