use crate::browser::{BrowserSession, NavigationOutcome};
use crate::config::Config;
use crate::errors::WorkerwatchError;
use crate::extract;

/// Drive one browser page through navigation and content capture, then
/// extract the inactive-worker count from the rendered markup.
///
/// The browser session is released on every path before this returns,
/// including when navigation or capture fails.
pub async fn fetch_worker_count(config: &Config) -> Result<i64, WorkerwatchError> {
    let session = BrowserSession::launch().await?;

    let html = capture_page(&session, config).await;
    session.shutdown().await;

    extract::worker_count(&html?, &config.selector)
}

async fn capture_page(
    session: &BrowserSession,
    config: &Config,
) -> Result<String, WorkerwatchError> {
    match session.navigate(config.url.as_str()).await? {
        NavigationOutcome::Loaded => {}
        NavigationOutcome::RequestFailed { reason } => {
            return Err(WorkerwatchError::RequestFailed(reason));
        }
        NavigationOutcome::BadStatus {
            status,
            status_text,
        } => {
            return Err(WorkerwatchError::BadStatus {
                status,
                status_text,
            });
        }
    }

    session.content().await
}
