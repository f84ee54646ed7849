use anyhow::{Context, anyhow};
use chromiumoxide::Page;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::network::{
    EnableParams, EventLoadingFailed, EventResponseReceived,
};
use chromiumoxide::error::CdpError;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::errors::WorkerwatchError;

/// How a navigation attempt settled.
///
/// Exactly one of these is produced per attempt: the first terminal condition
/// wins and later observer events are discarded.
#[derive(Debug)]
pub enum NavigationOutcome {
    /// Navigation completed and the page finished loading
    Loaded,
    /// A request failed at the network level
    RequestFailed {
        /// Raw failure description from the browser (e.g. `net::ERR_CONNECTION_REFUSED`)
        reason: String,
    },
    /// A response arrived with a status outside the accepted range
    BadStatus {
        status: i64,
        status_text: String,
    },
}

/// Headless browser session holding one page.
///
/// The session owns the CDP event handler task and must be released with
/// [`BrowserSession::shutdown`] once the page content has been captured.
pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page: Page,
}

impl BrowserSession {
    /// Launch a headless browser and open a blank page
    pub async fn launch() -> Result<Self, WorkerwatchError> {
        info!("launching browser");

        let config = BrowserConfig::builder()
            .no_sandbox()
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .build()
            .map_err(|e| anyhow!("invalid browser configuration: {}", e))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("failed to launch headless browser")?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("CDP handler error: {}", e);
                }
            }
        });

        info!("creating new browser page");
        let page = browser
            .new_page("about:blank")
            .await
            .context("failed to open a browser page")?;

        // Network events are needed for the failure and status observers
        page.execute(EnableParams::default())
            .await
            .context("failed to enable network events")?;

        Ok(BrowserSession {
            browser,
            handler_task,
            page,
        })
    }

    /// Navigate the page to `url` and wait until one terminal condition fires:
    /// the load completing, a network-level request failure, or a response
    /// status outside the accepted range.
    ///
    /// The observers are registered before navigation starts so early failures
    /// are not missed.
    pub async fn navigate(&self, url: &str) -> Result<NavigationOutcome, WorkerwatchError> {
        let mut failures = self
            .page
            .event_listener::<EventLoadingFailed>()
            .await
            .context("failed to observe request failures")?;
        let mut responses = self
            .page
            .event_listener::<EventResponseReceived>()
            .await
            .context("failed to observe responses")?;

        info!("browser navigating to {}", url);
        let navigation = async {
            self.page.goto(url).await?.wait_for_navigation().await?;
            Ok::<(), CdpError>(())
        };
        tokio::pin!(navigation);

        loop {
            tokio::select! {
                biased;

                Some(event) = failures.next() => {
                    debug!("request failed: {}", event.error_text);
                    return Ok(NavigationOutcome::RequestFailed {
                        reason: event.error_text.clone(),
                    });
                }

                Some(event) = responses.next() => {
                    let status = event.response.status;
                    debug!("response {} for {}", status, event.response.url);
                    if !status_accepted(status) {
                        return Ok(NavigationOutcome::BadStatus {
                            status,
                            status_text: event.response.status_text.clone(),
                        });
                    }
                }

                result = &mut navigation => {
                    result.context("navigation did not complete")?;
                    return Ok(NavigationOutcome::Loaded);
                }
            }
        }
    }

    /// Retrieve the fully rendered page markup
    pub async fn content(&self) -> Result<String, WorkerwatchError> {
        info!("fetching page content");
        let html = self
            .page
            .content()
            .await
            .context("failed to capture page content")?;
        Ok(html)
    }

    /// Close the browser and reap the event handler task
    pub async fn shutdown(mut self) {
        info!("closing browser");
        if let Err(e) = self.browser.close().await {
            debug!("browser close failed: {}", e);
            self.handler_task.abort();
            return;
        }
        if let Err(e) = self.handler_task.await {
            if !e.is_cancelled() {
                debug!("CDP handler task ended abnormally: {}", e);
            }
        }
    }
}

/// Accepted response status range: `[200, 300)`.
///
/// 200 and 299 pass; 1xx and 300 do not.
pub(crate) fn status_accepted(status: i64) -> bool {
    (200..300).contains(&status)
}

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;
