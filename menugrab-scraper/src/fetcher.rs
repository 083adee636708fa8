use crate::error::{Result, ScrapeError};
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::time::Duration;
use tracing::{debug, info};

/// How far and how patiently the fetcher scrolls to trigger the page's
/// lazy-loaded menu sections.
///
/// Each step scrolls to `step / steps` of the document height and then
/// waits `pause`. The default (10 steps, 2 s pause) walks the whole
/// page in roughly 20 seconds worst case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPolicy {
    pub steps: u32,
    pub pause: Duration,
}

impl Default for ScrollPolicy {
    fn default() -> Self {
        Self {
            steps: 10,
            pause: Duration::from_secs(2),
        }
    }
}

/// Drives a headless Chromium session and returns the fully rendered
/// document markup for a menu page URL.
pub struct PageFetcher {
    policy: ScrollPolicy,
}

impl PageFetcher {
    pub fn new() -> Self {
        Self {
            policy: ScrollPolicy::default(),
        }
    }

    pub fn with_scroll_policy(mut self, policy: ScrollPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Navigate to `url`, run the scroll-and-wait sequence, and return
    /// the rendered markup. Blocks for roughly `steps * pause` plus
    /// navigation time; there is no retry.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching {} ({} scroll steps)", url, self.policy.steps);

        let config = BrowserConfig::builder()
            .window_size(1920, 1080)
            .build()
            .map_err(ScrapeError::Browser)?;
        let (mut browser, mut handler) = Browser::launch(config).await?;

        // The CDP event loop must be polled for the session to make
        // progress; it ends when the browser closes.
        let event_loop = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser.new_page(url).await?;
        page.wait_for_navigation().await?;

        for step in 0..=self.policy.steps {
            let script = format!(
                "window.scrollTo(0, {} / {} * document.body.scrollHeight);",
                step, self.policy.steps
            );
            page.evaluate(script).await?;
            tokio::time::sleep(self.policy.pause).await;
        }

        let html = page.content().await?;
        debug!("Rendered document is {} bytes", html.len());

        browser.close().await?;
        browser.wait().await?;
        let _ = event_loop.await;

        Ok(html)
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_page_load_behavior() {
        let policy = ScrollPolicy::default();
        assert_eq!(policy.steps, 10);
        assert_eq!(policy.pause, Duration::from_secs(2));
    }

    #[test]
    fn scroll_policy_is_configurable() {
        let fetcher = PageFetcher::new().with_scroll_policy(ScrollPolicy {
            steps: 3,
            pause: Duration::from_millis(50),
        });
        assert_eq!(fetcher.policy.steps, 3);
    }
}
