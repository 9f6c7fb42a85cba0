//! Browser session shared by every case of a run

use std::path::PathBuf;

use playwright_rs::{Browser, Playwright};
use tracing::info;

use crate::config::{BrowserKind, SuiteConfig};
use crate::error::E2eResult;
use crate::page::CounterPage;

/// A launched browser plus the Playwright connection that owns it
pub struct BrowserSession {
    // Held so the driver outlives the browser
    _playwright: Playwright,
    browser: Browser,
    kind: BrowserKind,
    base_url: String,
    screenshot_dir: PathBuf,
}

impl BrowserSession {
    /// Launch the configured browser, headless unless `show_browser` is set.
    pub async fn launch(config: &SuiteConfig) -> E2eResult<Self> {
        info!(
            browser = %config.browser,
            headless = !config.show_browser,
            "launching browser"
        );

        let playwright = Playwright::launch().await?;
        let browser_type = match config.browser {
            BrowserKind::Chromium => playwright.chromium(),
            BrowserKind::Firefox => playwright.firefox(),
            BrowserKind::Webkit => playwright.webkit(),
        };
        let browser = browser_type
            .launch_with_options(config.launch_options())
            .await?;

        Ok(Self {
            _playwright: playwright,
            browser,
            kind: config.browser,
            base_url: config.base_url(),
            screenshot_dir: config.screenshot_dir.clone(),
        })
    }

    /// A fresh page so that every case starts from a clean load
    pub async fn new_page(&self) -> E2eResult<CounterPage> {
        let page = self.browser.new_page().await?;
        Ok(CounterPage::new(
            page,
            self.base_url.clone(),
            self.screenshot_dir.clone(),
        ))
    }

    pub async fn close(&self) -> E2eResult<()> {
        info!(browser = %self.kind, "closing browser");
        self.browser.close().await?;
        Ok(())
    }
}
