//! Page object for the counter app

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use futures_util::future::try_join_all;
use playwright_rs::Page;
use tracing::debug;

use crate::error::{E2eError, E2eResult};

/// Selectors for the page's test hooks
pub mod selectors {
    pub const HEADLINE: &str = "h1";
    pub const COUNT_OUTPUT: &str = r#"[data-test="count-output"]"#;
    pub const BUTTON_INCREMENT: &str = r#"[data-test="button-increment"]"#;
    pub const BUTTON_DISPLAY: &str = r#"[data-test="button-display"]"#;
    pub const DISPLAY: &str = r#"[data-test="display"]"#;
}

/// Parse the counter output the way JavaScript's `parseInt` does: leading
/// whitespace and an optional sign, then the longest run of digits.
pub fn parse_count(raw: &str) -> E2eResult<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];

    let value: i64 = digits.parse().map_err(|_| E2eError::ParseCount {
        raw: raw.to_string(),
    })?;
    Ok(if negative { -value } else { value })
}

/// One freshly opened browser page pointed at the counter app
pub struct CounterPage {
    page: Page,
    url: String,
    screenshot_dir: PathBuf,
    /// Screenshot saved through this page, if any
    last_screenshot: Mutex<Option<PathBuf>>,
}

impl CounterPage {
    pub fn new(page: Page, url: impl Into<String>, screenshot_dir: impl Into<PathBuf>) -> Self {
        Self {
            page,
            url: url.into(),
            screenshot_dir: screenshot_dir.into(),
            last_screenshot: Mutex::new(None),
        }
    }

    /// Path of the last screenshot this page saved
    pub fn last_screenshot(&self) -> Option<PathBuf> {
        self.last_screenshot.lock().ok().and_then(|slot| slot.clone())
    }

    /// Navigate to the counter app
    pub async fn open(&self) -> E2eResult<()> {
        debug!(url = %self.url, "opening counter app");
        self.page.goto(&self.url, None).await?;
        Ok(())
    }

    pub async fn headline_count(&self) -> E2eResult<usize> {
        Ok(self.page.locator(selectors::HEADLINE).await.count().await?)
    }

    /// Current value of the counter output
    pub async fn count(&self) -> E2eResult<i64> {
        let output = self.page.locator(selectors::COUNT_OUTPUT).await;
        let raw = output.inner_html().await?;
        parse_count(&raw)
    }

    pub async fn click_increment(&self) -> E2eResult<()> {
        let button = self.page.locator(selectors::BUTTON_INCREMENT).await;
        button.click(None).await?;
        Ok(())
    }

    /// Fire `clicks` clicks on the increment button at once and wait for all.
    pub async fn click_increment_concurrently(&self, clicks: usize) -> E2eResult<()> {
        let button = self.page.locator(selectors::BUTTON_INCREMENT).await;
        debug!(clicks, "clicking increment concurrently");
        try_join_all((0..clicks).map(|_| button.click(None))).await?;
        Ok(())
    }

    /// Click the display toggle through the DOM rather than the mouse.
    pub async fn click_display(&self) -> E2eResult<()> {
        let script = format!(
            "document.querySelector('{}').click()",
            selectors::BUTTON_DISPLAY
        );
        self.page.evaluate::<(), ()>(&script, None).await?;
        Ok(())
    }

    pub async fn display_count(&self) -> E2eResult<usize> {
        Ok(self.page.locator(selectors::DISPLAY).await.count().await?)
    }

    /// Save a PNG of the page as `<screenshot_dir>/<name>.png`.
    pub async fn screenshot(&self, name: &str) -> E2eResult<PathBuf> {
        let path = screenshot_path(&self.screenshot_dir, name);
        tokio::fs::create_dir_all(&self.screenshot_dir).await?;

        let png = self.page.screenshot(None).await?;
        tokio::fs::write(&path, png).await?;

        debug!(path = %path.display(), "saved screenshot");
        if let Ok(mut slot) = self.last_screenshot.lock() {
            *slot = Some(path.clone());
        }
        Ok(path)
    }

    pub async fn close(&self) -> E2eResult<()> {
        self.page.close().await?;
        Ok(())
    }
}

pub fn screenshot_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_count("0").unwrap(), 0);
        assert_eq!(parse_count("42").unwrap(), 42);
        assert_eq!(parse_count("-3").unwrap(), -3);
        assert_eq!(parse_count("+7").unwrap(), 7);
    }

    #[test]
    fn parses_like_parse_int() {
        assert_eq!(parse_count("  12 clicks").unwrap(), 12);
        assert_eq!(parse_count("\n5\n").unwrap(), 5);
        assert_eq!(parse_count("3.9").unwrap(), 3);
    }

    #[test]
    fn rejects_non_numeric_output() {
        for raw in ["", "abc", "-", " + 1", "<b>1</b>"] {
            let err = parse_count(raw).unwrap_err();
            assert!(matches!(err, E2eError::ParseCount { .. }), "{raw:?}");
        }
    }

    #[test]
    fn counts_beyond_i64_are_rejected() {
        let err = parse_count("99999999999999999999").unwrap_err();
        assert!(matches!(err, E2eError::ParseCount { .. }));
        assert_eq!(parse_count("9223372036854775807").unwrap(), i64::MAX);
    }

    #[test]
    fn screenshots_land_in_the_screens_dir() {
        assert_eq!(
            screenshot_path(Path::new("screens"), "basicRender"),
            PathBuf::from("screens/basicRender.png")
        );
    }

    #[test]
    fn selectors_use_data_test_hooks() {
        assert_eq!(selectors::COUNT_OUTPUT, "[data-test=\"count-output\"]");
        assert_eq!(selectors::DISPLAY, "[data-test=\"display\"]");
    }
}
