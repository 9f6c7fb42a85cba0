//! Suite configuration
//!
//! Values come from built-in defaults, an optional YAML file, and then a small
//! set of environment overrides. CLI flags are applied last by the binary.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use playwright_rs::LaunchOptions;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{E2eError, E2eResult};

/// Default port the counter app is served on.
pub const DEFAULT_PORT: u16 = 8282;

/// Slow-motion delay applied when the browser is shown.
pub const DEFAULT_SLOW_MO_MS: f64 = 100.0;

/// Browser engine to drive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowserKind {
    type Err = E2eError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chromium" | "chrome" => Ok(BrowserKind::Chromium),
            "firefox" => Ok(BrowserKind::Firefox),
            "webkit" => Ok(BrowserKind::Webkit),
            other => Err(E2eError::Config(format!("unknown browser: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuiteConfig {
    /// Interface the static server binds to and the browser connects to
    pub host: String,

    pub port: u16,

    /// Directory the counter app is rendered into and served from
    pub site_dir: PathBuf,

    /// Where screenshots and `report.json` are written
    pub screenshot_dir: PathBuf,

    pub browser: BrowserKind,

    /// Run with a visible window and a slow-motion delay
    pub show_browser: bool,

    pub slow_mo_ms: f64,

    pub startup_timeout_secs: u64,

    /// Program that serves `site_dir`; `None` means this executable's `serve`
    pub server_program: Option<PathBuf>,

    pub live_reload: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            site_dir: PathBuf::from("site"),
            screenshot_dir: PathBuf::from("screens"),
            browser: BrowserKind::default(),
            show_browser: false,
            slow_mo_ms: DEFAULT_SLOW_MO_MS,
            startup_timeout_secs: 30,
            server_program: None,
            live_reload: false,
        }
    }
}

impl SuiteConfig {
    /// Load configuration from a YAML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> E2eResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> E2eResult<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Apply `SHOW_BROWSER`, `BROWSER`, `COUNTER_E2E_PORT` and
    /// `COUNTER_E2E_SLOW_MO` from the process environment.
    pub fn apply_env(self) -> Self {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`.
    pub fn apply_env_with<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("SHOW_BROWSER") {
            self.show_browser = !value.is_empty();
        }

        if let Some(value) = lookup("BROWSER") {
            match value.parse() {
                Ok(kind) => self.browser = kind,
                Err(e) => warn!(%value, error = %e, "ignoring BROWSER"),
            }
        }

        if let Some(value) = lookup("COUNTER_E2E_PORT") {
            match value.parse() {
                Ok(port) => self.port = port,
                Err(e) => warn!(%value, error = %e, "ignoring COUNTER_E2E_PORT"),
            }
        }

        if let Some(value) = lookup("COUNTER_E2E_SLOW_MO") {
            match value.parse::<f64>() {
                Ok(ms) if ms >= 0.0 => self.slow_mo_ms = ms,
                _ => warn!(%value, "ignoring COUNTER_E2E_SLOW_MO"),
            }
        }

        self
    }

    /// URL the browser opens for every case.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn startup_timeout(&self) -> Duration {
        Duration::from_secs(self.startup_timeout_secs)
    }

    /// Playwright launch options: headless by default, visible and slowed
    /// down when `show_browser` is set.
    pub fn launch_options(&self) -> LaunchOptions {
        if self.show_browser {
            LaunchOptions::default()
                .headless(false)
                .slow_mo(self.slow_mo_ms)
        } else {
            LaunchOptions::default().headless(true)
        }
    }

    pub fn report_path(&self) -> PathBuf {
        self.screenshot_dir.join("report.json")
    }
}
