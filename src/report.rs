//! Results of a suite run

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::BrowserKind;
use crate::error::{E2eError, E2eResult};

/// Result of running a single case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    pub name: String,
    pub passed: bool,
    pub duration_ms: u64,
    pub screenshot: Option<PathBuf>,
    pub error: Option<String>,
}

impl CaseReport {
    /// Build the report for one finished case. `screenshot` is the file the
    /// case saved during this run, not whatever is on disk.
    pub fn from_outcome(
        name: &str,
        outcome: &Result<(), E2eError>,
        duration_ms: u64,
        screenshot: Option<PathBuf>,
    ) -> Self {
        Self {
            name: name.to_string(),
            passed: outcome.is_ok(),
            duration_ms,
            screenshot,
            error: outcome.as_ref().err().map(|e| e.to_string()),
        }
    }
}

/// Result of running every case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub browser: BrowserKind,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn new(browser: BrowserKind) -> Self {
        Self {
            browser,
            total: 0,
            passed: 0,
            failed: 0,
            duration_ms: 0,
            cases: Vec::new(),
        }
    }

    pub fn record(&mut self, case: CaseReport) {
        self.total += 1;
        if case.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.cases.push(case);
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|c| !c.passed)
    }

    /// One-line summary, e.g. `chromium: 5 passed, 0 failed (1234 ms)`
    pub fn summary(&self) -> String {
        format!(
            "{}: {} passed, {} failed ({} ms)",
            self.browser, self.passed, self.failed, self.duration_ms
        )
    }

    pub fn write_json(&self, path: &Path) -> E2eResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(name: &str, passed: bool) -> CaseReport {
        CaseReport {
            name: name.to_string(),
            passed,
            duration_ms: 10,
            screenshot: Some(PathBuf::from(format!("screens/{name}.png"))),
            error: (!passed).then(|| "assertion failed".to_string()),
        }
    }

    #[test]
    fn failed_case_without_saved_screenshot_reports_none() {
        let outcome = Err(E2eError::ParseCount {
            raw: "abc".to_string(),
        });
        let report =
            CaseReport::from_outcome("should initially have a count of 0", &outcome, 5, None);

        assert!(!report.passed);
        assert_eq!(report.screenshot, None);
        assert_eq!(
            report.error.as_deref(),
            Some("count output is not a number: \"abc\"")
        );
    }

    #[test]
    fn passed_case_keeps_saved_screenshot() {
        let shot = PathBuf::from("screens/basicRender.png");
        let report =
            CaseReport::from_outcome("should have a headline", &Ok(()), 7, Some(shot.clone()));

        assert!(report.passed);
        assert_eq!(report.screenshot, Some(shot));
        assert_eq!(report.error, None);
    }

    #[test]
    fn record_tallies_outcomes() {
        let mut report = SuiteReport::new(BrowserKind::Chromium);
        report.record(case("a", true));
        report.record(case("b", false));
        report.record(case("c", true));

        assert_eq!(report.total, 3);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert!(!report.all_passed());
        assert_eq!(report.failures().map(|c| c.name.as_str()).collect::<Vec<_>>(), ["b"]);
    }

    #[test]
    fn empty_report_passes() {
        let report = SuiteReport::new(BrowserKind::Firefox);
        assert!(report.all_passed());
        assert_eq!(report.summary(), "firefox: 0 passed, 0 failed (0 ms)");
    }

    #[test]
    fn writes_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("screens").join("report.json");

        let mut report = SuiteReport::new(BrowserKind::Webkit);
        report.record(case("headline", true));
        report.write_json(&path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["browser"], "webkit");
        assert_eq!(value["cases"][0]["name"], "headline");
        assert_eq!(value["cases"][0]["error"], serde_json::Value::Null);
    }
}
