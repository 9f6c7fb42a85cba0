//! Error types for the counter suite

use thiserror::Error;

/// Errors raised while serving, driving or asserting on the counter app
#[derive(Error, Debug)]
pub enum E2eError {
    /// The server process could not be spawned
    #[error("server failed to start: {0}")]
    ServerStartup(String),

    /// The server closed stdout before printing its readiness line
    #[error("server exited before signalling readiness")]
    ServerExited,

    #[error("timeout waiting for: {0}")]
    Timeout(String),

    #[error("playwright error: {0}")]
    Playwright(#[from] playwright_rs::Error),

    /// A case's expectation did not hold
    #[error("assertion failed: {0}")]
    AssertionFailed(String),

    /// The counter output did not start with an integer
    #[error("count output is not a number: {raw:?}")]
    ParseCount { raw: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("render error: {0}")]
    Render(#[from] askama::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type E2eResult<T> = Result<T, E2eError>;

/// Fail with [`E2eError::AssertionFailed`] unless `actual == expected`.
pub fn ensure_eq<T>(actual: T, expected: T, what: &str) -> E2eResult<()>
where
    T: PartialEq + std::fmt::Debug,
{
    if actual == expected {
        Ok(())
    } else {
        Err(E2eError::AssertionFailed(format!(
            "{what}: expected {expected:?}, got {actual:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_eq_passes_on_match() {
        assert!(ensure_eq(1, 1, "count").is_ok());
    }

    #[test]
    fn ensure_eq_reports_expected_and_actual() {
        let err = ensure_eq(2, 3, "count after click").unwrap_err();
        assert_eq!(
            err.to_string(),
            "assertion failed: count after click: expected 3, got 2"
        );
    }
}
