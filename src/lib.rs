//! counter-e2e - End-to-end browser tests for the counter web app.
//!
//! The crate renders the counter app, serves it from a child process, and
//! drives it through Playwright: one browser per run, one fresh page per case.

pub mod app;
pub mod browser;
pub mod cases;
pub mod components;
pub mod config;
pub mod error;
pub mod page;
pub mod process;
pub mod report;
pub mod server;
pub mod suite;

pub use cases::Case;
pub use config::{BrowserKind, SuiteConfig};
pub use error::{E2eError, E2eResult};
pub use report::{CaseReport, SuiteReport};
pub use suite::Suite;
