//! Suite lifecycle: server and browser once per run, a page per case

use std::path::PathBuf;
use std::time::Instant;

use tracing::{error, info, warn};

use crate::browser::BrowserSession;
use crate::cases::Case;
use crate::config::SuiteConfig;
use crate::error::E2eResult;
use crate::page::CounterPage;
use crate::process::{ServerCommand, ServerProcess};
use crate::report::{CaseReport, SuiteReport};

/// A running suite: the static server, the browser, and the results so far
pub struct Suite {
    config: SuiteConfig,
    server: ServerProcess,
    browser: BrowserSession,
    report: SuiteReport,
    started: Instant,
}

impl Suite {
    /// Spawn the server and launch the browser.
    pub async fn start(config: SuiteConfig) -> E2eResult<Self> {
        let program = match &config.server_program {
            Some(program) => program.clone(),
            None => std::env::current_exe()?,
        };
        let command = ServerCommand::for_suite(&config, program);

        let mut server = ServerProcess::spawn(&command).await?;
        let browser = match BrowserSession::launch(&config).await {
            Ok(browser) => browser,
            Err(e) => {
                if let Err(stop_err) = server.stop().await {
                    warn!(error = %stop_err, "failed to stop server");
                }
                return Err(e);
            }
        };

        let report = SuiteReport::new(config.browser);
        Ok(Self {
            config,
            server,
            browser,
            report,
            started: Instant::now(),
        })
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Run one case on a fresh page and record the outcome. The page is closed
    /// whether or not the case passed.
    pub async fn run_case(&mut self, case: Case) -> CaseReport {
        let started = Instant::now();

        let (outcome, screenshot) = match self.browser.new_page().await {
            Ok(page) => {
                let result = case.run(&page).await;
                if let Err(e) = page.close().await {
                    warn!(case = %case, error = %e, "failed to close page");
                }
                (result, page.last_screenshot())
            }
            Err(e) => (Err(e), None),
        };

        let report = CaseReport::from_outcome(
            case.name(),
            &outcome,
            started.elapsed().as_millis() as u64,
            screenshot,
        );

        match &outcome {
            Ok(()) => info!(case = %case, "passed"),
            Err(e) => error!(case = %case, error = %e, "failed"),
        }

        self.report.record(report.clone());
        report
    }

    /// A fresh page outside the recorded cases
    pub async fn new_page(&self) -> E2eResult<CounterPage> {
        self.browser.new_page().await
    }

    /// Run every case in order.
    pub async fn run_all(&mut self) {
        for case in Case::ALL {
            self.run_case(case).await;
        }
    }

    /// Close the browser, stop the server and write `report.json`.
    pub async fn finish(mut self) -> E2eResult<SuiteReport> {
        let browser_closed = self.browser.close().await;
        let server_stopped = self.server.stop().await;

        self.report.duration_ms = self.started.elapsed().as_millis() as u64;
        let report_path: PathBuf = self.config.report_path();
        self.report.write_json(&report_path)?;
        info!(path = %report_path.display(), summary = %self.report.summary(), "suite finished");

        browser_closed?;
        server_stopped?;
        Ok(self.report)
    }
}
