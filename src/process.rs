//! Spawning the static server and waiting for it to come up

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tokio::time::timeout;
use tracing::{debug, info};

use crate::config::SuiteConfig;
use crate::error::{E2eError, E2eResult};

/// How to launch the static server
#[derive(Debug, Clone)]
pub struct ServerCommand {
    pub program: PathBuf,

    /// Arguments placed before the `--port=<port>` argument
    pub args: Vec<OsString>,

    pub port: u16,

    pub startup_timeout: Duration,
}

impl ServerCommand {
    /// `<program> serve --dir <site_dir> --host <host> [--no-reload] --port=<port>`
    pub fn for_suite(config: &SuiteConfig, program: PathBuf) -> Self {
        let mut args: Vec<OsString> = vec![
            "serve".into(),
            "--dir".into(),
            config.site_dir.clone().into_os_string(),
            "--host".into(),
            config.host.clone().into(),
        ];
        if !config.live_reload {
            args.push("--no-reload".into());
        }

        Self {
            program,
            args,
            port: config.port,
            startup_timeout: config.startup_timeout(),
        }
    }

    fn port_arg(&self) -> String {
        format!("--port={}", self.port)
    }
}

/// Handle to a running server process
pub struct ServerProcess {
    child: Child,
    ready_line: String,
}

impl ServerProcess {
    /// Spawn the server and wait for its first stdout line.
    pub async fn spawn(command: &ServerCommand) -> E2eResult<Self> {
        info!(
            program = %command.program.display(),
            port = command.port,
            "spawning static server"
        );

        let mut child = Command::new(&command.program)
            .args(&command.args)
            .arg(command.port_arg())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                E2eError::ServerStartup(format!(
                    "failed to spawn {}: {e}",
                    command.program.display()
                ))
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| E2eError::ServerStartup("server stdout was not captured".to_string()))?;
        let mut lines = BufReader::new(stdout).lines();

        let first = timeout(command.startup_timeout, lines.next_line())
            .await
            .map_err(|_| E2eError::Timeout("server readiness line".to_string()))??;

        let ready_line = first.ok_or(E2eError::ServerExited)?;
        info!(line = %ready_line, "static server ready");

        // Drain the rest so the server never blocks on a full pipe
        tokio::spawn(async move {
            while let Ok(Some(line)) = lines.next_line().await {
                debug!(%line, "server output");
            }
        });

        Ok(Self { child, ready_line })
    }

    /// The first line the server printed
    pub fn ready_line(&self) -> &str {
        &self.ready_line
    }

    /// Kill the server and wait for it to exit.
    pub async fn stop(&mut self) -> E2eResult<()> {
        info!(pid = ?self.child.id(), "stopping static server");
        if self.child.id().is_some() {
            self.child.kill().await?;
        }
        Ok(())
    }
}
