use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use counter_e2e::app::{self, CounterApp};
use counter_e2e::server::{self, ServeOptions};
use counter_e2e::{Suite, SuiteConfig};

mod cli;

use cli::{Cli, Commands};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout is reserved for the server's readiness line
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(
    path: Option<PathBuf>,
    site_dir: Option<PathBuf>,
    screenshot_dir: Option<PathBuf>,
    port: Option<u16>,
) -> anyhow::Result<SuiteConfig> {
    let config = match path {
        Some(path) => SuiteConfig::from_file(&path)?,
        None => SuiteConfig::default(),
    };
    let mut config = config.apply_env();

    if let Some(site_dir) = site_dir {
        config.site_dir = site_dir;
    }
    if let Some(screenshot_dir) = screenshot_dir {
        config.screenshot_dir = screenshot_dir;
    }
    if let Some(port) = port {
        config.port = port;
    }
    Ok(config)
}

async fn run(config: SuiteConfig) -> anyhow::Result<()> {
    app::render(&CounterApp::default(), &config.site_dir)?;

    let mut suite = Suite::start(config).await?;
    suite.run_all().await;
    let report = suite.finish().await?;

    for case in &report.cases {
        let mark = if case.passed { "ok" } else { "FAILED" };
        eprintln!("  {mark:6} {}", case.name);
        if let Some(error) = &case.error {
            eprintln!("         {error}");
        }
    }
    eprintln!("{}", report.summary());

    if !report.all_passed() {
        anyhow::bail!("{} of {} cases failed", report.failed, report.total);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate {
            output,
            title,
            initial_count,
            message,
        }) => {
            let app = CounterApp {
                title,
                initial_count,
                message,
            };
            app::render(&app, &output)?;
            eprintln!("Generated counter app in {}", output.display());
        }
        Some(Commands::Serve {
            dir,
            host,
            port,
            no_reload,
        }) => {
            let options = ServeOptions {
                dir,
                host,
                port,
                live_reload: !no_reload,
            };
            server::serve(&options).await?;
        }
        Some(Commands::Run {
            config,
            site_dir,
            screenshot_dir,
            port,
        }) => {
            let config = load_config(config, site_dir, screenshot_dir, port)?;
            run(config).await?;
        }
        None => {
            eprintln!("counter-e2e: no command specified. Use --help for usage.");
        }
    }

    Ok(())
}
