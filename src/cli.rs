use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// End-to-end browser tests for the counter web app.
#[derive(Parser, Debug)]
#[command(name = "counter-e2e")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the counter app
    Generate {
        /// Output directory for the rendered app
        #[arg(short, long, default_value = "site")]
        output: PathBuf,

        /// Page title and headline
        #[arg(long, default_value = "Counter")]
        title: String,

        /// Value the counter starts at
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        initial_count: i64,

        /// Message revealed by the display toggle
        #[arg(long, default_value = "Hello from the counter app!")]
        message: String,
    },
    /// Serve a directory of static files
    Serve {
        /// Directory to serve
        #[arg(short, long, default_value = "site")]
        dir: PathBuf,

        /// Interface to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to run the server on
        #[arg(short, long, default_value = "8282")]
        port: u16,

        /// Disable live reload
        #[arg(long)]
        no_reload: bool,
    },
    /// Render the app, serve it and run the browser suite
    Run {
        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory the app is rendered into and served from
        #[arg(long)]
        site_dir: Option<PathBuf>,

        /// Directory for screenshots and report.json
        #[arg(long)]
        screenshot_dir: Option<PathBuf>,

        /// Port for the static server
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_without_subcommand() {
        let cli = Cli::try_parse_from(["counter-e2e"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_generate_subcommand() {
        let cli = Cli::try_parse_from([
            "counter-e2e",
            "generate",
            "--output",
            "out",
            "--initial-count",
            "-2",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Generate {
                output,
                initial_count,
                title,
                ..
            }) => {
                assert_eq!(output, PathBuf::from("out"));
                assert_eq!(initial_count, -2);
                assert_eq!(title, "Counter");
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn cli_parses_serve_with_port_equals_form() {
        let cli = Cli::try_parse_from([
            "counter-e2e",
            "serve",
            "--dir",
            "site",
            "--no-reload",
            "--port=9000",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Serve {
                dir,
                host,
                port,
                no_reload,
            }) => {
                assert_eq!(dir, PathBuf::from("site"));
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 9000);
                assert!(no_reload);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn cli_serve_defaults_to_port_8282() {
        let cli = Cli::try_parse_from(["counter-e2e", "serve"]).unwrap();
        match cli.command {
            Some(Commands::Serve { port, no_reload, .. }) => {
                assert_eq!(port, 8282);
                assert!(!no_reload);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn cli_parses_run_overrides() {
        let cli = Cli::try_parse_from([
            "counter-e2e",
            "run",
            "--config",
            "counter-e2e.yaml",
            "--port",
            "9100",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Run {
                config,
                port,
                site_dir,
                ..
            }) => {
                assert_eq!(config, Some(PathBuf::from("counter-e2e.yaml")));
                assert_eq!(port, Some(9100));
                assert!(site_dir.is_none());
            }
            _ => panic!("Expected Run command"),
        }
    }
}
