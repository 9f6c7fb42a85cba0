use std::path::{Path, PathBuf};

use axum::Router;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use tower_http::services::ServeDir;
use tower_livereload::LiveReloadLayer;
use tracing::{info, warn};

/// Options for the static file server
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub live_reload: bool,
}

/// The line printed to stdout once the listener is bound. Spawners treat the
/// first stdout line as the readiness signal, so nothing else goes to stdout.
pub fn ready_line(dir: &Path, host: &str, port: u16) -> String {
    format!("Serving {} at http://{host}:{port}", dir.display())
}

/// Router serving `dir` as static files
pub fn router(dir: &Path) -> Router {
    Router::new().fallback_service(ServeDir::new(dir))
}

/// Watch `dir` and reload connected browsers on changes.
fn watch_for_reload(dir: &Path, livereload: &LiveReloadLayer) -> anyhow::Result<RecommendedWatcher> {
    let reloader = livereload.reloader();

    let mut watcher = notify::recommended_watcher(move |res: Result<Event, _>| {
        if let Ok(event) = res {
            if event.kind.is_modify() || event.kind.is_create() {
                reloader.reload();
            }
        }
    })?;
    watcher.watch(dir, RecursiveMode::Recursive)?;
    Ok(watcher)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

/// Serve a directory of static files until Ctrl+C.
pub async fn serve(options: &ServeOptions) -> anyhow::Result<()> {
    if !options.dir.is_dir() {
        anyhow::bail!("not a directory: {}", options.dir.display());
    }

    let mut app = router(&options.dir);

    let livereload = options.live_reload.then(LiveReloadLayer::new);
    // Keep watcher alive
    let _watcher = match &livereload {
        Some(layer) => Some(watch_for_reload(&options.dir, layer)?),
        None => None,
    };
    if let Some(layer) = livereload {
        app = app.layer(layer);
        info!(dir = %options.dir.display(), "live reload enabled");
    }

    let addr = format!("{}:{}", options.host, options.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!(
        "{}",
        ready_line(&options.dir, &options.host, options.port)
    );
    info!(%addr, "static server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
