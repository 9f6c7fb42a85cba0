//! The counter app under test.
//!
//! Renders a single `index.html` exposing the `data-test` hooks the suite
//! drives: `count-output`, `button-increment`, `button-display` and, once
//! toggled on, `display`.

use std::fs;
use std::path::Path;

use askama::Template;
use tracing::info;

use crate::error::E2eResult;

/// Content the counter page is rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterApp {
    pub title: String,
    pub initial_count: i64,
    pub message: String,
}

impl Default for CounterApp {
    fn default() -> Self {
        Self {
            title: "Counter".to_string(),
            initial_count: 0,
            message: "Hello from the counter app!".to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    title: &'a str,
    initial_count: i64,
    /// Only reachable through the `<template>` element until toggled on
    message: &'a str,
}

/// Render the page to a string.
pub fn render_index(app: &CounterApp) -> E2eResult<String> {
    let template = IndexTemplate {
        title: &app.title,
        initial_count: app.initial_count,
        message: &app.message,
    };
    Ok(template.render()?)
}

/// Render the counter app into `output_dir`
pub fn render(app: &CounterApp, output_dir: &Path) -> E2eResult<()> {
    fs::create_dir_all(output_dir)?;

    let html = render_index(app)?;
    fs::write(output_dir.join("index.html"), html)?;

    info!(dir = %output_dir.display(), "rendered counter app");
    Ok(())
}
