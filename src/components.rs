//! Component rendering for isolated checks.
//!
//! The counter page is assembled from these components via `{% include %}`,
//! so rendering them on their own shows exactly what the page embeds.

use askama::Template;

use crate::error::E2eResult;

/// Headline component template. The page must carry exactly one of these.
#[derive(Template)]
#[template(path = "components/headline.html")]
pub struct HeadlineComponent<'a> {
    pub title: &'a str,
}

/// Message revealed by the display toggle.
#[derive(Template)]
#[template(path = "components/display.html")]
pub struct DisplayComponent<'a> {
    pub message: &'a str,
}

/// Renderer for individual components
pub struct ComponentRenderer;

impl ComponentRenderer {
    pub fn headline(title: &str) -> E2eResult<String> {
        Ok(HeadlineComponent { title }.render()?)
    }

    pub fn display(message: &str) -> E2eResult<String> {
        Ok(DisplayComponent { message }.render()?)
    }
}
