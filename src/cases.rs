//! The acceptance cases run against the counter app.
//!
//! Every case opens the page itself, performs its steps, saves a screenshot
//! and only then checks its expectation.

use std::fmt;

use crate::error::{E2eError, E2eResult, ensure_eq};
use crate::page::CounterPage;

/// Clicks fired at once by [`Case::MultipleIncrements`].
pub const CONCURRENT_CLICKS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Headline,
    InitialCount,
    Increment,
    MultipleIncrements,
    DisplayMessage,
}

impl Case {
    /// All cases in run order
    pub const ALL: [Case; 5] = [
        Case::Headline,
        Case::InitialCount,
        Case::Increment,
        Case::MultipleIncrements,
        Case::DisplayMessage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Case::Headline => "should have a headline",
            Case::InitialCount => "should initially have a count of 0",
            Case::Increment => "should increment on click",
            Case::MultipleIncrements => "should increment right for multiple clicks",
            Case::DisplayMessage => "should display a message",
        }
    }

    /// File stem of the screenshot this case saves
    pub fn screenshot_name(&self) -> &'static str {
        match self {
            Case::Headline => "basicRender",
            Case::InitialCount => "initialCount",
            Case::Increment => "incrementedCount",
            Case::MultipleIncrements => "multiIncrementedCount",
            Case::DisplayMessage => "messageDisplay",
        }
    }

    pub async fn run(&self, page: &CounterPage) -> E2eResult<()> {
        match self {
            Case::Headline => headline(page).await,
            Case::InitialCount => initial_count(page).await,
            Case::Increment => increment(page).await,
            Case::MultipleIncrements => multiple_increments(page).await,
            Case::DisplayMessage => display_message(page).await,
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Count expected after `clicks` increments from `initial`.
pub fn expected_after(initial: i64, clicks: usize) -> E2eResult<i64> {
    i64::try_from(clicks)
        .ok()
        .and_then(|clicks| initial.checked_add(clicks))
        .ok_or_else(|| {
            E2eError::AssertionFailed(format!("count {initial} cannot grow by {clicks}"))
        })
}

async fn headline(page: &CounterPage) -> E2eResult<()> {
    page.open().await?;
    page.screenshot(Case::Headline.screenshot_name()).await?;
    let headlines = page.headline_count().await?;

    ensure_eq(headlines, 1, "number of h1 elements")
}

async fn initial_count(page: &CounterPage) -> E2eResult<()> {
    page.open().await?;
    let count = page.count().await?;
    page.screenshot(Case::InitialCount.screenshot_name()).await?;

    ensure_eq(count, 0, "initial count")
}

async fn increment(page: &CounterPage) -> E2eResult<()> {
    page.open().await?;
    let initial = page.count().await?;
    let expected = expected_after(initial, 1)?;

    page.click_increment().await?;
    let count = page.count().await?;
    page.screenshot(Case::Increment.screenshot_name()).await?;

    ensure_eq(count, expected, "count after one click")
}

async fn multiple_increments(page: &CounterPage) -> E2eResult<()> {
    page.open().await?;
    let initial = page.count().await?;
    let expected = expected_after(initial, CONCURRENT_CLICKS)?;

    page.click_increment_concurrently(CONCURRENT_CLICKS).await?;
    let count = page.count().await?;
    page.screenshot(Case::MultipleIncrements.screenshot_name()).await?;

    ensure_eq(count, expected, "count after concurrent clicks")
}

async fn display_message(page: &CounterPage) -> E2eResult<()> {
    page.open().await?;
    page.click_display().await?;
    page.screenshot(Case::DisplayMessage.screenshot_name()).await?;
    let displays = page.display_count().await?;

    ensure_eq(displays, 1, "number of displayed messages")
}
