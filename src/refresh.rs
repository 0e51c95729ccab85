//! Periodic feed refresh.
//!
//! A single task owns all snapshot writes: each tick fetches the feed,
//! regenerates the recurrence window from the current month, merges, and
//! swaps the snapshot in one step. A failed fetch keeps the previous
//! snapshot on display until the next successful cycle.

use chrono::{Datelike, Utc};

use post318_core::recurrence::generate_window;
use post318_core::{feed, merge_with_feed};

use crate::state::AppState;

pub async fn run(state: AppState) {
    let interval = match state.config.refresh_interval() {
        Ok(duration) => duration,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    // First tick fires immediately, so the feed loads right at startup
    let mut ticker = tokio::time::interval(interval);
    loop {
        ticker.tick().await;

        let feed_events = match fetch_feed(&state.config.feed_url).await {
            Ok(text) => feed::parse_feed(&text),
            Err(e) => {
                eprintln!("Failed to load events feed: {:#}", e);
                continue;
            }
        };

        let today = Utc::now().date_naive();
        let generated = generate_window(
            &state.rules,
            today.year(),
            today.month(),
            state.config.window_months,
        );
        let (events, overrides) = merge_with_feed(generated, &feed_events);
        state.replace_snapshot(events, overrides);

        let snapshot = state.snapshot();
        println!(
            "Refreshed events (v{}): {} entries, {} overridden dates",
            snapshot.version,
            snapshot.events.len(),
            snapshot.overrides.len()
        );
    }
}

async fn fetch_feed(url: &str) -> anyhow::Result<String> {
    let response = reqwest::get(url).await?.error_for_status()?;
    Ok(response.text().await?)
}
