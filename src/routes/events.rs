//! Event endpoints consumed by the calendar and upcoming-events views.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use post318_core::CalendarEvent;
use post318_core::merge::OverrideMap;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(month_events))
        .route("/api/events/upcoming", get(upcoming_events))
        .route("/api/recurring", get(recurring_schedule))
        .route("/api/health", get(health))
}

#[derive(Deserialize)]
struct MonthQuery {
    year: i32,
    month: u32,
}

/// Month view: merged events plus "Replaces: ..." annotations.
#[derive(Serialize)]
struct MonthResponse {
    events: Vec<CalendarEvent>,
    overrides: OverrideMap,
}

/// GET /api/events?year=2024&month=3 - merged events for one month
async fn month_events(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthResponse>, AppError> {
    if !(1..=12).contains(&query.month) {
        return Err(AppError::bad_request(format!(
            "month must be 1..=12, got {}",
            query.month
        )));
    }

    let snapshot = state.snapshot();

    let mut events: Vec<CalendarEvent> = snapshot
        .events
        .iter()
        .filter(|e| e.date.year() == query.year && e.date.month() == query.month)
        .cloned()
        .collect();
    events.sort_by_key(|e| e.date);

    let overrides: OverrideMap = snapshot
        .overrides
        .iter()
        .filter(|(date, _)| date.year() == query.year && date.month() == query.month)
        .map(|(date, title)| (*date, title.clone()))
        .collect();

    Ok(Json(MonthResponse { events, overrides }))
}

/// GET /api/events/upcoming - the next few future-dated entries
async fn upcoming_events(State(state): State<AppState>) -> Json<Vec<CalendarEvent>> {
    let today = Utc::now().date_naive();
    let snapshot = state.snapshot();

    let mut upcoming: Vec<CalendarEvent> = snapshot
        .events
        .iter()
        .filter(|e| e.date >= today)
        .cloned()
        .collect();
    upcoming.sort_by_key(|e| e.date);
    upcoming.truncate(state.config.upcoming_limit);

    Json(upcoming)
}

#[derive(Serialize)]
struct RecurringEntry {
    id: String,
    title: String,
    time: String,
    location: String,
    schedule: String,
}

/// GET /api/recurring - the standing schedule with human-readable text
async fn recurring_schedule(State(state): State<AppState>) -> Json<Vec<RecurringEntry>> {
    let entries = state
        .rules
        .iter()
        .map(|rule| RecurringEntry {
            id: rule.id.clone(),
            title: rule.title.clone(),
            time: rule.time.clone(),
            location: rule.location.clone(),
            schedule: rule.describe(),
        })
        .collect();
    Json(entries)
}

#[derive(Serialize)]
struct HealthResponse {
    version: u64,
    refreshed_at: DateTime<Utc>,
}

/// GET /api/health - snapshot version and last refresh time
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let snapshot = state.snapshot();
    Json(HealthResponse {
        version: snapshot.version,
        refreshed_at: snapshot.refreshed_at,
    })
}
