//! Shared application state: the rule catalog and the latest event snapshot.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Datelike, Utc};

use post318_core::CalendarEvent;
use post318_core::config::ServerConfig;
use post318_core::merge::OverrideMap;
use post318_core::recurrence::{self, RecurrenceRule};

/// One complete refresh result.
///
/// The refresh task replaces the whole snapshot in a single swap, so
/// readers always see a consistent events/overrides pair and never a
/// partially updated one.
#[derive(Debug)]
pub struct EventSnapshot {
    /// Increases by one per successful refresh.
    pub version: u64,
    pub refreshed_at: DateTime<Utc>,
    pub events: Vec<CalendarEvent>,
    pub overrides: OverrideMap,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub rules: Arc<Vec<RecurrenceRule>>,
    snapshot: Arc<RwLock<Arc<EventSnapshot>>>,
}

impl AppState {
    /// Build initial state with a generated-only snapshot so the calendar
    /// has content before the first feed fetch completes.
    pub fn new(config: ServerConfig, rules: Vec<RecurrenceRule>) -> Self {
        let now = Utc::now();
        let today = now.date_naive();
        let events =
            recurrence::generate_window(&rules, today.year(), today.month(), config.window_months);

        let snapshot = EventSnapshot {
            version: 0,
            refreshed_at: now,
            events,
            overrides: OverrideMap::new(),
        };

        AppState {
            config: Arc::new(config),
            rules: Arc::new(rules),
            snapshot: Arc::new(RwLock::new(Arc::new(snapshot))),
        }
    }

    pub fn snapshot(&self) -> Arc<EventSnapshot> {
        self.snapshot.read().expect("snapshot lock poisoned").clone()
    }

    /// Swap in a fresh snapshot. Only the refresh task calls this, so the
    /// version counter is monotonic.
    pub fn replace_snapshot(&self, events: Vec<CalendarEvent>, overrides: OverrideMap) {
        let mut guard = self.snapshot.write().expect("snapshot lock poisoned");
        *guard = Arc::new(EventSnapshot {
            version: guard.version + 1,
            refreshed_at: Utc::now(),
            events,
            overrides,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use post318_core::catalog;

    #[test]
    fn initial_snapshot_has_generated_events() {
        let state = AppState::new(ServerConfig::default(), catalog::default_rules());
        let snapshot = state.snapshot();
        assert_eq!(snapshot.version, 0);
        // 12-month window over the default catalog always yields something
        assert!(!snapshot.events.is_empty());
        assert!(snapshot.overrides.is_empty());
    }

    #[test]
    fn replacing_snapshot_bumps_version() {
        let state = AppState::new(ServerConfig::default(), Vec::new());
        state.replace_snapshot(Vec::new(), OverrideMap::new());
        state.replace_snapshot(Vec::new(), OverrideMap::new());
        assert_eq!(state.snapshot().version, 2);
    }
}
