//! Spreadsheet events-feed parsing.
//!
//! The events feed is a published-spreadsheet CSV: the first line names the
//! columns, every later line maps positionally onto them. The feed carries
//! no quoting or escaping, so an embedded comma splits a field; known
//! limitation of this feed, kept as-is.

use chrono::NaiveDate;

use crate::event::CalendarEvent;

/// Parse raw feed text into one-off calendar events.
///
/// Rows without a parseable `date` or a non-empty `title` are dropped
/// silently; the feed routinely contains trailing blank rows.
pub fn parse_feed(text: &str) -> Vec<CalendarEvent> {
    let mut lines = text.trim().lines();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    lines
        .filter_map(|line| parse_row(&headers, line))
        .collect()
}

fn parse_row(headers: &[&str], line: &str) -> Option<CalendarEvent> {
    let values: Vec<&str> = line.split(',').map(str::trim).collect();
    let field = |name: &str| -> Option<&str> {
        headers
            .iter()
            .position(|h| *h == name)
            .and_then(|i| values.get(i))
            .copied()
            .filter(|v| !v.is_empty())
    };

    let date = NaiveDate::parse_from_str(field("date")?, "%Y-%m-%d").ok()?;
    let title = field("title")?.to_string();

    Some(CalendarEvent {
        date,
        title,
        time: field("time").map(str::to_string),
        location: field("location").map(str::to_string),
        description: field("description").map(str::to_string),
        is_special_event: false,
        original_event_id: None,
    })
}
