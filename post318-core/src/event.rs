//! Calendar event types.
//!
//! A `CalendarEvent` is one concrete, dated entry: either a one-off row
//! parsed from the events spreadsheet, or an occurrence generated from a
//! recurrence rule. The calendar view consumes these as JSON with
//! camelCase field names.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One concrete, dated calendar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Serializes as zero-padded ISO `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// True only for occurrences generated from a recurrence rule.
    #[serde(default)]
    pub is_special_event: bool,
    /// The generating rule's id; present only when `is_special_event` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_event_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_with_padded_date() {
        let event = CalendarEvent {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            title: "Pancake Breakfast".to_string(),
            time: Some("9:00 AM".to_string()),
            location: Some("Post 318 Hall".to_string()),
            description: None,
            is_special_event: true,
            original_event_id: Some("breakfast".to_string()),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["date"], "2024-03-05");
        assert_eq!(json["isSpecialEvent"], true);
        assert_eq!(json["originalEventId"], "breakfast");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn feed_event_omits_rule_fields() {
        let event = CalendarEvent {
            date: NaiveDate::from_ymd_opt(2024, 11, 11).unwrap(),
            title: "Veterans Day Ceremony".to_string(),
            time: None,
            location: None,
            description: None,
            is_special_event: false,
            original_event_id: None,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["isSpecialEvent"], false);
        assert!(json.get("originalEventId").is_none());
        assert!(json.get("time").is_none());
    }
}
