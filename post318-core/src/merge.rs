//! Merging rule-generated occurrences with the spreadsheet feed.
//!
//! Feed events always win on a date collision: the generated occurrence is
//! dropped and its title recorded so the calendar view can annotate the
//! replacement ("Replaces: ...").

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use crate::event::CalendarEvent;

/// Titles of generated occurrences displaced by a feed event, keyed by date.
pub type OverrideMap = BTreeMap<NaiveDate, String>;

/// Combine feed events and generated occurrences into one list.
///
/// Every date present in the feed keeps only its feed entries; a generated
/// occurrence dropped this way records `date -> its title` in the override
/// map. When several rules land on the same overridden date, the last one
/// processed wins the map slot. The returned list is unsorted; callers
/// sort by date before display.
pub fn merge_with_feed(
    generated: Vec<CalendarEvent>,
    feed: &[CalendarEvent],
) -> (Vec<CalendarEvent>, OverrideMap) {
    let feed_dates: HashSet<NaiveDate> = feed.iter().map(|e| e.date).collect();

    let mut merged: Vec<CalendarEvent> = feed.to_vec();
    let mut overrides = OverrideMap::new();

    for occurrence in generated {
        if feed_dates.contains(&occurrence.date) {
            overrides.insert(occurrence.date, occurrence.title);
        } else {
            merged.push(occurrence);
        }
    }

    (merged, overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_event(date: NaiveDate, title: &str) -> CalendarEvent {
        CalendarEvent {
            date,
            title: title.to_string(),
            time: Some("7:00 PM".to_string()),
            location: Some("Post 318 Hall".to_string()),
            description: None,
            is_special_event: false,
            original_event_id: None,
        }
    }

    fn generated_event(date: NaiveDate, title: &str, rule_id: &str) -> CalendarEvent {
        CalendarEvent {
            date,
            title: title.to_string(),
            time: Some("7:00 PM".to_string()),
            location: Some("Post 318 Hall".to_string()),
            description: None,
            is_special_event: true,
            original_event_id: Some(rule_id.to_string()),
        }
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn feed_event_displaces_generated_occurrence() {
        let date = ymd(2024, 3, 14);
        let feed = vec![feed_event(date, "Board Meeting")];
        let generated = vec![generated_event(
            date,
            "Monthly Legion Membership Meeting",
            "membership-meeting",
        )];

        let (merged, overrides) = merge_with_feed(generated, &feed);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].title, "Board Meeting");
        assert!(!merged[0].is_special_event);
        assert_eq!(
            overrides.get(&date).map(String::as_str),
            Some("Monthly Legion Membership Meeting")
        );
    }

    #[test]
    fn uncontested_occurrences_pass_through_unchanged() {
        let feed = vec![feed_event(ymd(2024, 3, 20), "Blood Drive")];
        let generated = vec![
            generated_event(ymd(2024, 3, 14), "Membership Meeting", "membership-meeting"),
            generated_event(ymd(2024, 3, 29), "Fish Fry", "fish-fry"),
        ];

        let (merged, overrides) = merge_with_feed(generated.clone(), &feed);

        assert_eq!(merged.len(), 3);
        assert!(overrides.is_empty());
        for event in &generated {
            assert!(merged.contains(event));
        }
    }

    #[test]
    fn two_rules_on_overridden_date_last_title_wins() {
        let date = ymd(2024, 4, 11);
        let feed = vec![feed_event(date, "Hall Closed - Private Event")];
        let generated = vec![
            generated_event(date, "Membership Meeting", "membership-meeting"),
            generated_event(date, "Auxiliary Meeting", "auxiliary-meeting"),
        ];

        let (merged, overrides) = merge_with_feed(generated, &feed);

        assert_eq!(merged.len(), 1);
        assert_eq!(overrides.len(), 1);
        assert_eq!(
            overrides.get(&date).map(String::as_str),
            Some("Auxiliary Meeting")
        );
    }

    #[test]
    fn duplicate_feed_dates_are_all_kept() {
        let date = ymd(2024, 3, 14);
        let feed = vec![
            feed_event(date, "Board Meeting"),
            feed_event(date, "Color Guard Practice"),
        ];
        let generated = vec![generated_event(
            date,
            "Membership Meeting",
            "membership-meeting",
        )];

        let (merged, overrides) = merge_with_feed(generated, &feed);

        // Both feed rows survive as delivered; the generated occurrence
        // is dropped once and recorded once
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|e| !e.is_special_event));
        assert_eq!(
            overrides.get(&date).map(String::as_str),
            Some("Membership Meeting")
        );
    }

    #[test]
    fn empty_feed_keeps_everything_generated() {
        let generated = vec![
            generated_event(ymd(2025, 1, 9), "Membership Meeting", "membership-meeting"),
            generated_event(ymd(2025, 1, 31), "Fish Fry", "fish-fry"),
        ];

        let (merged, overrides) = merge_with_feed(generated.clone(), &[]);

        assert_eq!(merged, generated);
        assert!(overrides.is_empty());
    }

    #[test]
    fn feed_only_dates_pass_through() {
        let feed = vec![
            feed_event(ymd(2024, 5, 27), "Memorial Day Ceremony"),
            feed_event(ymd(2024, 7, 4), "Independence Day Cookout"),
        ];

        let (merged, overrides) = merge_with_feed(Vec::new(), &feed);

        assert_eq!(merged, feed);
        assert!(overrides.is_empty());
    }
}
