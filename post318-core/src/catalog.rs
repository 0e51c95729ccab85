//! The post's standing event schedule.
//!
//! Compiled-in rule catalog, built once at startup and passed explicitly
//! into the generator so tests can substitute synthetic catalogs.

use chrono::{Month, Weekday};

use crate::recurrence::{RecurrenceKind, RecurrenceRule, WeekOfMonth};

/// Post 318's regular schedule.
pub fn default_rules() -> Vec<RecurrenceRule> {
    vec![
        RecurrenceRule {
            id: "membership-meeting".to_string(),
            title: "Monthly Legion Membership Meeting".to_string(),
            time: "7:00 PM".to_string(),
            location: "Post 318 Hall".to_string(),
            description: Some("All members encouraged to attend.".to_string()),
            kind: RecurrenceKind::Monthly {
                weekday: Weekday::Thu,
                weeks: vec![WeekOfMonth::Nth(2)],
                months: None,
            },
        },
        RecurrenceRule {
            id: "sal-meeting".to_string(),
            title: "Sons of the American Legion Meeting".to_string(),
            time: "7:00 PM".to_string(),
            location: "Post 318 Hall".to_string(),
            description: None,
            kind: RecurrenceKind::Monthly {
                weekday: Weekday::Wed,
                weeks: vec![WeekOfMonth::Nth(1)],
                months: None,
            },
        },
        RecurrenceRule {
            id: "auxiliary-meeting".to_string(),
            title: "Auxiliary Unit Meeting".to_string(),
            time: "6:30 PM".to_string(),
            location: "Post 318 Hall".to_string(),
            description: None,
            kind: RecurrenceKind::Monthly {
                weekday: Weekday::Mon,
                weeks: vec![WeekOfMonth::Nth(1), WeekOfMonth::Nth(3)],
                months: None,
            },
        },
        RecurrenceRule {
            id: "fish-fry".to_string(),
            title: "Friday Fish Fry".to_string(),
            time: "5:00 PM - 7:30 PM".to_string(),
            location: "Post 318 Hall".to_string(),
            description: Some("Open to the public. Dine in or carry out.".to_string()),
            kind: RecurrenceKind::Monthly {
                weekday: Weekday::Fri,
                weeks: vec![WeekOfMonth::Last],
                // Lenten season only
                months: Some(vec![Month::February, Month::March, Month::April]),
            },
        },
        RecurrenceRule {
            id: "euchre-night".to_string(),
            title: "Euchre Night".to_string(),
            time: "6:30 PM".to_string(),
            location: "Post 318 Hall".to_string(),
            description: None,
            kind: RecurrenceKind::Weekly {
                weekday: Weekday::Tue,
            },
        },
    ]
}
