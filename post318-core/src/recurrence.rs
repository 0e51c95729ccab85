//! Recurring-event expansion.
//!
//! Expands the post's standing schedule (2nd-Thursday meetings, last-Friday
//! fish fries, weekly euchre) into dated occurrences over a window of
//! calendar months. Pure date arithmetic over chrono types; merging with
//! the spreadsheet feed lives in `merge`.

use chrono::{Datelike, Days, Month, NaiveDate, Weekday};

use crate::error::{Post318Error, Post318Result};
use crate::event::CalendarEvent;

/// Which occurrence of a weekday within a month a monthly rule targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekOfMonth {
    /// The nth occurrence, 1 through 5. A 5th occurrence does not exist in
    /// every month; the rule then skips that month.
    Nth(u8),
    /// The final occurrence, scanning back from the end of the month.
    Last,
}

impl WeekOfMonth {
    /// Build from a raw ordinal: 1..=5, or -1 for the last occurrence.
    /// Anything else is a configuration error, rejected here rather than
    /// at generation time.
    pub fn from_ordinal(ordinal: i8) -> Post318Result<Self> {
        match ordinal {
            -1 => Ok(WeekOfMonth::Last),
            1..=5 => Ok(WeekOfMonth::Nth(ordinal as u8)),
            other => Err(Post318Error::InvalidRule(format!(
                "week-of-month ordinal must be 1..=5 or -1, got {other}"
            ))),
        }
    }

    fn label(self) -> String {
        match self {
            WeekOfMonth::Nth(1) => "1st".to_string(),
            WeekOfMonth::Nth(2) => "2nd".to_string(),
            WeekOfMonth::Nth(3) => "3rd".to_string(),
            WeekOfMonth::Nth(n) => format!("{n}th"),
            WeekOfMonth::Last => "Last".to_string(),
        }
    }
}

/// How an event repeats.
#[derive(Debug, Clone, PartialEq)]
pub enum RecurrenceKind {
    /// On given ordinal weeks of the month (e.g. 2nd Thursday), optionally
    /// restricted to a subset of calendar months.
    Monthly {
        weekday: Weekday,
        weeks: Vec<WeekOfMonth>,
        months: Option<Vec<Month>>,
    },
    /// Every week on the given weekday.
    Weekly { weekday: Weekday },
}

/// An immutable definition of a repeating post event.
///
/// The catalog of these is static configuration, built once at startup and
/// passed explicitly into the generator (see `catalog::default_rules`).
#[derive(Debug, Clone, PartialEq)]
pub struct RecurrenceRule {
    pub id: String,
    pub title: String,
    pub time: String,
    pub location: String,
    pub description: Option<String>,
    pub kind: RecurrenceKind,
}

impl RecurrenceRule {
    /// Human-readable schedule text, e.g. "2nd Thursday of each month",
    /// "1st, 3rd Monday of each month", or "Every Tuesday".
    pub fn describe(&self) -> String {
        match &self.kind {
            RecurrenceKind::Monthly { weekday, weeks, .. } => {
                let ordinals: Vec<String> = weeks.iter().map(|w| w.label()).collect();
                format!(
                    "{} {} of each month",
                    ordinals.join(", "),
                    weekday_name(*weekday)
                )
            }
            RecurrenceKind::Weekly { weekday } => {
                format!("Every {}", weekday_name(*weekday))
            }
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
        .day()
}

/// Resolve an ordinal weekday within a month, e.g. the 2nd Thursday of
/// March 2024. Returns None when the requested ordinal does not exist
/// that month (a "5th Friday" in a four-Friday month). `Last` always
/// resolves, since every weekday occurs at least four times in any month.
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    week: WeekOfMonth,
) -> Option<NaiveDate> {
    match week {
        WeekOfMonth::Nth(n) => NaiveDate::from_weekday_of_month_opt(year, month, weekday, n),
        WeekOfMonth::Last => {
            let last = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))?;
            let back = (last.weekday().num_days_from_sunday() + 7
                - weekday.num_days_from_sunday())
                % 7;
            last.checked_sub_days(Days::new(back.into()))
        }
    }
}

/// Expand one rule into its occurrences for a single month (1-based).
///
/// A monthly rule with several ordinals can legitimately produce several
/// occurrences in the same month; a weekly rule produces four or five.
pub fn generate_occurrences(rule: &RecurrenceRule, year: i32, month: u32) -> Vec<CalendarEvent> {
    match &rule.kind {
        RecurrenceKind::Monthly {
            weekday,
            weeks,
            months,
        } => {
            if let Some(months) = months {
                if !months.iter().any(|m| m.number_from_month() == month) {
                    return Vec::new();
                }
            }
            weeks
                .iter()
                .filter_map(|&week| nth_weekday_of_month(year, month, *weekday, week))
                .map(|date| occurrence(rule, date))
                .collect()
        }
        RecurrenceKind::Weekly { weekday } => (1..=days_in_month(year, month))
            .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
            .filter(|date| date.weekday() == *weekday)
            .map(|date| occurrence(rule, date))
            .collect(),
    }
}

/// Expand every rule over `month_count` consecutive months starting at
/// (start_year, start_month), rolling over year boundaries. Output is
/// unsorted; callers sort by date before display.
pub fn generate_window(
    rules: &[RecurrenceRule],
    start_year: i32,
    start_month: u32,
    month_count: u32,
) -> Vec<CalendarEvent> {
    let mut out = Vec::new();
    let (mut year, mut month) = (start_year, start_month);
    for _ in 0..month_count {
        for rule in rules {
            out.extend(generate_occurrences(rule, year, month));
        }
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    out
}

fn occurrence(rule: &RecurrenceRule, date: NaiveDate) -> CalendarEvent {
    CalendarEvent {
        date,
        title: rule.title.clone(),
        time: Some(rule.time.clone()),
        location: Some(rule.location.clone()),
        description: rule.description.clone(),
        is_special_event: true,
        original_event_id: Some(rule.id.clone()),
    }
}
