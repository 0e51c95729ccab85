//! Core types and logic for the Post 318 events backend.
//!
//! This crate provides:
//! - the recurrence engine that expands the post's standing schedule into
//!   dated occurrences (`recurrence`)
//! - the spreadsheet feed parser for one-off events (`feed`)
//! - the merge step combining both, with feed-wins override semantics (`merge`)

pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod feed;
pub mod merge;
pub mod recurrence;

pub use error::{Post318Error, Post318Result};
pub use event::CalendarEvent;
pub use merge::{OverrideMap, merge_with_feed};
pub use recurrence::{RecurrenceKind, RecurrenceRule, WeekOfMonth};
