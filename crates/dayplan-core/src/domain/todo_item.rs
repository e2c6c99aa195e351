//! ToDoItem domain entity
//!
//! This module defines the to-do item record, its priority, and the
//! schedule status derived from the item's date window.
//!
//! Both `start_date` and `end_date` are stored and compared as
//! fixed-format local-time strings (`"yyyy-MM-dd HH:mm"`), never as
//! numeric timestamps. All date arithmetic goes through that format;
//! a string that fails to parse makes the item count as not started.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed date format used for `start_date` and `end_date`
pub const ITEM_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Priority of a to-do item
///
/// Persisted as its lowercase name in both the relational store and
/// the document mirror. Unknown stored values decode to `Low`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// Returns the priority name as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Decodes a stored priority name, falling back to `Low`
    pub fn from_stored(s: &str) -> Self {
        match s {
            "medium" => Priority::Medium,
            "high" => Priority::High,
            _ => Priority::Low,
        }
    }

    /// Human-readable label for list output
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Schedule status derived from an item's date window
///
/// Never persisted; recomputed from the current time whenever needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    NotStarted,
    InProgress,
    Done,
}

impl Status {
    /// Human-readable label for list output
    pub fn label(&self) -> &'static str {
        match self {
            Status::NotStarted => "Not yet started",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }

    /// Sort rank for list views: in-progress first, done last
    pub fn list_rank(&self) -> u8 {
        match self {
            Status::InProgress => 0,
            Status::NotStarted => 1,
            Status::Done => 2,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A dated to-do item belonging to one user
///
/// Plain data record; there is no update-in-place at the storage layer
/// other than a full-row replace keyed by `id`. Serialized to the
/// document mirror with camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToDoItem {
    /// Unique identifier (UUID string)
    pub id: String,
    pub title: String,
    pub description: String,
    /// Start of the scheduled window, `"yyyy-MM-dd HH:mm"` local time
    pub start_date: String,
    /// End of the scheduled window, same format
    pub end_date: String,
    /// Owning user's id
    pub user_id: String,
    pub priority: Priority,
}

impl ToDoItem {
    /// Creates a new item with a fresh UUID
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        user_id: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            user_id: user_id.into(),
            priority,
        }
    }

    /// Derives the schedule status relative to `now`
    ///
    /// Returns `NotStarted` when either date string fails to parse.
    pub fn status_at(&self, now: NaiveDateTime) -> Status {
        let start = NaiveDateTime::parse_from_str(&self.start_date, ITEM_DATE_FORMAT);
        let end = NaiveDateTime::parse_from_str(&self.end_date, ITEM_DATE_FORMAT);

        match (start, end) {
            (Ok(start), Ok(end)) => {
                if now < start {
                    Status::NotStarted
                } else if now <= end {
                    Status::InProgress
                } else {
                    Status::Done
                }
            }
            _ => Status::NotStarted,
        }
    }

    /// Derives the schedule status relative to the local wall clock
    pub fn status(&self) -> Status {
        self.status_at(Local::now().naive_local())
    }
}

/// Parses a user-supplied date string against the fixed item format
///
/// Storage never validates dates (malformed strings simply derive
/// `NotStarted`); this is for input surfaces that want to reject bad
/// dates before an item is created.
pub fn parse_item_date(s: &str) -> Result<NaiveDateTime, crate::domain::DomainError> {
    NaiveDateTime::parse_from_str(s, ITEM_DATE_FORMAT)
        .map_err(|_| crate::domain::DomainError::InvalidDate(s.to_string()))
}

/// Sorts items for the list view: status rank (in-progress, not
/// started, done), then ascending `start_date` string within a rank.
///
/// Status is evaluated once against `now` so the ordering is stable
/// within a single render.
pub fn sort_for_list(items: &mut [ToDoItem], now: NaiveDateTime) {
    items.sort_by(|a, b| {
        let rank_a = a.status_at(now).list_rank();
        let rank_b = b.status_at(now).list_rank();
        rank_a
            .cmp(&rank_b)
            .then_with(|| a.start_date.cmp(&b.start_date))
    });
}
