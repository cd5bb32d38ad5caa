use crate::date::{combine_date_time, parse_timestamp};
use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Length given to an `Event` which has no usable end time
pub const DEFAULT_EVENT_DURATION_MINUTES: i64 = 60;

/// A scheduled occurrence relevant to a job search, e.g. an interview or
/// an application deadline.
///
/// `Event`s are owned by the persistence layer. Everything in this crate
/// only works on read snapshots and never rejects a snapshot because of
/// malformed dates, it resolves them with the fallbacks below instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// A missing id is replaced by a generated one
    #[serde(default)]
    pub id: ID,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start: Option<String>,
    /// Used when `start` is missing or invalid
    #[serde(default)]
    pub date: Option<String>,
    /// Optional time of day for `date`
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub opportunity_id: Option<ID>,
}

impl Entity for Event {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Event {
    pub fn new(title: impl Into<String>, start: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            start: Some(start.to_rfc3339()),
            ..Default::default()
        }
    }

    /// `start` if it is a valid timestamp, otherwise `date` combined with
    /// `time`. `None` when neither resolves.
    pub fn resolve_start(&self) -> Option<DateTime<Utc>> {
        self.start
            .as_deref()
            .and_then(parse_timestamp)
            .or_else(|| {
                self.date
                    .as_deref()
                    .and_then(|date| combine_date_time(date, self.time.as_deref()))
            })
    }

    /// `end` if it is a valid timestamp, otherwise one hour after `start`.
    /// Starts too close to the end of the representable range end at `start`.
    pub fn resolve_end(&self, start: DateTime<Utc>) -> DateTime<Utc> {
        self.end
            .as_deref()
            .and_then(parse_timestamp)
            .or_else(|| start.checked_add_signed(Duration::minutes(DEFAULT_EVENT_DURATION_MINUTES)))
            .unwrap_or(start)
    }

    /// Free text describing the event. `description` wins over `notes`.
    pub fn details(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .or_else(|| self.notes.as_deref().filter(|n| !n.trim().is_empty()))
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.trim().is_empty())
    }

    /// Human readable label of the event type, `Event` when untyped
    pub fn type_label(&self) -> String {
        match self.event_type.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => {
                let mut chars = t.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => "Event".into(),
                }
            }
            _ => "Event".into(),
        }
    }

    /// Title with a fallback for events saved without one
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() {
            "Event"
        } else {
            title
        }
    }
}
