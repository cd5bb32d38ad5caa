//! Lifecycle view of an `Opportunity`.
//!
//! The store only keeps the current status and the date the application
//! was sent, so unless a genuine `status_history` is present the markers
//! are synthesized at fixed offsets from the applied date. The offsets are
//! an approximation of when things happened, not a record of it.

use crate::date::parse_timestamp;
use crate::opportunity::{Opportunity, OpportunityStatus};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const NOTES_OFFSET_DAYS: i64 = 1;
pub const STATUS_CHANGE_OFFSET_DAYS: i64 = 3;
pub const INTERVIEW_OFFSET_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TimelineEventKind {
    Created,
    StatusChange,
    Interview,
    Note,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub kind: TimelineEventKind,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    /// False when the timestamp comes from the offset heuristic
    pub exact: bool,
}

impl TimelineEvent {
    fn new(
        kind: TimelineEventKind,
        title: impl Into<String>,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
        exact: bool,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            timestamp,
            exact,
        }
    }
}

fn created_marker(opportunity: &Opportunity, applied: DateTime<Utc>, exact: bool) -> TimelineEvent {
    let description = match (opportunity.position.trim(), opportunity.company.trim()) {
        ("", "") => "Application submitted".to_string(),
        (position, "") => format!("Applied for {}", position),
        ("", company) => format!("Applied at {}", company),
        (position, company) => format!("Applied for {} at {}", position, company),
    };
    TimelineEvent::new(
        TimelineEventKind::Created,
        "Application created",
        description,
        applied,
        exact,
    )
}

fn interview_marker(status: &OpportunityStatus, at: DateTime<Utc>, exact: bool) -> Option<TimelineEvent> {
    let label = status.interview_label()?;
    Some(TimelineEvent::new(
        TimelineEventKind::Interview,
        label,
        format!("{} stage reached", label),
        at,
        exact,
    ))
}

fn history_markers(opportunity: &Opportunity) -> Vec<TimelineEvent> {
    let mut markers = Vec::new();
    let mut interview_added = false;
    for change in &opportunity.status_history {
        let at = match parse_timestamp(&change.changed_at) {
            Some(at) => at,
            None => continue,
        };
        let status = OpportunityStatus::parse(&change.status);
        markers.push(TimelineEvent::new(
            TimelineEventKind::StatusChange,
            "Status changed",
            format!("Status changed to {}", status),
            at,
            true,
        ));
        if !interview_added {
            if let Some(marker) = interview_marker(&status, at, true) {
                markers.push(marker);
                interview_added = true;
            }
        }
    }
    markers
}

/// `None` when the offset leaves the representable date range, such
/// markers are left out of the timeline.
fn offset_days(applied: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    applied.checked_add_signed(Duration::days(days))
}

fn heuristic_markers(opportunity: &Opportunity, applied: DateTime<Utc>) -> Vec<TimelineEvent> {
    let status = opportunity.status();
    let mut markers = Vec::new();
    if !status.is_initial_stage() {
        if let Some(at) = offset_days(applied, STATUS_CHANGE_OFFSET_DAYS) {
            markers.push(TimelineEvent::new(
                TimelineEventKind::StatusChange,
                "Status changed",
                format!("Status changed to {}", status),
                at,
                false,
            ));
        }
    }
    if let Some(marker) = offset_days(applied, INTERVIEW_OFFSET_DAYS)
        .and_then(|at| interview_marker(&status, at, false))
    {
        markers.push(marker);
    }
    markers
}

/// Ordered lifecycle markers of `opportunity`, newest first.
/// `now` stands in for a missing or malformed applied date.
pub fn reconstruct(opportunity: &Opportunity, now: DateTime<Utc>) -> Vec<TimelineEvent> {
    let applied_date = opportunity.applied_date.as_deref().and_then(parse_timestamp);
    let applied = applied_date.unwrap_or(now);

    let mut timeline = vec![created_marker(opportunity, applied, applied_date.is_some())];

    let history = history_markers(opportunity);
    if history.is_empty() {
        timeline.extend(heuristic_markers(opportunity, applied));
    } else {
        timeline.extend(history);
    }

    if let Some(at) = offset_days(applied, NOTES_OFFSET_DAYS).filter(|_| opportunity.has_notes()) {
        timeline.push(TimelineEvent::new(
            TimelineEventKind::Note,
            "Notes added",
            opportunity.notes.clone().unwrap_or_default().trim().to_string(),
            at,
            false,
        ));
    }

    // Stable, so markers sharing a timestamp keep their insertion order
    timeline.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    timeline
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::opportunity::StatusChange;
    use chrono::TimeZone;

    fn applied() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    fn opportunity(status: &str, notes: Option<&str>) -> Opportunity {
        Opportunity {
            company: "Acme".into(),
            position: "Backend Engineer".into(),
            status: status.into(),
            applied_date: Some("2025-03-01T09:00:00Z".into()),
            notes: notes.map(String::from),
            ..Default::default()
        }
    }

    fn kinds(timeline: &[TimelineEvent]) -> Vec<TimelineEventKind> {
        timeline.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn orders_interview_stage_markers_newest_first() {
        let timeline = reconstruct(
            &opportunity("Technical Assessment", Some("Take-home due friday")),
            Utc::now(),
        );
        assert_eq!(
            kinds(&timeline),
            vec![
                TimelineEventKind::Interview,
                TimelineEventKind::StatusChange,
                TimelineEventKind::Note,
                TimelineEventKind::Created,
            ]
        );
        assert_eq!(timeline[0].timestamp, applied() + Duration::days(7));
        assert_eq!(timeline[0].title, "Technical assessment");
        assert_eq!(timeline[1].timestamp, applied() + Duration::days(3));
        assert_eq!(timeline[2].timestamp, applied() + Duration::days(1));
        assert_eq!(timeline[3].timestamp, applied());
        assert!(timeline[3].exact);
        assert!(!timeline[0].exact);
    }

    #[test]
    fn initial_stage_only_has_creation_marker() {
        let timeline = reconstruct(&opportunity("Applied", None), Utc::now());
        assert_eq!(kinds(&timeline), vec![TimelineEventKind::Created]);
        assert_eq!(timeline[0].description, "Applied for Backend Engineer at Acme");

        let timeline = reconstruct(&opportunity("applied", Some("   ")), Utc::now());
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn non_interview_status_change() {
        let timeline = reconstruct(&opportunity("Rejected", None), Utc::now());
        assert_eq!(
            kinds(&timeline),
            vec![TimelineEventKind::StatusChange, TimelineEventKind::Created]
        );
        assert_eq!(timeline[0].description, "Status changed to Rejected");
    }

    #[test]
    fn missing_applied_date_uses_now() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let mut opp = opportunity("Final Interview", None);
        opp.applied_date = None;
        let timeline = reconstruct(&opp, now);
        assert_eq!(timeline.last().map(|e| e.timestamp), Some(now));
        assert_eq!(timeline[0].timestamp, now + Duration::days(7));
        assert!(!timeline.last().map(|e| e.exact).unwrap_or(true));
    }

    #[test]
    fn drops_markers_past_the_end_of_time() {
        let mut opp = opportunity("Final Interview", Some("Ask about the team"));
        opp.applied_date = Some(DateTime::<Utc>::MAX_UTC.timestamp_millis().to_string());
        let timeline = reconstruct(&opp, Utc::now());
        assert_eq!(kinds(&timeline), vec![TimelineEventKind::Created]);
        assert!(timeline[0].exact);
    }

    #[test]
    fn prefers_genuine_history() {
        let mut opp = opportunity("Final Interview", None);
        opp.status_history = vec![
            StatusChange {
                status: "Phone Screen".into(),
                changed_at: "2025-03-05T10:00:00Z".into(),
            },
            StatusChange {
                status: "Final Interview".into(),
                changed_at: "2025-03-20T10:00:00Z".into(),
            },
        ];
        let timeline = reconstruct(&opp, Utc::now());
        assert_eq!(
            kinds(&timeline),
            vec![
                TimelineEventKind::StatusChange,
                TimelineEventKind::StatusChange,
                TimelineEventKind::Interview,
                TimelineEventKind::Created,
            ]
        );
        assert!(timeline.iter().all(|e| e.exact));
        assert_eq!(timeline[2].title, "Phone screen");
        assert_eq!(
            timeline[2].timestamp,
            Utc.with_ymd_and_hms(2025, 3, 5, 10, 0, 0).unwrap()
        );
    }
}
