use jobtrail_domain::{date::to_millis, Event, ID};
use serde::{Deserialize, Serialize};

/// An `Event` with its start and end resolved to timestamps in millis.
/// `start_ts` is missing when the event has no valid start at all.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventDTO {
    pub id: ID,
    pub title: String,
    pub start_ts: Option<i64>,
    pub end_ts: Option<i64>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub opportunity_id: Option<ID>,
}

impl EventDTO {
    pub fn new(event: Event) -> Self {
        let start = event.resolve_start();
        Self {
            start_ts: start.as_ref().map(to_millis),
            end_ts: start.map(|start| to_millis(&event.resolve_end(start))),
            description: event.details().map(String::from),
            id: event.id,
            title: event.title,
            event_type: event.event_type,
            location: event.location,
            opportunity_id: event.opportunity_id,
        }
    }
}
