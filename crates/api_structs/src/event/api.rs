use crate::dtos::EventDTO;
use jobtrail_domain::{Event, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub event: EventDTO,
}

impl EventResponse {
    pub fn new(event: Event) -> Self {
        Self {
            event: EventDTO::new(event),
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    pub events: Vec<EventDTO>,
}

impl EventsResponse {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().map(EventDTO::new).collect(),
        }
    }
}

pub mod get_events {
    use super::*;

    pub type APIResponse = EventsResponse;
}

pub mod upsert_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: String,
    }

    /// Snapshot of the event as stored by the persistence layer. Dates are
    /// kept as given and resolved when they are used.
    #[derive(Serialize, Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub title: String,
        #[serde(default)]
        pub start: Option<String>,
        #[serde(default)]
        pub date: Option<String>,
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

    pub type APIResponse = EventResponse;
}

pub mod delete_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: String,
    }

    pub type APIResponse = EventResponse;
}

pub mod get_upcoming_events {
    use super::*;

    pub type APIResponse = EventsResponse;
}

pub mod export_event_ics {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: String,
    }
}

pub mod get_event_color {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: String,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub event_id: ID,
        pub color: String,
    }
}
