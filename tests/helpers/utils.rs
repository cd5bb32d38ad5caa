use chrono::{Duration, Utc};
use jobtrail_sdk::UpsertEventInput;

pub fn event_starting_in(title: &str, from_now: Duration) -> UpsertEventInput {
    UpsertEventInput {
        title: title.into(),
        start: Some((Utc::now() + from_now).to_rfc3339()),
        ..Default::default()
    }
}
