use jobtrail_domain::ID;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledReminderDTO {
    pub event_id: ID,
    pub fire_ts: i64,
}
