mod base;
mod event;
mod notification;
mod opportunity;
mod status;

use event::EventClient;
use notification::NotificationClient;
use opportunity::OpportunityClient;
use status::StatusClient;
use std::sync::Arc;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse, TextResponse};

pub use event::UpsertEventInput;
pub use opportunity::UpsertOpportunityInput;

pub use jobtrail_api_structs::dtos::*;
pub use jobtrail_domain::{
    ChannelOutcome, DeliveryReport, NotificationPreferences, PermissionState, StatusChange,
    TimelineEventKind, ID,
};

/// JobTrail Server SDK
///
/// The SDK contains methods for interacting with the JobTrail reminders
/// server API.
#[derive(Clone)]
pub struct JobTrailSDK {
    pub event: EventClient,
    pub notification: NotificationClient,
    pub opportunity: OpportunityClient,
    pub status: StatusClient,
}

impl JobTrailSDK {
    /// `address` is the base url of the server, e.g. `http://localhost:5000`
    pub fn new<T: Into<String>>(address: T) -> Self {
        let base = Arc::new(BaseClient::new(format!("{}/api/v1", address.into())));
        let event = EventClient::new(base.clone());
        let notification = NotificationClient::new(base.clone());
        let opportunity = OpportunityClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            event,
            notification,
            opportunity,
            status,
        }
    }
}
