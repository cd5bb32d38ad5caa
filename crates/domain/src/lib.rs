pub mod color;
pub mod date;
mod event;
pub mod ical;
mod notification;
mod opportunity;
mod shared;
pub mod timeline;

pub use color::color_for;
pub use event::{Event, DEFAULT_EVENT_DURATION_MINUTES};
pub use notification::{
    ChannelOutcome, DeliveryReport, InAppNotification, Notification, NotificationAction, NotificationPreferences,
    PermissionState, DEFAULT_REMINDER_TIME_MINUTES, MAX_REMINDER_TIME_MINUTES,
    REMINDER_TIME_OPTIONS,
};
pub use opportunity::{Opportunity, OpportunityStatus, StatusChange};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use timeline::{TimelineEvent, TimelineEventKind};
