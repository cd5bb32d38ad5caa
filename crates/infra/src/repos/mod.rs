mod event;
mod notification_preferences;
mod opportunity;
mod shared;

pub use event::{IEventRepo, InMemoryEventRepo};
use jobtrail_domain::NotificationPreferences;
pub use notification_preferences::{
    INotificationPreferencesRepo, InMemoryNotificationPreferencesRepo,
};
pub use opportunity::{IOpportunityRepo, InMemoryOpportunityRepo};
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub events: Arc<dyn IEventRepo>,
    pub opportunities: Arc<dyn IOpportunityRepo>,
    pub notification_preferences: Arc<dyn INotificationPreferencesRepo>,
}

impl Repos {
    pub fn create_inmemory(default_preferences: NotificationPreferences) -> Self {
        Self {
            events: Arc::new(InMemoryEventRepo::new()),
            opportunities: Arc::new(InMemoryOpportunityRepo::new()),
            notification_preferences: Arc::new(InMemoryNotificationPreferencesRepo::new(
                default_preferences,
            )),
        }
    }
}
