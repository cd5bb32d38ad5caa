mod config;
mod notifications;
mod reminders;
mod repos;
mod system;

pub use config::Config;
pub use notifications::{INotificationHost, InMemoryNotificationCenter, NotificationHostError};
pub use reminders::{
    ArmedReminder, NotificationDispatcher, ReminderScheduler, ACTIVE_NOTIFICATION_WINDOW,
    IN_APP_QUEUE_LIMIT,
};
pub use repos::{IEventRepo, INotificationPreferencesRepo, IOpportunityRepo, Repos};
use std::sync::Arc;
pub use system::{ISys, ITimer, ManualTimer, RealSys, StaticTimeSys, TimerHandle, TokioTimer};

#[derive(Clone)]
pub struct JobTrailContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    /// Host notification channel. Shown notifications are kept until the
    /// UI collects them.
    pub notification_center: Arc<InMemoryNotificationCenter>,
    pub reminders: Arc<ReminderScheduler>,
}

impl JobTrailContext {
    pub fn create(config: Config) -> Self {
        Self::create_with(config, Arc::new(RealSys {}), Arc::new(TokioTimer {}))
    }

    /// Context with the given clock and timer, used by tests to control time
    pub fn create_with(config: Config, sys: Arc<dyn ISys>, timer: Arc<dyn ITimer>) -> Self {
        let repos = Repos::create_inmemory(config.default_preferences());
        let notification_center = Arc::new(InMemoryNotificationCenter::new(
            config.host_notifications_supported,
            config.host_notification_permission,
        ));
        let dispatcher = Arc::new(NotificationDispatcher::new(
            notification_center.clone(),
            timer.clone(),
            sys.clone(),
        ));
        let reminders = Arc::new(ReminderScheduler::new(dispatcher, timer, sys.clone()));
        Self {
            repos,
            config,
            sys,
            notification_center,
            reminders,
        }
    }

    pub fn dispatcher(&self) -> &Arc<NotificationDispatcher> {
        self.reminders.dispatcher()
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> JobTrailContext {
    JobTrailContext::create(Config::new())
}
