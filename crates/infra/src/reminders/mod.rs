mod dispatcher;
mod scheduler;

pub use dispatcher::{NotificationDispatcher, ACTIVE_NOTIFICATION_WINDOW, IN_APP_QUEUE_LIMIT};
pub use scheduler::{ArmedReminder, ReminderScheduler};
