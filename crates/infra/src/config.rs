use jobtrail_domain::{
    NotificationPreferences, PermissionState, DEFAULT_REMINDER_TIME_MINUTES,
    MAX_REMINDER_TIME_MINUTES,
};
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Lead time in minutes of the `NotificationPreferences` a new session
    /// starts with.
    pub default_reminder_time: i64,
    /// Whether the host environment can show notifications at all
    pub host_notifications_supported: bool,
    /// Permission state of the host notification channel at startup
    pub host_notification_permission: PermissionState,
}

fn env_or_default<T: FromStr + ToString>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => match value.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    name,
                    value,
                    default.to_string()
                );
                default
            }
        },
        Err(_) => default,
    }
}

impl Config {
    pub fn new() -> Self {
        let port = env_or_default("PORT", 5000usize);
        let reminder_time = env_or_default("DEFAULT_REMINDER_MINUTES", DEFAULT_REMINDER_TIME_MINUTES);
        let default_reminder_time = reminder_time.clamp(0, MAX_REMINDER_TIME_MINUTES);
        if default_reminder_time != reminder_time {
            warn!(
                "DEFAULT_REMINDER_MINUTES: {} is out of range, using: {}.",
                reminder_time, default_reminder_time
            );
        }

        Self {
            port,
            default_reminder_time,
            host_notifications_supported: env_or_default("HOST_NOTIFICATIONS_SUPPORTED", true),
            host_notification_permission: env_or_default(
                "HOST_NOTIFICATION_PERMISSION",
                PermissionState::Default,
            ),
        }
    }

    pub fn default_preferences(&self) -> NotificationPreferences {
        NotificationPreferences::with_reminder_time(self.default_reminder_time)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
