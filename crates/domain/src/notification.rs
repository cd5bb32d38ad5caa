use crate::shared::entity::ID;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Lead times offered by the settings screen, in minutes
pub const REMINDER_TIME_OPTIONS: [i64; 7] = [5, 10, 15, 30, 60, 120, 1440];
pub const MAX_REMINDER_TIME_MINUTES: i64 = 60 * 24;
pub const DEFAULT_REMINDER_TIME_MINUTES: i64 = 30;

/// Session scoped notification settings. They are replaced as a whole
/// whenever the user saves them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    /// Master switch for every channel
    pub enabled: bool,
    pub browser_notifications: bool,
    pub in_app_notifications: bool,
    /// Stored for the settings screen, email is never sent by this service
    pub email_notifications: bool,
    /// Minutes before an event's start at which to remind
    pub default_reminder_time: i64,
}

impl NotificationPreferences {
    pub fn with_reminder_time(minutes: i64) -> Self {
        Self {
            default_reminder_time: minutes,
            ..Default::default()
        }
    }

    // Any lead time up to a day is accepted, the options above are only
    // what the settings screen offers.
    pub fn is_valid(&self) -> bool {
        self.default_reminder_time >= 0 && self.default_reminder_time <= MAX_REMINDER_TIME_MINUTES
    }

    pub fn lead_time(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.default_reminder_time.max(0))
    }
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            enabled: true,
            browser_notifications: true,
            in_app_notifications: true,
            email_notifications: false,
            default_reminder_time: DEFAULT_REMINDER_TIME_MINUTES,
        }
    }
}

/// Permission the host environment grants for showing notifications
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Granted,
    Denied,
    /// The user has not been asked yet
    Default,
}

impl Display for PermissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self {
            Self::Granted => "granted",
            Self::Denied => "denied",
            Self::Default => "default",
        };
        write!(f, "{}", state)
    }
}

impl FromStr for PermissionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "granted" => Ok(Self::Granted),
            "denied" => Ok(Self::Denied),
            "default" | "prompt" => Ok(Self::Default),
            other => Err(format!("Unknown permission state: {}", other)),
        }
    }
}

/// Message handed to the host notification channel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub body: String,
    /// The id of the `Event`, hosts show at most one notification per tag
    pub tag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationAction {
    pub label: String,
    pub event_id: ID,
}

/// Toast shown inside the application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InAppNotification {
    pub id: ID,
    pub event_id: ID,
    pub title: String,
    pub body: String,
    pub action: NotificationAction,
    pub created_ts: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ChannelOutcome {
    Delivered,
    /// Turned off in the `NotificationPreferences`
    Disabled,
    Unsupported,
    PermissionDenied,
    Failed,
}

/// Outcome of one reminder delivery, per channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReport {
    pub host: ChannelOutcome,
    pub in_app: ChannelOutcome,
}

impl DeliveryReport {
    pub fn delivered(&self) -> bool {
        self.host == ChannelOutcome::Delivered || self.in_app == ChannelOutcome::Delivered
    }
}
