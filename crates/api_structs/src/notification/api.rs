use crate::dtos::ScheduledReminderDTO;
use jobtrail_domain::{
    DeliveryReport, InAppNotification, Notification, NotificationPreferences, PermissionState, ID,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPermissionResponse {
    pub supported: bool,
    pub permission: PermissionState,
}

pub mod get_notification_preferences {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub preferences: NotificationPreferences,
    }
}

pub mod update_notification_preferences {
    use super::*;

    /// Replaces the stored preferences as a whole
    pub type RequestBody = NotificationPreferences;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub preferences: NotificationPreferences,
        /// Number of reminders armed with the new preferences
        pub armed_reminders: usize,
    }
}

pub mod get_scheduled_reminders {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        /// Soonest first
        pub reminders: Vec<ScheduledReminderDTO>,
    }
}

pub mod send_test_notification {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: String,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub event_id: ID,
        pub report: DeliveryReport,
    }
}

pub mod get_in_app_notifications {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        /// Toasts which were not collected before, oldest first
        pub notifications: Vec<InAppNotification>,
        /// Events notified within the last few seconds
        pub active_event_ids: Vec<ID>,
    }
}

pub mod get_host_notifications {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub notifications: Vec<Notification>,
    }
}

pub mod get_notification_permission {
    use super::*;

    pub type APIResponse = NotificationPermissionResponse;
}

pub mod request_notification_permission {
    use super::*;

    pub type APIResponse = NotificationPermissionResponse;
}
