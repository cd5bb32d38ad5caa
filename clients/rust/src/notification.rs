use crate::{APIResponse, BaseClient, NotificationPreferences, ID};
use jobtrail_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct NotificationClient {
    base: Arc<BaseClient>,
}

impl NotificationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_preferences(&self) -> APIResponse<get_notification_preferences::APIResponse> {
        self.base
            .get("notifications/preferences".into(), StatusCode::OK)
            .await
    }

    pub async fn update_preferences(
        &self,
        preferences: NotificationPreferences,
    ) -> APIResponse<update_notification_preferences::APIResponse> {
        self.base
            .put(
                preferences,
                "notifications/preferences".into(),
                StatusCode::OK,
            )
            .await
    }

    pub async fn scheduled_reminders(&self) -> APIResponse<get_scheduled_reminders::APIResponse> {
        self.base
            .get("notifications/reminders".into(), StatusCode::OK)
            .await
    }

    pub async fn send_test(&self, event_id: &ID) -> APIResponse<send_test_notification::APIResponse> {
        self.base
            .post(format!("notifications/test/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn in_app(&self) -> APIResponse<get_in_app_notifications::APIResponse> {
        self.base
            .get("notifications/in-app".into(), StatusCode::OK)
            .await
    }

    pub async fn host(&self) -> APIResponse<get_host_notifications::APIResponse> {
        self.base
            .get("notifications/host".into(), StatusCode::OK)
            .await
    }

    pub async fn permission(&self) -> APIResponse<get_notification_permission::APIResponse> {
        self.base
            .get("notifications/permission".into(), StatusCode::OK)
            .await
    }

    pub async fn request_permission(
        &self,
    ) -> APIResponse<request_notification_permission::APIResponse> {
        self.base
            .post("notifications/permission".into(), StatusCode::OK)
            .await
    }
}
