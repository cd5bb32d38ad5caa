use crate::{APIResponse, BaseClient, TextResponse, ID};
use jobtrail_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct EventClient {
    base: Arc<BaseClient>,
}

pub type UpsertEventInput = upsert_event::RequestBody;

impl EventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self) -> APIResponse<get_events::APIResponse> {
        self.base.get("events".into(), StatusCode::OK).await
    }

    pub async fn upsert(
        &self,
        event_id: &ID,
        input: UpsertEventInput,
    ) -> APIResponse<upsert_event::APIResponse> {
        self.base
            .put(input, format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, event_id: &ID) -> APIResponse<delete_event::APIResponse> {
        self.base
            .delete(format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn upcoming(&self) -> APIResponse<get_upcoming_events::APIResponse> {
        self.base.get("events/upcoming".into(), StatusCode::OK).await
    }

    /// The iCalendar document of the event
    pub async fn export_ics(&self, event_id: &ID) -> APIResponse<TextResponse> {
        self.base
            .get_text(format!("events/{}/ics", event_id), StatusCode::OK)
            .await
    }

    pub async fn color(&self, event_id: &ID) -> APIResponse<get_event_color::APIResponse> {
        self.base
            .get(format!("events/{}/color", event_id), StatusCode::OK)
            .await
    }
}
