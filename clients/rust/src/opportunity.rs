use crate::{APIResponse, BaseClient, ID};
use jobtrail_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct OpportunityClient {
    base: Arc<BaseClient>,
}

pub type UpsertOpportunityInput = upsert_opportunity::RequestBody;

impl OpportunityClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn upsert(
        &self,
        opportunity_id: &ID,
        input: UpsertOpportunityInput,
    ) -> APIResponse<upsert_opportunity::APIResponse> {
        self.base
            .put(
                input,
                format!("opportunities/{}", opportunity_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn timeline(
        &self,
        opportunity_id: &ID,
    ) -> APIResponse<get_opportunity_timeline::APIResponse> {
        self.base
            .get(
                format!("opportunities/{}/timeline", opportunity_id),
                StatusCode::OK,
            )
            .await
    }
}
