use crate::dtos::OpportunityDTO;
use jobtrail_domain::{Opportunity, StatusChange, TimelineEvent, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityResponse {
    pub opportunity: OpportunityDTO,
}

impl OpportunityResponse {
    pub fn new(opportunity: Opportunity) -> Self {
        Self {
            opportunity: OpportunityDTO::new(opportunity),
        }
    }
}

pub mod upsert_opportunity {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub opportunity_id: String,
    }

    #[derive(Serialize, Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub company: String,
        #[serde(default)]
        pub position: String,
        #[serde(default)]
        pub status: String,
        #[serde(default)]
        pub applied_date: Option<String>,
        #[serde(default)]
        pub notes: Option<String>,
        #[serde(default)]
        pub status_history: Vec<StatusChange>,
    }

    pub type APIResponse = OpportunityResponse;
}

pub mod get_opportunity_timeline {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub opportunity_id: String,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub opportunity_id: ID,
        /// Newest first
        pub timeline: Vec<TimelineEvent>,
    }
}
