use jobtrail_domain::{Opportunity, StatusChange, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityDTO {
    pub id: ID,
    pub company: String,
    pub position: String,
    /// The status as stored
    pub status: String,
    /// The status as it is recognized, e.g. `Phone Screen` for `phone_screen`
    pub stage: String,
    pub applied_date: Option<String>,
    pub notes: Option<String>,
    pub status_history: Vec<StatusChange>,
}

impl OpportunityDTO {
    pub fn new(opportunity: Opportunity) -> Self {
        Self {
            stage: opportunity.status().to_string(),
            id: opportunity.id,
            company: opportunity.company,
            position: opportunity.position,
            status: opportunity.status,
            applied_date: opportunity.applied_date,
            notes: opportunity.notes,
            status_history: opportunity.status_history,
        }
    }
}
