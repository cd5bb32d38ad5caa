use super::IOpportunityRepo;
use crate::repos::shared::inmemory_repo::*;
use jobtrail_domain::{Opportunity, ID};

pub struct InMemoryOpportunityRepo {
    opportunities: std::sync::Mutex<Vec<Opportunity>>,
}

impl InMemoryOpportunityRepo {
    pub fn new() -> Self {
        Self {
            opportunities: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryOpportunityRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IOpportunityRepo for InMemoryOpportunityRepo {
    async fn save(&self, opportunity: &Opportunity) -> anyhow::Result<()> {
        upsert(opportunity, &self.opportunities);
        Ok(())
    }

    async fn find(&self, opportunity_id: &ID) -> Option<Opportunity> {
        find(opportunity_id, &self.opportunities)
    }

    async fn delete(&self, opportunity_id: &ID) -> Option<Opportunity> {
        delete(opportunity_id, &self.opportunities)
    }
}
