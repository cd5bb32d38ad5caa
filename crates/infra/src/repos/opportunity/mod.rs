mod inmemory;

pub use inmemory::InMemoryOpportunityRepo;
use jobtrail_domain::{Opportunity, ID};

#[async_trait::async_trait]
pub trait IOpportunityRepo: Send + Sync {
    /// Inserts the opportunity or replaces the stored one with the same id
    async fn save(&self, opportunity: &Opportunity) -> anyhow::Result<()>;
    async fn find(&self, opportunity_id: &ID) -> Option<Opportunity>;
    async fn delete(&self, opportunity_id: &ID) -> Option<Opportunity>;
}
