use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use jobtrail_domain::{Event, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<Event>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryEventRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn save(&self, e: &Event) -> anyhow::Result<()> {
        upsert(e, &self.events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<Event> {
        find(event_id, &self.events)
    }

    async fn find_many(&self, event_ids: &[ID]) -> anyhow::Result<Vec<Event>> {
        let res = find_by(&self.events, |event| event_ids.contains(&event.id));
        Ok(res)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Event>> {
        Ok(find_all(&self.events))
    }

    async fn delete(&self, event_id: &ID) -> Option<Event> {
        delete(event_id, &self.events)
    }
}
