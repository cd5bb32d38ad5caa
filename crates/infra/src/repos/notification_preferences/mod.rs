mod inmemory;

pub use inmemory::InMemoryNotificationPreferencesRepo;
use jobtrail_domain::NotificationPreferences;

/// Settings storage of the `NotificationPreferences`. They are read on
/// every scheduling run and only ever replaced as a whole.
#[async_trait::async_trait]
pub trait INotificationPreferencesRepo: Send + Sync {
    async fn get(&self) -> NotificationPreferences;
    async fn save(&self, preferences: &NotificationPreferences) -> anyhow::Result<()>;
}
