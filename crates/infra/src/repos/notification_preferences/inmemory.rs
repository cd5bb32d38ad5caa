use super::INotificationPreferencesRepo;
use jobtrail_domain::NotificationPreferences;
use std::sync::RwLock;

pub struct InMemoryNotificationPreferencesRepo {
    preferences: RwLock<NotificationPreferences>,
}

impl InMemoryNotificationPreferencesRepo {
    pub fn new(initial: NotificationPreferences) -> Self {
        Self {
            preferences: RwLock::new(initial),
        }
    }
}

#[async_trait::async_trait]
impl INotificationPreferencesRepo for InMemoryNotificationPreferencesRepo {
    async fn get(&self) -> NotificationPreferences {
        self.preferences
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    async fn save(&self, preferences: &NotificationPreferences) -> anyhow::Result<()> {
        *self.preferences.write().unwrap_or_else(|e| e.into_inner()) = preferences.clone();
        Ok(())
    }
}
