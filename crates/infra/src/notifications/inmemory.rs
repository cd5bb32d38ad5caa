use super::{INotificationHost, NotificationHostError};
use jobtrail_domain::{Notification, PermissionState};
use std::sync::{Mutex, RwLock};
use tracing::info;

/// Notification host that keeps the notifications it showed until the UI
/// collects them. Showing a notification with a tag that is still
/// uncollected replaces the old one, like browsers do.
pub struct InMemoryNotificationCenter {
    supported: bool,
    permission: RwLock<PermissionState>,
    shown: Mutex<Vec<Notification>>,
}

impl InMemoryNotificationCenter {
    pub fn new(supported: bool, permission: PermissionState) -> Self {
        Self {
            supported,
            permission: RwLock::new(permission),
            shown: Mutex::new(Vec::new()),
        }
    }

    /// Permission changes made by the user outside of the application
    pub fn set_permission(&self, permission: PermissionState) {
        *self.permission.write().unwrap_or_else(|e| e.into_inner()) = permission;
    }

    pub fn shown(&self) -> Vec<Notification> {
        self.shown.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Takes every shown notification, oldest first
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.shown.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

impl INotificationHost for InMemoryNotificationCenter {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn permission(&self) -> PermissionState {
        if !self.supported {
            return PermissionState::Denied;
        }
        *self.permission.read().unwrap_or_else(|e| e.into_inner())
    }

    fn request_permission(&self) -> PermissionState {
        if !self.supported {
            return PermissionState::Denied;
        }
        let mut permission = self.permission.write().unwrap_or_else(|e| e.into_inner());
        if *permission == PermissionState::Default {
            *permission = PermissionState::Granted;
        }
        *permission
    }

    fn show(&self, notification: &Notification) -> Result<bool, NotificationHostError> {
        if !self.supported {
            return Err(NotificationHostError::Unsupported);
        }
        if self.permission() != PermissionState::Granted {
            return Ok(false);
        }

        let mut shown = self.shown.lock().unwrap_or_else(|e| e.into_inner());
        shown.retain(|n| n.tag != notification.tag);
        shown.push(notification.clone());
        info!(tag = %notification.tag, "Showing host notification: {}", notification.title);
        Ok(true)
    }
}
