mod inmemory;

pub use inmemory::InMemoryNotificationCenter;
use jobtrail_domain::{Notification, PermissionState};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationHostError {
    #[error("Notifications are not supported by the host")]
    Unsupported,
    #[error("The host failed to show the notification. Error message: `{0}`")]
    Backend(String),
}

/// Capability of the host environment to show notifications outside of
/// the application, e.g. the browser or the operating system.
pub trait INotificationHost: Send + Sync {
    fn is_supported(&self) -> bool;
    /// Never cached by callers, the user may change it at any time
    fn permission(&self) -> PermissionState;
    /// Asks the user for permission. A denied permission stays denied.
    fn request_permission(&self) -> PermissionState;
    /// Returns whether the notification was shown
    fn show(&self, notification: &Notification) -> Result<bool, NotificationHostError>;
}
