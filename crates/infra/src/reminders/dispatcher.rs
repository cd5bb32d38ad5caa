use crate::notifications::{INotificationHost, NotificationHostError};
use crate::system::{ISys, ITimer, TimerHandle};
use chrono::{DateTime, Utc};
use jobtrail_domain::{
    ChannelOutcome, DeliveryReport, Event, InAppNotification, Notification, NotificationAction,
    NotificationPreferences, PermissionState, ID,
};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, error, info};

/// How long a notified event stays highlighted in the UI. This has no
/// influence on whether a reminder is delivered again.
pub const ACTIVE_NOTIFICATION_WINDOW: Duration = Duration::from_secs(10);
/// Uncollected toasts beyond this are dropped, oldest first
pub const IN_APP_QUEUE_LIMIT: usize = 50;

struct ActiveNotification {
    generation: u64,
    clear_timer: Box<dyn TimerHandle>,
}

type ActiveNotifications = Arc<Mutex<HashMap<ID, ActiveNotification>>>;

fn lock_active(active: &ActiveNotifications) -> MutexGuard<'_, HashMap<ID, ActiveNotification>> {
    active.lock().unwrap_or_else(|e| e.into_inner())
}

fn describe_time_until(start: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let start = match start {
        Some(start) => start,
        None => return "Starts soon".into(),
    };
    let minutes = (start - now).num_minutes();
    let plural = |n: i64, unit: &str| format!("{} {}{}", n, unit, if n == 1 { "" } else { "s" });
    let relative = match minutes {
        m if m <= 0 => return format!("Starting now ({} UTC)", start.format("%H:%M")),
        m if m < 60 => plural(m, "minute"),
        m if m < 60 * 24 => plural(m / 60, "hour"),
        m => plural(m / (60 * 24), "day"),
    };
    format!("Starts in {} ({} UTC)", relative, start.format("%b %-d, %H:%M"))
}

/// Delivers reminders through the host notification channel and the in-app
/// channel. The channels are independent of each other and no failure of
/// either one escapes `deliver`.
pub struct NotificationDispatcher {
    host: Arc<dyn INotificationHost>,
    timer: Arc<dyn ITimer>,
    sys: Arc<dyn ISys>,
    in_app: Mutex<VecDeque<InAppNotification>>,
    active: ActiveNotifications,
    generation: AtomicU64,
}

impl NotificationDispatcher {
    pub fn new(host: Arc<dyn INotificationHost>, timer: Arc<dyn ITimer>, sys: Arc<dyn ISys>) -> Self {
        Self {
            host,
            timer,
            sys,
            in_app: Mutex::new(VecDeque::new()),
            active: Arc::new(Mutex::new(HashMap::new())),
            generation: AtomicU64::new(0),
        }
    }

    pub fn permission(&self) -> PermissionState {
        self.host.permission()
    }

    pub fn request_permission(&self) -> PermissionState {
        let permission = self.host.request_permission();
        info!("Host notification permission is now: {}", permission);
        permission
    }

    #[tracing::instrument(name = "Delivering reminder", skip(self, event, preferences), fields(event_id = %event.id))]
    pub fn deliver(&self, event: &Event, preferences: &NotificationPreferences) -> DeliveryReport {
        if !preferences.enabled {
            return DeliveryReport {
                host: ChannelOutcome::Disabled,
                in_app: ChannelOutcome::Disabled,
            };
        }

        let now = self.sys.get_datetime();
        let title = format!("Upcoming {}: {}", event.type_label(), event.display_title());
        let mut body = describe_time_until(event.resolve_start(), now);
        if let Some(location) = event.location() {
            body = format!("{} at {}", body, location);
        }

        let report = DeliveryReport {
            host: self.deliver_to_host(event, preferences, &title, &body),
            in_app: self.deliver_in_app(event, preferences, &title, &body),
        };
        if preferences.email_notifications {
            debug!("Email reminders are not sent by this service");
        }
        info!("Reminder delivery: {:?}", report);
        report
    }

    fn deliver_to_host(
        &self,
        event: &Event,
        preferences: &NotificationPreferences,
        title: &str,
        body: &str,
    ) -> ChannelOutcome {
        if !preferences.browser_notifications {
            return ChannelOutcome::Disabled;
        }
        if !self.host.is_supported() {
            debug!("Host notifications are not supported");
            return ChannelOutcome::Unsupported;
        }
        if self.host.permission() != PermissionState::Granted {
            debug!("Host notification permission is not granted");
            return ChannelOutcome::PermissionDenied;
        }

        let notification = Notification {
            title: title.to_string(),
            body: body.to_string(),
            tag: event.id.as_string(),
        };
        match self.host.show(&notification) {
            Ok(true) => ChannelOutcome::Delivered,
            // Permission was revoked after it was checked
            Ok(false) => ChannelOutcome::PermissionDenied,
            Err(NotificationHostError::Unsupported) => ChannelOutcome::Unsupported,
            Err(e) => {
                error!("Error showing host notification: {:?}", e);
                ChannelOutcome::Failed
            }
        }
    }

    fn deliver_in_app(
        &self,
        event: &Event,
        preferences: &NotificationPreferences,
        title: &str,
        body: &str,
    ) -> ChannelOutcome {
        if !preferences.in_app_notifications {
            return ChannelOutcome::Disabled;
        }

        let toast = InAppNotification {
            id: ID::new(),
            event_id: event.id.clone(),
            title: title.to_string(),
            body: body.to_string(),
            action: NotificationAction {
                label: "View".into(),
                event_id: event.id.clone(),
            },
            created_ts: self.sys.get_timestamp_millis(),
        };
        {
            let mut queue = self.in_app.lock().unwrap_or_else(|e| e.into_inner());
            queue.push_back(toast);
            while queue.len() > IN_APP_QUEUE_LIMIT {
                queue.pop_front();
            }
        }
        self.mark_active(&event.id);
        ChannelOutcome::Delivered
    }

    fn mark_active(&self, event_id: &ID) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let active = self.active.clone();
        let id = event_id.clone();
        let mut active_notifications = lock_active(&self.active);
        let clear_timer = self.timer.arm(
            ACTIVE_NOTIFICATION_WINDOW,
            Box::new(move || {
                let mut active = lock_active(&active);
                if active.get(&id).map(|a| a.generation) == Some(generation) {
                    active.remove(&id);
                }
            }),
        );

        let previous = active_notifications.insert(
            event_id.clone(),
            ActiveNotification {
                generation,
                clear_timer,
            },
        );
        if let Some(previous) = previous {
            previous.clear_timer.cancel();
        }
    }

    /// Takes the toasts which were not shown yet, oldest first
    pub fn drain_in_app(&self) -> Vec<InAppNotification> {
        self.in_app
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .drain(..)
            .collect()
    }

    pub fn is_actively_notified(&self, event_id: &ID) -> bool {
        lock_active(&self.active).contains_key(event_id)
    }

    pub fn active_event_ids(&self) -> Vec<ID> {
        let mut ids = lock_active(&self.active).keys().cloned().collect::<Vec<_>>();
        ids.sort();
        ids
    }
}
