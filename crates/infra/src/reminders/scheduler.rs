use super::dispatcher::NotificationDispatcher;
use crate::system::{ISys, ITimer, TimerHandle};
use chrono::{DateTime, Utc};
use jobtrail_domain::{Event, NotificationPreferences, ID};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

struct ScheduledReminder {
    fire_at: DateTime<Utc>,
    generation: u64,
    handle: Box<dyn TimerHandle>,
}

type ArmedReminders = Arc<Mutex<HashMap<ID, ScheduledReminder>>>;

fn lock_armed(armed: &ArmedReminders) -> MutexGuard<'_, HashMap<ID, ScheduledReminder>> {
    armed.lock().unwrap_or_else(|e| e.into_inner())
}

/// Snapshot of a reminder which has neither fired nor been canceled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmedReminder {
    pub event_id: ID,
    pub fire_at: DateTime<Utc>,
}

/// Arms one timer per upcoming `Event` which fires `lead time` before the
/// event starts and hands the event to the `NotificationDispatcher`.
///
/// Every call to `schedule` replaces the previous schedule completely. A
/// reminder whose fire time has already passed is never armed, so a batch
/// can be rescheduled at any time without repeating reminders.
pub struct ReminderScheduler {
    dispatcher: Arc<NotificationDispatcher>,
    timer: Arc<dyn ITimer>,
    sys: Arc<dyn ISys>,
    armed: ArmedReminders,
    generation: AtomicU64,
    /// Serializes `schedule` calls so that overlapping batches never mix
    scheduling: Mutex<()>,
}

impl ReminderScheduler {
    pub fn new(
        dispatcher: Arc<NotificationDispatcher>,
        timer: Arc<dyn ITimer>,
        sys: Arc<dyn ISys>,
    ) -> Self {
        Self {
            dispatcher,
            timer,
            sys,
            armed: Arc::new(Mutex::new(HashMap::new())),
            generation: AtomicU64::new(0),
            scheduling: Mutex::new(()),
        }
    }

    pub fn dispatcher(&self) -> &Arc<NotificationDispatcher> {
        &self.dispatcher
    }

    /// Returns the number of armed reminders
    #[tracing::instrument(name = "Scheduling reminders", skip(self, events, preferences), fields(events = events.len()))]
    pub fn schedule(&self, events: &[Event], preferences: &NotificationPreferences) -> usize {
        let _scheduling = self.scheduling.lock().unwrap_or_else(|e| e.into_inner());
        self.cancel_all();
        if !preferences.enabled || events.is_empty() {
            return 0;
        }

        let now = self.sys.get_datetime();
        let lead_time = preferences.lead_time();
        for event in events {
            let start = match event.resolve_start() {
                Some(start) => start,
                None => {
                    warn!("Skipping event: {} without a valid start time", event.id);
                    continue;
                }
            };
            if start < now {
                continue;
            }
            let fire_at = start - lead_time;
            if fire_at < now {
                debug!(
                    "Reminder time for event: {} has already passed, not scheduling",
                    event.id
                );
                continue;
            }
            let delay = (fire_at - now).to_std().unwrap_or_default();
            self.arm(event.clone(), preferences.clone(), fire_at, delay);
        }

        let count = lock_armed(&self.armed).len();
        info!("Armed {} reminders", count);
        count
    }

    fn arm(
        &self,
        event: Event,
        preferences: NotificationPreferences,
        fire_at: DateTime<Utc>,
        delay: std::time::Duration,
    ) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let event_id = event.id.clone();
        let armed = self.armed.clone();
        let dispatcher = self.dispatcher.clone();
        // Held while arming so that the task cannot fire before its entry exists
        let mut armed_reminders = lock_armed(&self.armed);
        let handle = self.timer.arm(
            delay,
            Box::new(move || {
                {
                    let mut armed = lock_armed(&armed);
                    if armed.get(&event.id).map(|r| r.generation) != Some(generation) {
                        return;
                    }
                    armed.remove(&event.id);
                }
                dispatcher.deliver(&event, &preferences);
            }),
        );

        let previous = armed_reminders.insert(
            event_id,
            ScheduledReminder {
                fire_at,
                generation,
                handle,
            },
        );
        if let Some(previous) = previous {
            previous.handle.cancel();
        }
    }

    /// Cancels every armed reminder and returns how many there were
    pub fn cancel_all(&self) -> usize {
        let canceled = lock_armed(&self.armed).drain().collect::<Vec<_>>();
        for (_, reminder) in &canceled {
            reminder.handle.cancel();
        }
        canceled.len()
    }

    /// Events starting within the lead time from now, soonest first
    pub fn check_upcoming(&self, events: &[Event], preferences: &NotificationPreferences) -> Vec<Event> {
        let now = self.sys.get_datetime();
        let until = now + preferences.lead_time();
        let mut upcoming = events
            .iter()
            .filter_map(|event| event.resolve_start().map(|start| (start, event)))
            .filter(|(start, _)| *start >= now && *start <= until)
            .collect::<Vec<_>>();
        upcoming.sort_by_key(|(start, _)| *start);
        upcoming.into_iter().map(|(_, e)| e.clone()).collect()
    }

    pub fn scheduled_reminders(&self) -> Vec<ArmedReminder> {
        let mut reminders = lock_armed(&self.armed)
            .iter()
            .map(|(event_id, reminder)| ArmedReminder {
                event_id: event_id.clone(),
                fire_at: reminder.fire_at,
            })
            .collect::<Vec<_>>();
        reminders.sort_by(|a, b| a.fire_at.cmp(&b.fire_at).then(a.event_id.cmp(&b.event_id)));
        reminders
    }

    pub fn is_armed(&self, event_id: &ID) -> bool {
        lock_armed(&self.armed).contains_key(event_id)
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::InMemoryNotificationCenter;
    use crate::system::{ManualTimer, StaticTimeSys};
    use chrono::{Duration, TimeZone};
    use jobtrail_domain::PermissionState;
    use std::time::Duration as StdDuration;

    struct TestContext {
        center: Arc<InMemoryNotificationCenter>,
        timer: Arc<ManualTimer>,
        sys: Arc<StaticTimeSys>,
        scheduler: ReminderScheduler,
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap()
    }

    fn setup() -> TestContext {
        let center = Arc::new(InMemoryNotificationCenter::new(true, PermissionState::Granted));
        let timer = Arc::new(ManualTimer::new());
        let sys = Arc::new(StaticTimeSys::at(now()));
        let dispatcher = Arc::new(NotificationDispatcher::new(
            center.clone(),
            timer.clone(),
            sys.clone(),
        ));
        let scheduler = ReminderScheduler::new(dispatcher, timer.clone(), sys.clone());
        TestContext {
            center,
            timer,
            sys,
            scheduler,
        }
    }

    fn event_in(id: u64, minutes: i64) -> Event {
        let mut event = Event::new(format!("Event {}", id), now() + Duration::minutes(minutes));
        event.id = ID::from(id);
        event
    }

    #[test]
    fn arms_reminder_lead_time_before_start() {
        let ctx = setup();
        let prefs = NotificationPreferences::default();
        let armed = ctx.scheduler.schedule(&[event_in(1, 60)], &prefs);
        assert_eq!(armed, 1);
        assert_eq!(ctx.timer.pending_delays(), vec![StdDuration::from_secs(30 * 60)]);
        assert_eq!(
            ctx.scheduler.scheduled_reminders(),
            vec![ArmedReminder {
                event_id: ID::from(1),
                fire_at: now() + Duration::minutes(30),
            }]
        );

        assert_eq!(ctx.timer.advance(StdDuration::from_secs(29 * 60)), 0);
        assert!(ctx.center.shown().is_empty());
        assert_eq!(ctx.timer.advance(StdDuration::from_secs(60)), 1);
        assert_eq!(ctx.center.shown().len(), 1);
        assert!(!ctx.scheduler.is_armed(&ID::from(1)));
    }

    #[test]
    fn never_arms_past_reminders() {
        let ctx = setup();
        let prefs = NotificationPreferences::default();
        let events = vec![event_in(1, -5), event_in(2, 29), event_in(3, 31), event_in(4, 30)];
        assert_eq!(ctx.scheduler.schedule(&events, &prefs), 2);
        assert!(!ctx.scheduler.is_armed(&ID::from(1)));
        assert!(!ctx.scheduler.is_armed(&ID::from(2)));
        assert_eq!(
            ctx.timer.pending_delays(),
            vec![StdDuration::from_secs(0), StdDuration::from_secs(60)]
        );
    }

    #[test]
    fn rescheduling_replaces_previous_schedule() {
        let ctx = setup();
        let prefs = NotificationPreferences::default();
        ctx.scheduler
            .schedule(&[event_in(1, 60), event_in(2, 90)], &prefs);
        assert_eq!(ctx.timer.pending(), 2);

        let armed = ctx.scheduler.schedule(&[event_in(2, 120)], &prefs);
        assert_eq!(armed, 1);
        assert_eq!(ctx.timer.pending(), 1);
        assert!(!ctx.scheduler.is_armed(&ID::from(1)));

        ctx.timer.fire_all();
        let shown = ctx.center.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].tag, "2");
    }

    #[test]
    fn duplicate_ids_are_armed_once() {
        let ctx = setup();
        let prefs = NotificationPreferences::default();
        let armed = ctx
            .scheduler
            .schedule(&[event_in(1, 60), event_in(1, 120)], &prefs);
        assert_eq!(armed, 1);
        assert_eq!(ctx.timer.pending_delays(), vec![StdDuration::from_secs(90 * 60)]);
    }

    #[test]
    fn disabled_preferences_cancel_everything() {
        let ctx = setup();
        ctx.scheduler
            .schedule(&[event_in(1, 60)], &NotificationPreferences::default());
        let prefs = NotificationPreferences {
            enabled: false,
            ..Default::default()
        };
        assert_eq!(ctx.scheduler.schedule(&[event_in(1, 60)], &prefs), 0);
        assert_eq!(ctx.timer.pending(), 0);
        assert_eq!(ctx.scheduler.schedule(&[], &NotificationPreferences::default()), 0);
    }

    #[test]
    fn skips_events_without_valid_start() {
        let ctx = setup();
        let broken = Event {
            id: ID::from(9),
            title: "Broken".into(),
            start: Some("not a date".into()),
            ..Default::default()
        };
        let armed = ctx
            .scheduler
            .schedule(&[broken, event_in(1, 60)], &NotificationPreferences::default());
        assert_eq!(armed, 1);
    }

    #[test]
    fn cancel_all_after_fire_is_a_noop() {
        let ctx = setup();
        ctx.scheduler
            .schedule(&[event_in(1, 30), event_in(2, 60)], &NotificationPreferences::default());
        assert_eq!(ctx.timer.advance(StdDuration::ZERO), 1);
        assert_eq!(ctx.scheduler.cancel_all(), 1);
        assert_eq!(ctx.timer.fire_all(), 0);
        assert_eq!(ctx.center.shown().len(), 1);
    }

    #[test]
    fn concurrent_schedules_never_mix_batches() {
        let ctx = setup();
        let prefs = NotificationPreferences::default();
        let first = (0..50).map(|id| event_in(id, 60)).collect::<Vec<_>>();
        let second = (100..150).map(|id| event_in(id, 90)).collect::<Vec<_>>();

        for _ in 0..200 {
            std::thread::scope(|s| {
                s.spawn(|| ctx.scheduler.schedule(&first, &prefs));
                s.spawn(|| ctx.scheduler.schedule(&second, &prefs));
            });
            let armed = ctx
                .scheduler
                .scheduled_reminders()
                .into_iter()
                .map(|r| r.event_id)
                .collect::<Vec<_>>();
            assert_eq!(armed.len(), 50);
            let from_first = first.iter().filter(|e| armed.contains(&e.id)).count();
            assert!(from_first == 0 || from_first == 50);
            assert_eq!(ctx.timer.pending(), 50);
        }
    }

    #[test]
    fn drop_cancels_armed_timers() {
        let ctx = setup();
        ctx.scheduler
            .schedule(&[event_in(1, 60)], &NotificationPreferences::default());
        let timer = ctx.timer.clone();
        drop(ctx);
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn check_upcoming_returns_events_within_lead_time() {
        let ctx = setup();
        let prefs = NotificationPreferences::default();
        let events = vec![event_in(1, 20), event_in(2, 45), event_in(3, 5), event_in(4, -1)];
        let upcoming = ctx.scheduler.check_upcoming(&events, &prefs);
        let ids = upcoming.iter().map(|e| e.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids, vec![ID::from(3), ID::from(1)]);

        ctx.sys.advance(Duration::minutes(30));
        assert!(ctx.scheduler.check_upcoming(&events, &prefs).is_empty());
    }
}
