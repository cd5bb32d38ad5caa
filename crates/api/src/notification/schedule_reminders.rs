use crate::shared::usecase::UseCase;
use jobtrail_infra::JobTrailContext;
use tracing::warn;

/// Replaces every armed reminder with reminders for the stored events,
/// using the stored `NotificationPreferences`.
#[derive(Debug)]
pub struct ScheduleRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for ScheduleRemindersUseCase {
    /// Number of armed reminders
    type Response = usize;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &JobTrailContext) -> Result<Self::Response, Self::Errors> {
        let preferences = ctx.repos.notification_preferences.get().await;
        let events = match ctx.repos.events.find_all().await {
            Ok(events) => events,
            Err(e) => {
                warn!("Unable to load events, canceling reminders. Error: {:?}", e);
                ctx.reminders.cancel_all();
                return Err(UseCaseErrors::StorageError);
            }
        };

        Ok(ctx.reminders.schedule(&events, &preferences))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use jobtrail_domain::{Event, NotificationPreferences, ID};
    use jobtrail_infra::{Config, ManualTimer, StaticTimeSys};
    use std::sync::Arc;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
    }

    async fn setup() -> (JobTrailContext, Arc<ManualTimer>) {
        let timer = Arc::new(ManualTimer::new());
        let ctx = JobTrailContext::create_with(
            Config::new(),
            Arc::new(StaticTimeSys::at(now())),
            timer.clone(),
        );
        ctx.repos
            .notification_preferences
            .save(&NotificationPreferences::default())
            .await
            .unwrap();
        (ctx, timer)
    }

    async fn insert_event(ctx: &JobTrailContext, id: u64, minutes: i64) {
        let mut event = Event::new("Interview", now() + Duration::minutes(minutes));
        event.id = ID::from(id);
        ctx.repos.events.save(&event).await.unwrap();
    }

    #[actix_web::test]
    async fn schedules_stored_events() {
        let (ctx, timer) = setup().await;
        insert_event(&ctx, 1, 60).await;
        insert_event(&ctx, 2, 10).await;
        insert_event(&ctx, 3, 120).await;

        let mut usecase = ScheduleRemindersUseCase {};
        let res = usecase.execute(&ctx).await;

        assert_eq!(res.unwrap(), 2);
        assert_eq!(timer.pending(), 2);
        assert!(!ctx.reminders.is_armed(&ID::from(2)));
    }

    #[actix_web::test]
    async fn uses_stored_preferences() {
        let (ctx, timer) = setup().await;
        insert_event(&ctx, 1, 60).await;
        ctx.repos
            .notification_preferences
            .save(&NotificationPreferences {
                enabled: false,
                ..Default::default()
            })
            .await
            .unwrap();

        let mut usecase = ScheduleRemindersUseCase {};
        assert_eq!(usecase.execute(&ctx).await.unwrap(), 0);
        assert_eq!(timer.pending(), 0);
    }
}
