use super::schedule_reminders::ScheduleRemindersUseCase;
use crate::{
    error::JobTrailError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use jobtrail_api_structs::update_notification_preferences::*;
use jobtrail_domain::{NotificationPreferences, MAX_REMINDER_TIME_MINUTES};
use jobtrail_infra::JobTrailContext;

fn handle_error(e: UseCaseErrors) -> JobTrailError {
    match e {
        UseCaseErrors::InvalidReminderTime(minutes) => JobTrailError::BadClientData(format!(
            "The reminder time: {} is not valid. It must be between 0 and {} minutes.",
            minutes, MAX_REMINDER_TIME_MINUTES
        )),
        UseCaseErrors::StorageError => JobTrailError::InternalError,
    }
}

pub async fn update_notification_preferences_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<JobTrailContext>,
) -> Result<HttpResponse, JobTrailError> {
    let usecase = UpdateNotificationPreferencesUseCase {
        preferences: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|(preferences, armed_reminders)| {
            HttpResponse::Ok().json(APIResponse {
                preferences,
                armed_reminders,
            })
        })
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct UpdateNotificationPreferencesUseCase {
    pub preferences: NotificationPreferences,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidReminderTime(i64),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateNotificationPreferencesUseCase {
    /// The saved preferences and the number of reminders armed with them
    type Response = (NotificationPreferences, usize);

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &JobTrailContext) -> Result<Self::Response, Self::Errors> {
        if !self.preferences.is_valid() {
            return Err(UseCaseErrors::InvalidReminderTime(
                self.preferences.default_reminder_time,
            ));
        }
        ctx.repos
            .notification_preferences
            .save(&self.preferences)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        let armed = execute(ScheduleRemindersUseCase {}, ctx)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok((self.preferences.clone(), armed))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use jobtrail_domain::Event;
    use jobtrail_infra::{Config, ManualTimer, StaticTimeSys};
    use std::sync::Arc;
    use std::time::Duration as StdDuration;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
    }

    fn setup() -> (JobTrailContext, Arc<ManualTimer>) {
        let timer = Arc::new(ManualTimer::new());
        let ctx = JobTrailContext::create_with(
            Config::new(),
            Arc::new(StaticTimeSys::at(now())),
            timer.clone(),
        );
        (ctx, timer)
    }

    #[actix_web::test]
    async fn rejects_invalid_reminder_time() {
        let (ctx, _) = setup();
        let before = ctx.repos.notification_preferences.get().await;

        for minutes in [-1, 1441] {
            let mut usecase = UpdateNotificationPreferencesUseCase {
                preferences: NotificationPreferences::with_reminder_time(minutes),
            };
            let res = usecase.execute(&ctx).await;
            assert!(matches!(res, Err(UseCaseErrors::InvalidReminderTime(m)) if m == minutes));
        }
        assert_eq!(ctx.repos.notification_preferences.get().await, before);
    }

    #[actix_web::test]
    async fn saves_and_reschedules_with_new_lead_time() {
        let (ctx, timer) = setup();
        let event = Event::new("Final interview", now() + Duration::hours(3));
        ctx.repos.events.save(&event).await.unwrap();

        let mut usecase = UpdateNotificationPreferencesUseCase {
            preferences: NotificationPreferences::with_reminder_time(120),
        };
        let (preferences, armed) = usecase.execute(&ctx).await.unwrap();

        assert_eq!(armed, 1);
        assert_eq!(preferences.default_reminder_time, 120);
        assert_eq!(
            ctx.repos.notification_preferences.get().await,
            NotificationPreferences::with_reminder_time(120)
        );
        assert_eq!(timer.pending_delays(), vec![StdDuration::from_secs(60 * 60)]);
    }
}
