use crate::{
    error::JobTrailError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use jobtrail_api_structs::get_upcoming_events::*;
use jobtrail_domain::Event;
use jobtrail_infra::JobTrailContext;

pub async fn get_upcoming_events_controller(
    ctx: web::Data<JobTrailContext>,
) -> Result<HttpResponse, JobTrailError> {
    execute(GetUpcomingEventsUseCase {}, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(|_| JobTrailError::InternalError)
}

/// Events starting within the reminder lead time, soonest first
#[derive(Debug)]
pub struct GetUpcomingEventsUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUpcomingEventsUseCase {
    type Response = Vec<Event>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &JobTrailContext) -> Result<Self::Response, Self::Errors> {
        let events = ctx
            .repos
            .events
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        let preferences = ctx.repos.notification_preferences.get().await;

        Ok(ctx.reminders.check_upcoming(&events, &preferences))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use jobtrail_infra::{Config, ManualTimer, StaticTimeSys};
    use std::sync::Arc;

    #[actix_web::test]
    async fn finds_events_within_lead_time() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        let mut config = Config::new();
        config.default_reminder_time = 60;
        let ctx = JobTrailContext::create_with(
            config,
            Arc::new(StaticTimeSys::at(now)),
            Arc::new(ManualTimer::new()),
        );
        let soon = Event::new("Soon", now + Duration::minutes(45));
        let sooner = Event::new("Sooner", now + Duration::minutes(5));
        let later = Event::new("Later", now + Duration::minutes(61));
        let past = Event::new("Past", now - Duration::minutes(1));
        for e in [&soon, &sooner, &later, &past] {
            ctx.repos.events.save(e).await.unwrap();
        }

        let upcoming = GetUpcomingEventsUseCase {}.execute(&ctx).await.unwrap();
        assert_eq!(upcoming, vec![sooner, soon]);
    }
}
