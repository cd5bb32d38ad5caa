use crate::{
    error::JobTrailError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use jobtrail_api_structs::get_events::*;
use jobtrail_domain::Event;
use jobtrail_infra::JobTrailContext;

pub async fn get_events_controller(
    ctx: web::Data<JobTrailContext>,
) -> Result<HttpResponse, JobTrailError> {
    execute(GetEventsUseCase {}, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(|_| JobTrailError::InternalError)
}

/// Every stored event ordered by start. Events without a valid start come
/// last.
#[derive(Debug)]
pub struct GetEventsUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventsUseCase {
    type Response = Vec<Event>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &JobTrailContext) -> Result<Self::Response, Self::Errors> {
        let mut events = ctx
            .repos
            .events
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        events.sort_by_key(|e| (e.resolve_start().is_none(), e.resolve_start()));
        Ok(events)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{TimeZone, Utc};
    use jobtrail_domain::ID;
    use jobtrail_infra::Config;

    #[actix_web::test]
    async fn orders_events_by_start() {
        let ctx = JobTrailContext::create(Config::new());
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
        let undated = Event {
            id: ID::from(1),
            title: "Someday".into(),
            ..Default::default()
        };
        let mut late = Event::new("Late", start + chrono::Duration::hours(4));
        late.id = ID::from(2);
        let early = Event {
            id: ID::from(3),
            title: "Early".into(),
            date: Some("2025-06-01".into()),
            ..Default::default()
        };
        for e in [&undated, &late, &early] {
            ctx.repos.events.save(e).await.unwrap();
        }

        let events = GetEventsUseCase {}.execute(&ctx).await.unwrap();
        let ids = events.into_iter().map(|e| e.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![ID::from(3), ID::from(2), ID::from(1)]);
    }
}
