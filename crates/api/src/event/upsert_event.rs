use super::subscribers::RescheduleRemindersOnEventUpserted;
use crate::{
    error::JobTrailError,
    shared::{
        guard::Guard,
        usecase::{execute, Subscriber, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use jobtrail_api_structs::upsert_event::*;
use jobtrail_domain::Event;
use jobtrail_infra::JobTrailContext;

pub async fn upsert_event_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<JobTrailContext>,
) -> Result<HttpResponse, JobTrailError> {
    let id = Guard::against_malformed_id(path_params.into_inner().event_id)?;
    let body = body.into_inner();
    let event = Event {
        id,
        title: body.title,
        start: body.start,
        date: body.date,
        time: body.time,
        end: body.end,
        event_type: body.event_type,
        location: body.location,
        description: body.description,
        notes: body.notes,
        opportunity_id: body.opportunity_id,
    };

    execute(UpsertEventUseCase { event }, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(|_| JobTrailError::InternalError)
}

/// Stores the latest snapshot of an event
#[derive(Debug)]
pub struct UpsertEventUseCase {
    pub event: Event,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpsertEventUseCase {
    type Response = Event;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &JobTrailContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .events
            .save(&self.event)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        Ok(self.event.clone())
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(RescheduleRemindersOnEventUpserted)]
    }
}
