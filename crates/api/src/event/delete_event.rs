use super::subscribers::RescheduleRemindersOnEventDeleted;
use crate::{
    error::JobTrailError,
    shared::{
        guard::Guard,
        usecase::{execute, Subscriber, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use jobtrail_api_structs::delete_event::*;
use jobtrail_domain::{Event, ID};
use jobtrail_infra::JobTrailContext;

fn handle_error(e: UseCaseErrors) -> JobTrailError {
    match e {
        UseCaseErrors::NotFound(event_id) => JobTrailError::NotFound(format!(
            "The event with id: {}, was not found.",
            event_id
        )),
    }
}

pub async fn delete_event_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<JobTrailContext>,
) -> Result<HttpResponse, JobTrailError> {
    let event_id = Guard::against_malformed_id(path_params.into_inner().event_id)?;

    execute(DeleteEventUseCase { event_id }, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct DeleteEventUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteEventUseCase {
    type Response = Event;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &JobTrailContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .events
            .delete(&self.event_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.event_id.clone()))
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(RescheduleRemindersOnEventDeleted)]
    }
}
