use crate::{
    error::JobTrailError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use jobtrail_api_structs::get_event_color::*;
use jobtrail_domain::{color_for, ID};
use jobtrail_infra::JobTrailContext;

fn handle_error(e: UseCaseErrors) -> JobTrailError {
    match e {
        UseCaseErrors::NotFound(event_id) => JobTrailError::NotFound(format!(
            "The event with id: {}, was not found.",
            event_id
        )),
    }
}

pub async fn get_event_color_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<JobTrailContext>,
) -> Result<HttpResponse, JobTrailError> {
    let event_id = Guard::against_malformed_id(path_params.into_inner().event_id)?;
    let usecase = GetEventColorUseCase {
        event_id: event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|color| {
            HttpResponse::Ok().json(APIResponse {
                event_id,
                color: color.to_string(),
            })
        })
        .map_err(handle_error)
}

/// Color of an event in the calendar view. The linked opportunity is only
/// consulted when the event has no recognized type.
#[derive(Debug)]
pub struct GetEventColorUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventColorUseCase {
    type Response = &'static str;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &JobTrailContext) -> Result<Self::Response, Self::Errors> {
        let event = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.event_id.clone()))?;
        let opportunity = match &event.opportunity_id {
            Some(opportunity_id) => ctx.repos.opportunities.find(opportunity_id).await,
            None => None,
        };

        Ok(color_for(&event, opportunity.as_ref()))
    }
}
