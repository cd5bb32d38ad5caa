use crate::{
    error::JobTrailError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use jobtrail_api_structs::get_opportunity_timeline::*;
use jobtrail_domain::{timeline, TimelineEvent, ID};
use jobtrail_infra::{ISys, JobTrailContext};

fn handle_error(e: UseCaseErrors) -> JobTrailError {
    match e {
        UseCaseErrors::NotFound(opportunity_id) => JobTrailError::NotFound(format!(
            "The opportunity with id: {}, was not found.",
            opportunity_id
        )),
    }
}

pub async fn get_opportunity_timeline_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<JobTrailContext>,
) -> Result<HttpResponse, JobTrailError> {
    let opportunity_id = Guard::against_malformed_id(path_params.into_inner().opportunity_id)?;
    let usecase = GetOpportunityTimelineUseCase {
        opportunity_id: opportunity_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|timeline| {
            HttpResponse::Ok().json(APIResponse {
                opportunity_id,
                timeline,
            })
        })
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetOpportunityTimelineUseCase {
    pub opportunity_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetOpportunityTimelineUseCase {
    type Response = Vec<TimelineEvent>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &JobTrailContext) -> Result<Self::Response, Self::Errors> {
        let opportunity = ctx
            .repos
            .opportunities
            .find(&self.opportunity_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.opportunity_id.clone()))?;

        Ok(timeline::reconstruct(&opportunity, ctx.sys.get_datetime()))
    }
}
