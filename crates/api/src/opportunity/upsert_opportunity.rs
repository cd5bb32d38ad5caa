use crate::{
    error::JobTrailError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use jobtrail_api_structs::upsert_opportunity::*;
use jobtrail_domain::Opportunity;
use jobtrail_infra::JobTrailContext;

pub async fn upsert_opportunity_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<JobTrailContext>,
) -> Result<HttpResponse, JobTrailError> {
    let id = Guard::against_malformed_id(path_params.into_inner().opportunity_id)?;
    let body = body.into_inner();
    let opportunity = Opportunity {
        id,
        company: body.company,
        position: body.position,
        status: body.status,
        applied_date: body.applied_date,
        notes: body.notes,
        status_history: body.status_history,
    };

    execute(UpsertOpportunityUseCase { opportunity }, &ctx)
        .await
        .map(|opportunity| HttpResponse::Ok().json(APIResponse::new(opportunity)))
        .map_err(|_| JobTrailError::InternalError)
}

#[derive(Debug)]
pub struct UpsertOpportunityUseCase {
    pub opportunity: Opportunity,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpsertOpportunityUseCase {
    type Response = Opportunity;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &JobTrailContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .opportunities
            .save(&self.opportunity)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        Ok(self.opportunity.clone())
    }
}
