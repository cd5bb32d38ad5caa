use crate::{
    error::JobTrailError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use jobtrail_api_structs::get_host_notifications::*;
use jobtrail_domain::Notification;
use jobtrail_infra::JobTrailContext;

pub async fn get_host_notifications_controller(
    ctx: web::Data<JobTrailContext>,
) -> Result<HttpResponse, JobTrailError> {
    execute(GetHostNotificationsUseCase {}, &ctx)
        .await
        .map(|notifications| HttpResponse::Ok().json(APIResponse { notifications }))
        .map_err(|_| JobTrailError::InternalError)
}

#[derive(Debug)]
pub struct GetHostNotificationsUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetHostNotificationsUseCase {
    type Response = Vec<Notification>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &JobTrailContext) -> Result<Self::Response, Self::Errors> {
        Ok(ctx.notification_center.drain())
    }
}
