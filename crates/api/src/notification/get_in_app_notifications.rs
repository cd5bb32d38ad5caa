use crate::{
    error::JobTrailError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use jobtrail_api_structs::get_in_app_notifications::*;
use jobtrail_domain::{InAppNotification, ID};
use jobtrail_infra::JobTrailContext;

pub async fn get_in_app_notifications_controller(
    ctx: web::Data<JobTrailContext>,
) -> Result<HttpResponse, JobTrailError> {
    execute(GetInAppNotificationsUseCase {}, &ctx)
        .await
        .map(|(notifications, active_event_ids)| {
            HttpResponse::Ok().json(APIResponse {
                notifications,
                active_event_ids,
            })
        })
        .map_err(|_| JobTrailError::InternalError)
}

/// Collects the toasts which have not been shown yet
#[derive(Debug)]
pub struct GetInAppNotificationsUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetInAppNotificationsUseCase {
    type Response = (Vec<InAppNotification>, Vec<ID>);

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &JobTrailContext) -> Result<Self::Response, Self::Errors> {
        let dispatcher = ctx.dispatcher();
        Ok((dispatcher.drain_in_app(), dispatcher.active_event_ids()))
    }
}
