use crate::{
    error::JobTrailError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use jobtrail_api_structs::get_notification_preferences::*;
use jobtrail_domain::NotificationPreferences;
use jobtrail_infra::JobTrailContext;

pub async fn get_notification_preferences_controller(
    ctx: web::Data<JobTrailContext>,
) -> Result<HttpResponse, JobTrailError> {
    execute(GetNotificationPreferencesUseCase {}, &ctx)
        .await
        .map(|preferences| HttpResponse::Ok().json(APIResponse { preferences }))
        .map_err(|_| JobTrailError::InternalError)
}

#[derive(Debug)]
pub struct GetNotificationPreferencesUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetNotificationPreferencesUseCase {
    type Response = NotificationPreferences;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &JobTrailContext) -> Result<Self::Response, Self::Errors> {
        Ok(ctx.repos.notification_preferences.get().await)
    }
}
