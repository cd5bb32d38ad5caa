use crate::{
    error::JobTrailError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use jobtrail_api_structs::send_test_notification::*;
use jobtrail_domain::{DeliveryReport, ID};
use jobtrail_infra::JobTrailContext;

fn handle_error(e: UseCaseErrors) -> JobTrailError {
    match e {
        UseCaseErrors::NotFound(event_id) => JobTrailError::NotFound(format!(
            "The event with id: {}, was not found.",
            event_id
        )),
    }
}

pub async fn send_test_notification_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<JobTrailContext>,
) -> Result<HttpResponse, JobTrailError> {
    let event_id = Guard::against_malformed_id(path_params.into_inner().event_id)?;
    let usecase = SendTestNotificationUseCase {
        event_id: event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|report| HttpResponse::Ok().json(APIResponse { event_id, report }))
        .map_err(handle_error)
}

/// Delivers the reminder of an event right away, regardless of its start
#[derive(Debug)]
pub struct SendTestNotificationUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendTestNotificationUseCase {
    type Response = DeliveryReport;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &JobTrailContext) -> Result<Self::Response, Self::Errors> {
        let event = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.event_id.clone()))?;
        let preferences = ctx.repos.notification_preferences.get().await;

        Ok(ctx.dispatcher().deliver(&event, &preferences))
    }
}
