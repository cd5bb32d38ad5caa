use crate::{
    error::JobTrailError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use jobtrail_api_structs::dtos::ScheduledReminderDTO;
use jobtrail_api_structs::get_scheduled_reminders::*;
use jobtrail_domain::date::to_millis;
use jobtrail_infra::{ArmedReminder, JobTrailContext};

pub async fn get_scheduled_reminders_controller(
    ctx: web::Data<JobTrailContext>,
) -> Result<HttpResponse, JobTrailError> {
    execute(GetScheduledRemindersUseCase {}, &ctx)
        .await
        .map(|reminders| {
            HttpResponse::Ok().json(APIResponse {
                reminders: reminders
                    .into_iter()
                    .map(|r| ScheduledReminderDTO {
                        event_id: r.event_id,
                        fire_ts: to_millis(&r.fire_at),
                    })
                    .collect(),
            })
        })
        .map_err(|_| JobTrailError::InternalError)
}

#[derive(Debug)]
pub struct GetScheduledRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetScheduledRemindersUseCase {
    type Response = Vec<ArmedReminder>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &JobTrailContext) -> Result<Self::Response, Self::Errors> {
        Ok(ctx.reminders.scheduled_reminders())
    }
}
