use super::{delete_event::DeleteEventUseCase, upsert_event::UpsertEventUseCase};
use crate::notification::schedule_reminders::ScheduleRemindersUseCase;
use crate::shared::usecase::{execute, Subscriber};
use jobtrail_domain::Event;
use jobtrail_infra::JobTrailContext;

pub struct RescheduleRemindersOnEventUpserted;

#[async_trait::async_trait(?Send)]
impl Subscriber<UpsertEventUseCase> for RescheduleRemindersOnEventUpserted {
    async fn notify(&self, _e: &Event, ctx: &JobTrailContext) {
        // Sideeffect, ignore result
        let _ = execute(ScheduleRemindersUseCase {}, ctx).await;
    }
}

pub struct RescheduleRemindersOnEventDeleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteEventUseCase> for RescheduleRemindersOnEventDeleted {
    async fn notify(&self, _e: &Event, ctx: &JobTrailContext) {
        // Sideeffect, ignore result
        let _ = execute(ScheduleRemindersUseCase {}, ctx).await;
    }
}
