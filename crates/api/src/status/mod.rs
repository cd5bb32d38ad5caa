use actix_web::{web, HttpResponse};
use jobtrail_api_structs::get_service_health::*;
use jobtrail_infra::JobTrailContext;

async fn status(ctx: web::Data<JobTrailContext>) -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        message: "Yo! We are up!\r\n".into(),
        armed_reminders: ctx.reminders.scheduled_reminders().len(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
