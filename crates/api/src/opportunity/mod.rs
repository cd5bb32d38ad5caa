mod get_opportunity_timeline;
mod upsert_opportunity;

use actix_web::web;
use get_opportunity_timeline::get_opportunity_timeline_controller;
use upsert_opportunity::upsert_opportunity_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/opportunities/{opportunity_id}",
        web::put().to(upsert_opportunity_controller),
    );
    cfg.route(
        "/opportunities/{opportunity_id}/timeline",
        web::get().to(get_opportunity_timeline_controller),
    );
}
