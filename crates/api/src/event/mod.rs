mod delete_event;
mod export_event_ics;
mod get_event_color;
mod get_events;
mod get_upcoming_events;
mod subscribers;
mod upsert_event;

use actix_web::web;
use delete_event::delete_event_controller;
use export_event_ics::export_event_ics_controller;
use get_event_color::get_event_color_controller;
use get_events::get_events_controller;
use get_upcoming_events::get_upcoming_events_controller;
use upsert_event::upsert_event_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::get().to(get_events_controller));
    cfg.route(
        "/events/upcoming",
        web::get().to(get_upcoming_events_controller),
    );

    cfg.route("/events/{event_id}", web::put().to(upsert_event_controller));
    cfg.route(
        "/events/{event_id}",
        web::delete().to(delete_event_controller),
    );

    cfg.route(
        "/events/{event_id}/ics",
        web::get().to(export_event_ics_controller),
    );
    cfg.route(
        "/events/{event_id}/color",
        web::get().to(get_event_color_controller),
    );
}
