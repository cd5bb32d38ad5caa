mod get_host_notifications;
mod get_in_app_notifications;
mod get_notification_preferences;
mod get_scheduled_reminders;
mod notification_permission;
pub mod schedule_reminders;
mod send_test_notification;
mod update_notification_preferences;

use actix_web::web;
use get_host_notifications::get_host_notifications_controller;
use get_in_app_notifications::get_in_app_notifications_controller;
use get_notification_preferences::get_notification_preferences_controller;
use get_scheduled_reminders::get_scheduled_reminders_controller;
use notification_permission::{
    get_notification_permission_controller, request_notification_permission_controller,
};
use send_test_notification::send_test_notification_controller;
use update_notification_preferences::update_notification_preferences_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/notifications/preferences",
        web::get().to(get_notification_preferences_controller),
    );
    cfg.route(
        "/notifications/preferences",
        web::put().to(update_notification_preferences_controller),
    );

    cfg.route(
        "/notifications/reminders",
        web::get().to(get_scheduled_reminders_controller),
    );
    cfg.route(
        "/notifications/test/{event_id}",
        web::post().to(send_test_notification_controller),
    );

    cfg.route(
        "/notifications/in-app",
        web::get().to(get_in_app_notifications_controller),
    );
    cfg.route(
        "/notifications/host",
        web::get().to(get_host_notifications_controller),
    );

    cfg.route(
        "/notifications/permission",
        web::get().to(get_notification_permission_controller),
    );
    cfg.route(
        "/notifications/permission",
        web::post().to(request_notification_permission_controller),
    );
}
