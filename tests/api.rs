mod helpers;

use chrono::{Duration, Utc};
use helpers::setup::spawn_app;
use helpers::utils::event_starting_in;
use jobtrail_sdk::{
    APIError, ChannelOutcome, NotificationPreferences, PermissionState, TimelineEventKind,
    UpsertEventInput, UpsertOpportunityInput, ID,
};

#[actix_web::test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk.status.check_health().await.expect("To be healthy");
    assert_eq!(res.armed_reminders, 0);
}

#[actix_web::test]
async fn test_upserted_event_gets_reminder() {
    let (_, sdk, _) = spawn_app().await;
    sdk.notification
        .update_preferences(NotificationPreferences::with_reminder_time(30))
        .await
        .expect("To update preferences");

    let event_id = ID::from(1);
    let res = sdk
        .event
        .upsert(&event_id, event_starting_in("Onsite", Duration::hours(2)))
        .await
        .expect("To upsert event");
    assert_eq!(res.event.id, event_id);
    let start_ts = res.event.start_ts.expect("Event to have a start");
    assert_eq!(res.event.end_ts, Some(start_ts + 60 * 60 * 1000));

    let reminders = sdk
        .notification
        .scheduled_reminders()
        .await
        .expect("To get reminders")
        .reminders;
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].event_id, event_id);
    assert_eq!(reminders[0].fire_ts, start_ts - 30 * 60 * 1000);

    let events = sdk.event.list().await.expect("To list events").events;
    assert_eq!(events.len(), 1);
}

#[actix_web::test]
async fn test_passed_reminder_is_not_armed() {
    let (_, sdk, _) = spawn_app().await;
    sdk.notification
        .update_preferences(NotificationPreferences::with_reminder_time(30))
        .await
        .expect("To update preferences");

    let event_id = ID::from(2);
    sdk.event
        .upsert(&event_id, event_starting_in("Call", Duration::minutes(10)))
        .await
        .expect("To upsert event");

    let reminders = sdk.notification.scheduled_reminders().await.unwrap();
    assert!(reminders.reminders.is_empty());
    let upcoming = sdk.event.upcoming().await.unwrap().events;
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].id, event_id);
}

#[actix_web::test]
async fn test_delete_event() {
    let (_, sdk, _) = spawn_app().await;
    let event_id = "interview-42".parse::<ID>().unwrap();
    sdk.event
        .upsert(&event_id, event_starting_in("Interview", Duration::days(1)))
        .await
        .expect("To upsert event");
    assert_eq!(sdk.status.check_health().await.unwrap().armed_reminders, 1);

    let res = sdk.event.delete(&event_id).await.expect("To delete event");
    assert_eq!(res.event.id, event_id);
    assert_eq!(sdk.status.check_health().await.unwrap().armed_reminders, 0);

    assert!(matches!(
        sdk.event.delete(&event_id).await,
        Err(APIError::NotFound)
    ));
}

#[actix_web::test]
async fn test_malformed_event_id_is_rejected() {
    let (_, sdk, _) = spawn_app().await;
    // Decodes to a blank id on the server
    let blank = "%20".parse::<ID>().unwrap();
    let res = sdk.event.color(&blank).await;
    assert!(matches!(res, Err(APIError::BadClientData)));
}

#[actix_web::test]
async fn test_export_ics() {
    let (_, sdk, _) = spawn_app().await;
    let event_id = ID::from(7);
    let input = UpsertEventInput {
        title: "Interview, round 2".into(),
        start: Some("2030-01-15T10:00:00Z".into()),
        location: Some("Room 4; floor 2".into()),
        event_type: Some("interview".into()),
        ..Default::default()
    };
    sdk.event.upsert(&event_id, input).await.unwrap();

    let res = sdk.event.export_ics(&event_id).await.expect("To export");
    let content_type = res.headers["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/calendar"));
    let disposition = res.headers["content-disposition"].to_str().unwrap();
    assert!(disposition.contains("Interview, round 2.ics"));

    assert!(res.body.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(res.body.ends_with("END:VCALENDAR\r\n"));
    assert!(res.body.contains("SUMMARY:Interview\\, round 2\r\n"));
    assert!(res.body.contains("LOCATION:Room 4\\; floor 2\r\n"));
    assert!(res.body.contains("DTSTART:20300115T100000Z\r\n"));
    assert!(res.body.contains("DTEND:20300115T110000Z\r\n"));
    assert!(res.body.contains("TRIGGER:-PT30M\r\n"));

    assert!(matches!(
        sdk.event.export_ics(&ID::from(8)).await,
        Err(APIError::NotFound)
    ));
}

#[actix_web::test]
async fn test_event_color_uses_linked_opportunity() {
    let (_, sdk, _) = spawn_app().await;
    let opportunity_id = ID::from(3);
    sdk.opportunity
        .upsert(
            &opportunity_id,
            UpsertOpportunityInput {
                company: "Acme".into(),
                position: "Engineer".into(),
                status: "rejected".into(),
                ..Default::default()
            },
        )
        .await
        .expect("To upsert opportunity");

    let event_id = ID::from(4);
    let input = UpsertEventInput {
        opportunity_id: Some(opportunity_id),
        ..event_starting_in("Debrief", Duration::days(3))
    };
    sdk.event.upsert(&event_id, input).await.unwrap();

    let res = sdk.event.color(&event_id).await.expect("To get color");
    assert_eq!(res.color, "red");
}

#[actix_web::test]
async fn test_opportunity_timeline() {
    let (_, sdk, _) = spawn_app().await;
    let opportunity_id = ID::from(9);
    let res = sdk
        .opportunity
        .upsert(
            &opportunity_id,
            UpsertOpportunityInput {
                company: "Acme".into(),
                position: "Engineer".into(),
                status: "phone_screen".into(),
                applied_date: Some("2025-02-01T09:00:00Z".into()),
                ..Default::default()
            },
        )
        .await
        .expect("To upsert opportunity");
    assert_eq!(res.opportunity.stage, "Phone Screen");

    let timeline = sdk
        .opportunity
        .timeline(&opportunity_id)
        .await
        .expect("To get timeline")
        .timeline;
    let kinds = timeline.iter().map(|e| e.kind).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            TimelineEventKind::Interview,
            TimelineEventKind::StatusChange,
            TimelineEventKind::Created,
        ]
    );
    assert!(timeline.iter().all(|e| e.timestamp <= Utc::now()));

    assert!(matches!(
        sdk.opportunity.timeline(&ID::from(10)).await,
        Err(APIError::NotFound)
    ));
}

#[actix_web::test]
async fn test_invalid_preferences_are_rejected() {
    let (_, sdk, _) = spawn_app().await;
    let before = sdk.notification.get_preferences().await.unwrap().preferences;

    let res = sdk
        .notification
        .update_preferences(NotificationPreferences::with_reminder_time(2000))
        .await;
    assert!(matches!(res, Err(APIError::BadClientData)));

    let after = sdk.notification.get_preferences().await.unwrap().preferences;
    assert_eq!(before, after);
}

#[actix_web::test]
async fn test_disabling_notifications_cancels_reminders() {
    let (_, sdk, _) = spawn_app().await;
    sdk.event
        .upsert(&ID::from(1), event_starting_in("Onsite", Duration::days(1)))
        .await
        .unwrap();
    assert_eq!(sdk.status.check_health().await.unwrap().armed_reminders, 1);

    let res = sdk
        .notification
        .update_preferences(NotificationPreferences {
            enabled: false,
            ..Default::default()
        })
        .await
        .expect("To update preferences");
    assert_eq!(res.armed_reminders, 0);
    assert!(sdk
        .notification
        .scheduled_reminders()
        .await
        .unwrap()
        .reminders
        .is_empty());
}

#[actix_web::test]
async fn test_notification_permission_gates_host_channel() {
    let (app, sdk, _) = spawn_app().await;
    app.ctx
        .notification_center
        .set_permission(PermissionState::Default);
    let event_id = ID::from(11);
    sdk.event
        .upsert(&event_id, event_starting_in("Screening", Duration::hours(1)))
        .await
        .unwrap();

    let res = sdk.notification.send_test(&event_id).await.unwrap();
    assert_eq!(res.report.host, ChannelOutcome::PermissionDenied);
    assert_eq!(res.report.in_app, ChannelOutcome::Delivered);
    assert!(sdk.notification.host().await.unwrap().notifications.is_empty());

    let in_app = sdk.notification.in_app().await.unwrap();
    assert_eq!(in_app.notifications.len(), 1);
    assert_eq!(in_app.notifications[0].action.event_id, event_id);
    assert_eq!(in_app.active_event_ids, vec![event_id.clone()]);
    assert!(sdk.notification.in_app().await.unwrap().notifications.is_empty());

    let permission = sdk.notification.request_permission().await.unwrap();
    assert_eq!(permission.permission, PermissionState::Granted);
    assert_eq!(
        sdk.notification.permission().await.unwrap().permission,
        PermissionState::Granted
    );

    let res = sdk.notification.send_test(&event_id).await.unwrap();
    assert_eq!(res.report.host, ChannelOutcome::Delivered);
    let host = sdk.notification.host().await.unwrap().notifications;
    assert_eq!(host.len(), 1);
    assert_eq!(host[0].tag, event_id.to_string());
}

#[actix_web::test]
async fn test_reminder_fires_at_lead_time() {
    let (_, sdk, _) = spawn_app().await;
    sdk.notification
        .update_preferences(NotificationPreferences::with_reminder_time(0))
        .await
        .unwrap();
    sdk.event
        .upsert(
            &ID::from(21),
            event_starting_in("Standup", Duration::milliseconds(1500)),
        )
        .await
        .unwrap();
    assert_eq!(sdk.status.check_health().await.unwrap().armed_reminders, 1);

    actix_web::rt::time::sleep(std::time::Duration::from_millis(2500)).await;

    let in_app = sdk.notification.in_app().await.unwrap();
    assert_eq!(in_app.notifications.len(), 1);
    assert_eq!(in_app.notifications[0].event_id, ID::from(21));
    assert_eq!(sdk.status.check_health().await.unwrap().armed_reminders, 0);
}
