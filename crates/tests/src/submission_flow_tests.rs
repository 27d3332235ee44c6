use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use messenger::{run_cooldown, Phase, ReqwestWebhook, SubmissionController, Ticket, COOLDOWN_SECS};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_types::{BrandingConfig, Category, MaintenanceTrade, Priority, SubmissionResult};
use std::time::Duration;

use crate::common::{filled_form, spawn_webhook, RecordingSleeper};

#[tokio::test]
async fn accepted_report_carries_every_field() {
    let hook = spawn_webhook(StatusCode::OK).await;
    let mut form = filled_form();
    form.set_category(Category::Technical);
    form.trade = Some(MaintenanceTrade::Idraulico);
    form.priority = Priority::Urgent;

    let mut controller = SubmissionController::with_form(&hook.branding(), form);
    let sleeper = RecordingSleeper::default();
    let result = controller
        .submit(&ReqwestWebhook::new(), &sleeper, &mut StdRng::seed_from_u64(7))
        .await
        .expect("submit was ignored");

    let ticket = result.ticket().expect("expected success").to_string();
    assert!(Ticket::is_well_formed(&ticket), "{ticket}");

    let received = hook.received().await;
    assert_eq!(received.len(), 1);
    let request = &received[0];
    assert!(request.content_type.starts_with("multipart/form-data"), "{}", request.content_type);

    let fields = &request.fields;
    let names: Vec<&str> = fields.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec![
            "building", "category", "consent", "email", "entrance", "fullName", "message",
            "phone", "priority", "ticket", "timestamp", "trade", "unit",
        ]
    );
    assert_eq!(fields["building"], "Via Garibaldi 21");
    assert_eq!(fields["entrance"], "B");
    assert_eq!(fields["unit"], "7");
    assert_eq!(fields["fullName"], "Giulia Ferri");
    assert_eq!(fields["email"], "giulia.ferri@example.it");
    assert_eq!(fields["phone"], "+39 333 1234567");
    assert_eq!(fields["category"], "Technical");
    assert_eq!(fields["trade"], "Idraulico");
    assert_eq!(fields["priority"], "Urgent");
    assert_eq!(fields["consent"], "true");
    assert_eq!(fields["ticket"], ticket);

    let timestamp = &fields["timestamp"];
    assert!(timestamp.ends_with('Z'), "{timestamp}");
    assert_eq!(timestamp.len(), "2026-10-16T09:30:00.000Z".len(), "{timestamp}");
    let parsed: DateTime<Utc> = timestamp.parse().expect("timestamp is not ISO-8601");
    assert_eq!(
        &ticket[3..11],
        parsed.format("%Y%m%d").to_string().as_str(),
        "ticket date and timestamp disagree"
    );

    // no demo delay on the real path
    assert!(sleeper.slept().is_empty());
}

#[tokio::test]
async fn success_starts_cooldown_and_resets_report_fields() {
    let hook = spawn_webhook(StatusCode::NO_CONTENT).await;
    let mut form = filled_form();
    form.set_category(Category::Technical);
    form.trade = Some(MaintenanceTrade::Ascensore);
    form.priority = Priority::Emergency;

    let mut controller = SubmissionController::with_form(&hook.branding(), form);
    let result = controller
        .submit(&ReqwestWebhook::new(), &RecordingSleeper::default(), &mut StdRng::seed_from_u64(1))
        .await
        .unwrap();

    assert!(result.is_success());
    assert_eq!(controller.cooldown_remaining(), COOLDOWN_SECS);
    assert_eq!(controller.phase(), Phase::CoolingDown);

    let form = controller.form();
    assert_eq!(form.category, Category::Administrative);
    assert_eq!(form.trade, None);
    assert_eq!(form.priority, Priority::Normal);
    assert_eq!(form.message, "");
    assert_eq!(form.building, "Via Garibaldi 21");
    assert_eq!(form.full_name, "Giulia Ferri");
    assert_eq!(form.email, "giulia.ferri@example.it");
    assert!(form.consent);
}

#[tokio::test]
async fn submit_during_cooldown_is_ignored() {
    let hook = spawn_webhook(StatusCode::OK).await;
    let mut controller = SubmissionController::with_form(&hook.branding(), filled_form());
    let client = ReqwestWebhook::new();
    let sleeper = RecordingSleeper::default();
    let mut rng = StdRng::seed_from_u64(3);

    let first = controller.submit(&client, &sleeper, &mut rng).await.unwrap();
    controller.form_mut().message = "Il citofono non funziona.".into();
    let second = controller.submit(&client, &sleeper, &mut rng).await;

    assert_eq!(second, None);
    assert_eq!(controller.result(), Some(&first));
    assert_eq!(hook.received().await.len(), 1);
}

#[tokio::test]
async fn cooldown_runs_down_then_allows_another_report() {
    let hook = spawn_webhook(StatusCode::OK).await;
    let mut controller = SubmissionController::with_form(&hook.branding(), filled_form());
    let client = ReqwestWebhook::new();
    let mut rng = StdRng::seed_from_u64(4);

    controller.submit(&client, &RecordingSleeper::default(), &mut rng).await.unwrap();

    let ticks = RecordingSleeper::default();
    let mut seen = Vec::new();
    run_cooldown(&ticks, || {
        let left = controller.tick();
        seen.push(left);
        left
    })
    .await;

    assert_eq!(seen, vec![7, 6, 5, 4, 3, 2, 1, 0]);
    assert_eq!(ticks.slept(), vec![Duration::from_secs(1); COOLDOWN_SECS as usize]);
    assert_eq!(controller.phase(), Phase::Idle);
    assert!(controller.can_submit());

    controller.form_mut().message = "Luce delle scale sempre accesa.".into();
    let again = controller.submit(&client, &RecordingSleeper::default(), &mut rng).await;
    assert!(again.is_some_and(|r| r.is_success()));
    assert_eq!(hook.received().await.len(), 2);
}

#[tokio::test]
async fn server_error_is_a_failure_without_cooldown() {
    let hook = spawn_webhook(StatusCode::INTERNAL_SERVER_ERROR).await;
    let form = filled_form();
    let mut controller = SubmissionController::with_form(&hook.branding(), form.clone());
    let client = ReqwestWebhook::new();
    let mut rng = StdRng::seed_from_u64(5);

    let result = controller.submit(&client, &RecordingSleeper::default(), &mut rng).await.unwrap();

    let reason = result.reason().expect("expected failure");
    assert!(reason.contains("500"), "{reason}");
    assert_eq!(controller.cooldown_remaining(), 0);
    assert_eq!(controller.phase(), Phase::Idle);
    assert_eq!(controller.form(), &form);

    // immediate retry goes out again
    let retry = controller.submit(&client, &RecordingSleeper::default(), &mut rng).await;
    assert!(retry.is_some());
    assert_eq!(hook.received().await.len(), 2);
}

#[tokio::test]
async fn missing_consent_never_reaches_the_network() {
    let hook = spawn_webhook(StatusCode::OK).await;
    let mut form = filled_form();
    form.consent = false;
    let mut controller = SubmissionController::with_form(&hook.branding(), form);
    let sleeper = RecordingSleeper::default();

    let result = controller
        .submit(&ReqwestWebhook::new(), &sleeper, &mut StdRng::seed_from_u64(6))
        .await
        .unwrap();

    let reason = result.reason().expect("expected failure");
    assert!(reason.contains("informativa privacy"), "{reason}");
    assert_eq!(controller.violations().len(), 1);
    assert_eq!(controller.cooldown_remaining(), 0);
    assert!(sleeper.slept().is_empty());
    assert!(hook.received().await.is_empty());
}

#[tokio::test]
async fn demo_mode_succeeds_after_simulated_delay() {
    let mut controller = SubmissionController::with_form(&BrandingConfig::default(), filled_form());
    let sleeper = RecordingSleeper::default();

    let result = controller
        .submit(&ReqwestWebhook::new(), &sleeper, &mut StdRng::seed_from_u64(8))
        .await
        .unwrap();

    match result {
        SubmissionResult::Success { ticket } => assert!(Ticket::is_well_formed(&ticket)),
        other => panic!("expected success, got {other:?}"),
    }
    assert_eq!(sleeper.slept(), vec![Duration::from_millis(800)]);
    assert_eq!(controller.cooldown_remaining(), COOLDOWN_SECS);
}

#[tokio::test]
async fn blank_webhook_falls_back_to_demo() {
    let branding = BrandingConfig {
        webhook_url: Some("   ".into()),
        ..Default::default()
    };
    let controller = SubmissionController::new(&branding);
    assert!(controller.is_demo());
}
