use axum::http::StatusCode;
use messenger::config::{load_branding, save_branding};
use messenger::prefs::{self, KEY_WEBHOOK_URL};
use messenger::{FileStore, PreferenceStore, ReqwestWebhook, SubmissionController};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_types::BrandingConfig;

use crate::common::{filled_form, spawn_webhook, RecordingSleeper};

#[tokio::test]
async fn saved_webhook_survives_restart_and_receives_reports() {
    let hook = spawn_webhook(StatusCode::OK).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let branding = BrandingConfig {
        brand_name: "Condominio Aurora".into(),
        ..hook.branding()
    };
    save_branding(&FileStore::open(&path), &branding).unwrap();

    // a fresh store, as after relaunching the widget
    let restored = load_branding(&FileStore::open(&path), &BrandingConfig::default());
    assert_eq!(restored, branding);

    let mut controller = SubmissionController::with_form(&restored, filled_form());
    assert!(!controller.is_demo());
    let result = controller
        .submit(&ReqwestWebhook::new(), &RecordingSleeper::default(), &mut StdRng::seed_from_u64(11))
        .await
        .unwrap();

    assert!(result.is_success());
    assert_eq!(hook.received().await.len(), 1);
}

#[tokio::test]
async fn clearing_the_webhook_switches_a_live_controller_to_demo() {
    let hook = spawn_webhook(StatusCode::OK).await;
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("prefs.json"));

    let mut controller = SubmissionController::with_form(&hook.branding(), filled_form());
    assert!(!controller.is_demo());

    prefs::save(&store, KEY_WEBHOOK_URL, &None::<String>).unwrap();
    let branding = load_branding(&store, &hook.branding());
    controller.apply_branding(&branding);
    assert!(controller.is_demo());

    let sleeper = RecordingSleeper::default();
    let result = controller
        .submit(&ReqwestWebhook::new(), &sleeper, &mut StdRng::seed_from_u64(12))
        .await
        .unwrap();
    assert!(result.is_success());
    assert_eq!(sleeper.slept().len(), 1);
    assert!(hook.received().await.is_empty());
}

#[test]
fn stored_values_are_json_encoded() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("prefs.json"));
    save_branding(&store, &BrandingConfig::default()).unwrap();

    assert_eq!(store.get_raw("cm.brandName").as_deref(), Some("\"Studio CAI\""));
    assert_eq!(store.get_raw("cm.accentColor").as_deref(), Some("\"#0e7490\""));
    assert_eq!(store.get_raw("cm.webhookUrl").as_deref(), Some("null"));
}
