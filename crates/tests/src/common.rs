use axum::{
    extract::{Multipart, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use messenger::Sleeper;
use shared_types::{BrandingConfig, ReportForm};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// One request as the office endpoint saw it.
#[derive(Debug, Clone)]
pub struct Received {
    pub content_type: String,
    pub fields: BTreeMap<String, String>,
}

#[derive(Clone)]
struct HookState {
    status: StatusCode,
    delay: Duration,
    received: Arc<Mutex<Vec<Received>>>,
}

async fn hook(State(state): State<HookState>, headers: HeaderMap, mut multipart: Multipart) -> StatusCode {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let mut fields = BTreeMap::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.unwrap_or_default();
        fields.insert(name, value);
    }
    state.received.lock().await.push(Received { content_type, fields });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    state.status
}

/// A local stand-in for the office webhook, listening on an ephemeral port.
pub struct TestWebhook {
    pub url: String,
    received: Arc<Mutex<Vec<Received>>>,
}

impl TestWebhook {
    pub async fn received(&self) -> Vec<Received> {
        self.received.lock().await.clone()
    }

    /// Branding that points the controller at this endpoint.
    pub fn branding(&self) -> BrandingConfig {
        BrandingConfig {
            webhook_url: Some(self.url.clone()),
            ..Default::default()
        }
    }
}

/// Start a webhook answering every report with `status`.
pub async fn spawn_webhook(status: StatusCode) -> TestWebhook {
    spawn_webhook_with_delay(status, Duration::ZERO).await
}

/// Start a webhook that reads the report, then waits `delay` before answering.
pub async fn spawn_webhook_with_delay(status: StatusCode, delay: Duration) -> TestWebhook {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = HookState {
        status,
        delay,
        received: received.clone(),
    };
    let app = Router::new().route("/hook", post(hook)).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test webhook");
    let addr = listener.local_addr().expect("Listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test webhook stopped");
    });

    TestWebhook {
        url: format!("http://{addr}/hook"),
        received,
    }
}

/// Records requested delays instead of sleeping.
#[derive(Default)]
pub struct RecordingSleeper {
    slept: std::sync::Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.lock().unwrap().clone()
    }
}

impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.slept.lock().unwrap().push(duration);
    }
}

/// A form that passes validation.
pub fn filled_form() -> ReportForm {
    ReportForm {
        building: "Via Garibaldi 21".into(),
        entrance: "B".into(),
        unit: "7".into(),
        full_name: "Giulia Ferri".into(),
        email: "giulia.ferri@example.it".into(),
        phone: "+39 333 1234567".into(),
        message: "Perdita d'acqua dal soffitto del box auto.".into(),
        consent: true,
        ..Default::default()
    }
}
