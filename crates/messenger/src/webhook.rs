use reqwest::multipart::Form;
use shared_types::{ReportError, ReportPayload};
use std::time::Duration;

/// Upper bound on one delivery, so a hung endpoint surfaces as a failure.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Outbound side of a submission: one POST of the report to the office.
#[allow(async_fn_in_trait)]
pub trait WebhookClient {
    /// Post `payload` to `url`. Exactly one attempt, no retry.
    async fn post_report(&self, url: &str, payload: &ReportPayload) -> Result<(), ReportError>;
}

/// Multipart delivery over `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestWebhook {
    client: reqwest::Client,
}

impl ReqwestWebhook {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self { client }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestWebhook {
    fn default() -> Self {
        Self::new()
    }
}

/// One text part per payload field.
fn multipart_form(payload: &ReportPayload) -> Form {
    payload
        .fields()
        .iter()
        .fold(Form::new(), |form, (name, value)| form.text(*name, value.clone()))
}

impl WebhookClient for ReqwestWebhook {
    #[tracing::instrument(skip(self, url, payload), fields(ticket = payload.get("ticket")))]
    async fn post_report(&self, url: &str, payload: &ReportPayload) -> Result<(), ReportError> {
        let response = self
            .client
            .post(url)
            .multipart(multipart_form(payload))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Webhook request failed");
                if e.is_timeout() {
                    ReportError::transport("il server non ha risposto in tempo.")
                } else if e.is_connect() {
                    ReportError::transport("impossibile contattare il server.")
                } else {
                    ReportError::transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Webhook rejected report");
            return Err(ReportError::rejected(status.as_u16()));
        }

        tracing::info!(status = status.as_u16(), "Report delivered");
        Ok(())
    }
}
