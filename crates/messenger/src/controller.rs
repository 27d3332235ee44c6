use chrono::{DateTime, Utc};
use rand::Rng;
use shared_types::{
    validate, BrandingConfig, ReportError, ReportForm, ReportPayload, SubmissionResult, Violation,
};
use std::time::Duration;

use crate::cooldown::{Cooldown, COOLDOWN_SECS};
use crate::ticket::Ticket;
use crate::timer::Sleeper;
use crate::webhook::WebhookClient;

/// Simulated round trip when no webhook is configured.
pub const DEMO_DELAY: Duration = Duration::from_millis(800);

/// Where the controller is in the submit workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Sending,
    CoolingDown,
}

/// Destination of a validated report.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Webhook(String),
    /// No webhook configured: nothing leaves the client.
    Demo,
}

/// A validated report ready to be delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct Outbound {
    pub ticket: Ticket,
    pub target: Target,
    pub payload: ReportPayload,
}

/// What [`SubmissionController::prepare`] decided.
#[derive(Debug, Clone, PartialEq)]
pub enum Prepared {
    /// A send is in flight or the cooldown is running; nothing changed.
    Ignored,
    /// The form failed validation; the failure is already the current result.
    Invalid(ReportError),
    Dispatch(Outbound),
}

/// Everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionView {
    pub form: ReportForm,
    pub violations: Vec<Violation>,
    pub result: Option<SubmissionResult>,
    pub cooldown: u32,
    pub busy: bool,
    pub phase: Phase,
}

/// Owns the live form and runs the validate, send, cool down cycle.
///
/// The in-flight guard and the cooldown counter are plain state, so a UI can
/// render them and a second `submit` while either is set is a no-op.
#[derive(Debug, Clone)]
pub struct SubmissionController {
    form: ReportForm,
    webhook_url: Option<String>,
    phase: Phase,
    violations: Vec<Violation>,
    result: Option<SubmissionResult>,
    cooldown: Cooldown,
}

impl SubmissionController {
    pub fn new(branding: &BrandingConfig) -> Self {
        Self::with_form(branding, ReportForm::default())
    }

    pub fn with_form(branding: &BrandingConfig, form: ReportForm) -> Self {
        Self {
            form,
            webhook_url: branding.webhook().map(str::to_string),
            phase: Phase::Idle,
            violations: Vec::new(),
            result: None,
            cooldown: Cooldown::default(),
        }
    }

    /// Pick up a changed webhook after the branding settings were saved.
    pub fn apply_branding(&mut self, branding: &BrandingConfig) {
        self.webhook_url = branding.webhook().map(str::to_string);
    }

    pub fn form(&self) -> &ReportForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ReportForm {
        &mut self.form
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn cooldown_remaining(&self) -> u32 {
        self.cooldown.remaining()
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Sending
    }

    pub fn is_demo(&self) -> bool {
        self.webhook_url.is_none()
    }

    /// Whether a submit would do anything right now.
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !self.cooldown.is_active()
    }

    /// Validate the form and, if it passes, enter `Sending` with a fresh ticket.
    pub fn prepare<R: Rng + ?Sized>(&mut self, now: DateTime<Utc>, rng: &mut R) -> Prepared {
        if !self.can_submit() {
            tracing::debug!(
                phase = ?self.phase,
                cooldown = self.cooldown.remaining(),
                "Submit ignored"
            );
            return Prepared::Ignored;
        }

        self.phase = Phase::Validating;
        let violations = validate(&self.form);
        if !violations.is_empty() {
            let err = ReportError::validation(&violations);
            self.violations = violations;
            self.result = Some(SubmissionResult::Failure {
                reason: err.message.clone(),
            });
            self.phase = Phase::Idle;
            return Prepared::Invalid(err);
        }
        self.violations.clear();

        let ticket = Ticket::generate(now, rng);
        let payload = self.form.to_payload(ticket.as_str(), now);
        let target = match &self.webhook_url {
            Some(url) => Target::Webhook(url.clone()),
            None => Target::Demo,
        };
        tracing::info!(
            ticket = %ticket,
            category = %self.form.category,
            priority = %self.form.priority,
            demo = matches!(target, Target::Demo),
            "Sending report"
        );
        self.phase = Phase::Sending;
        Prepared::Dispatch(Outbound {
            ticket,
            target,
            payload,
        })
    }

    /// Record the delivery outcome and return the new result.
    ///
    /// Success starts the cooldown and clears the per-report fields. Failure
    /// leaves the form untouched and allows an immediate retry. Returns `None`
    /// and changes nothing unless a send is in flight.
    pub fn complete(
        &mut self,
        ticket: &Ticket,
        outcome: Result<(), ReportError>,
    ) -> Option<SubmissionResult> {
        if self.phase != Phase::Sending {
            tracing::debug!(ticket = %ticket, phase = ?self.phase, "Stale completion ignored");
            return None;
        }
        let result = match outcome {
            Ok(()) => {
                self.form.reset_after_send();
                self.cooldown.start(COOLDOWN_SECS);
                self.phase = Phase::CoolingDown;
                SubmissionResult::Success {
                    ticket: ticket.to_string(),
                }
            }
            Err(err) => {
                tracing::warn!(ticket = %ticket, kind = %err.kind, "Report not delivered");
                self.phase = Phase::Idle;
                SubmissionResult::Failure {
                    reason: err.message,
                }
            }
        };
        self.result = Some(result.clone());
        Some(result)
    }

    /// One cooldown second elapsed. Returns the seconds left.
    pub fn tick(&mut self) -> u32 {
        let remaining = self.cooldown.tick();
        if remaining == 0 && self.phase == Phase::CoolingDown {
            self.phase = Phase::Idle;
        }
        remaining
    }

    /// Stop the cooldown when the widget is torn down.
    pub fn dispose(&mut self) {
        self.cooldown.clear();
        if self.phase == Phase::CoolingDown {
            self.phase = Phase::Idle;
        }
    }

    pub fn view(&self) -> SubmissionView {
        SubmissionView {
            form: self.form.clone(),
            violations: self.violations.clone(),
            result: self.result.clone(),
            cooldown: self.cooldown.remaining(),
            busy: self.is_busy(),
            phase: self.phase,
        }
    }

    /// Run one full attempt: prepare, deliver, complete.
    ///
    /// Returns `None` when the attempt was ignored. The cooldown that follows
    /// a success is not driven here; see [`crate::cooldown::run_cooldown`].
    pub async fn submit<C, S, R>(&mut self, client: &C, sleeper: &S, rng: &mut R) -> Option<SubmissionResult>
    where
        C: WebhookClient,
        S: Sleeper,
        R: Rng + ?Sized,
    {
        let outbound = match self.prepare(Utc::now(), rng) {
            Prepared::Ignored => return None,
            Prepared::Invalid(_) => return self.result.clone(),
            Prepared::Dispatch(outbound) => outbound,
        };
        let outcome = deliver(client, sleeper, &outbound).await;
        self.complete(&outbound.ticket, outcome)
    }
}

/// Send a prepared report, or simulate the round trip in demo mode.
pub async fn deliver<C, S>(client: &C, sleeper: &S, outbound: &Outbound) -> Result<(), ReportError>
where
    C: WebhookClient,
    S: Sleeper,
{
    match &outbound.target {
        Target::Webhook(url) => client.post_report(url, &outbound.payload).await,
        Target::Demo => {
            sleeper.sleep(DEMO_DELAY).await;
            tracing::info!(ticket = %outbound.ticket, "Demo mode, report kept on this device");
            Ok(())
        }
    }
}
