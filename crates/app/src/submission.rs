//! The session's report form, owned by the app root.

use chrono::Utc;
use dioxus::prelude::*;
use messenger::{deliver, run_cooldown, Prepared, Sleeper, SubmissionController, WebhookClient};
use shared_types::SubmissionResult;

use crate::BrandingState;

/// Handle to the one live submission controller.
///
/// Created once in `App`, so leaving the report page keeps the draft. Sends
/// and cooldowns run on root-scoped tasks that a page unmount cannot cancel.
#[derive(Clone, Copy, PartialEq)]
pub struct SubmissionState {
    pub controller: Signal<SubmissionController>,
}

/// Provide the [`SubmissionState`] context and keep it in step with the
/// effective branding.
pub fn use_submission_provider(branding: BrandingState) -> SubmissionState {
    let state = use_context_provider(|| SubmissionState {
        controller: Signal::new(SubmissionController::new(&branding.current.peek())),
    });

    let mut controller = state.controller;
    use_effect(move || {
        let current = branding.current.read();
        controller.write().apply_branding(&current);
    });

    use_drop(move || {
        if let Ok(mut c) = controller.try_write() {
            c.dispose();
        }
    });

    state
}

impl SubmissionState {
    /// Submit the current form.
    ///
    /// Validation failures are reported to `notify` right away. A valid
    /// report is delivered in the background; `notify` gets the outcome and,
    /// after a success, the cooldown keeps ticking on the same task.
    pub fn submit<C, S>(self, client: C, sleeper: S, notify: impl Fn(&SubmissionResult) + 'static)
    where
        C: WebhookClient + 'static,
        S: Sleeper + 'static,
    {
        let mut controller = self.controller;
        let prepared = controller.write().prepare(Utc::now(), &mut rand::thread_rng());
        let outbound = match prepared {
            Prepared::Ignored => return,
            Prepared::Invalid(err) => {
                notify(&SubmissionResult::Failure {
                    reason: err.message,
                });
                return;
            }
            Prepared::Dispatch(outbound) => outbound,
        };

        let _ = spawn_forever(async move {
            let outcome = deliver(&client, &sleeper, &outbound).await;
            let completed = match controller.try_write() {
                Ok(mut c) => c.complete(&outbound.ticket, outcome),
                Err(_) => None,
            };
            let Some(result) = completed else {
                return;
            };
            notify(&result);
            if result.is_success() {
                // zero once the app has shut down, which ends the loop
                run_cooldown(&sleeper, move || {
                    controller.try_write().map(|mut c| c.tick()).unwrap_or(0)
                })
                .await;
            }
        });
    }
}
