//! Text helpers for the widget pages, kept free of Dioxus so they can be
//! unit tested directly.

use shared_types::{SubmissionResult, Violation};

/// Crate version shown in the footer.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Footer line, e.g. "© 2026 Studio CAI. Tutti i diritti riservati."
pub fn footer_text(year: i32, brand: &str) -> String {
    format!("© {year} {brand}. Tutti i diritti riservati.")
}

/// Label of the submit button for the current controller state.
pub fn submit_label(busy: bool, cooldown: u32) -> String {
    if busy {
        "Invio in corso...".to_string()
    } else if cooldown > 0 {
        format!("Attendi {cooldown} s")
    } else {
        "Invia segnalazione".to_string()
    }
}

/// First violation message for `field`, if any.
pub fn field_error(violations: &[Violation], field: &str) -> Option<String> {
    violations
        .iter()
        .find(|v| v.field == field)
        .map(|v| v.message.to_string())
}

/// Headline and body of the result banner.
pub fn result_banner(result: &SubmissionResult) -> (&'static str, String) {
    match result {
        SubmissionResult::Success { ticket } => (
            "Segnalazione inviata",
            format!("Conserva il numero di ticket {ticket} per eventuali solleciti."),
        ),
        SubmissionResult::Failure { reason } => ("Segnalazione non inviata", reason.clone()),
    }
}

/// Shown under the form header when no webhook is configured.
pub const DEMO_NOTICE: &str =
    "Modalità dimostrativa: nessun indirizzo di invio configurato, la segnalazione resta su questo dispositivo.";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{validate, ReportForm};

    #[test]
    fn footer_has_year_and_brand() {
        assert_eq!(
            footer_text(2026, "Studio CAI"),
            "© 2026 Studio CAI. Tutti i diritti riservati."
        );
    }

    #[test]
    fn submit_label_reflects_state() {
        assert_eq!(submit_label(false, 0), "Invia segnalazione");
        assert_eq!(submit_label(true, 0), "Invio in corso...");
        assert_eq!(submit_label(false, 8), "Attendi 8 s");
        // busy wins over a stale countdown
        assert_eq!(submit_label(true, 3), "Invio in corso...");
    }

    #[test]
    fn field_error_picks_matching_violation() {
        let violations = validate(&ReportForm::default());
        assert_eq!(
            field_error(&violations, "building").as_deref(),
            Some("Indica lo stabile (via e numero civico).")
        );
        assert_eq!(field_error(&violations, "phone"), None);
    }

    #[test]
    fn banner_for_success_mentions_ticket() {
        let (title, body) = result_banner(&SubmissionResult::Success {
            ticket: "CM-20261016-7QX2".into(),
        });
        assert_eq!(title, "Segnalazione inviata");
        assert!(body.contains("CM-20261016-7QX2"));
    }

    #[test]
    fn banner_for_failure_shows_reason() {
        let (title, body) = result_banner(&SubmissionResult::Failure {
            reason: "Invio non riuscito: il server ha risposto con HTTP 500.".into(),
        });
        assert_eq!(title, "Segnalazione non inviata");
        assert!(body.contains("500"));
    }
}
