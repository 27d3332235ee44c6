use dioxus::prelude::*;
use shared_types::SubmissionResult;
use shared_ui::{Badge, BadgeVariant};

use crate::format_helpers::result_banner;

/// Outcome of the latest attempt, announced to assistive tech.
#[component]
pub fn ResultBanner(result: SubmissionResult) -> Element {
    let (title, body) = result_banner(&result);
    let (status, variant) = if result.is_success() {
        ("success", BadgeVariant::Success)
    } else {
        ("failure", BadgeVariant::Danger)
    };

    rsx! {
        div { class: "report-result", "data-status": status, role: "status", "aria-live": "polite",
            div { class: "report-result-head",
                strong { "{title}" }
                if let Some(ticket) = result.ticket() {
                    Badge { variant, "{ticket}" }
                }
            }
            p { class: "report-result-body", "{body}" }
        }
    }
}
