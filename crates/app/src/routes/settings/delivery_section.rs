use dioxus::prelude::*;
use shared_ui::{Badge, BadgeVariant, Input};

use super::{BrandingDraft, DraftError};

/// Where reports are posted. Empty means demo mode.
#[component]
pub fn DeliverySection(draft: BrandingDraft, error: Option<DraftError>) -> Element {
    let mut draft = draft;
    let webhook_error = (error == Some(DraftError::InvalidWebhook))
        .then(|| DraftError::InvalidWebhook.message().to_string());
    let configured = !draft.webhook_url.read().trim().is_empty();

    rsx! {
        section { class: "settings-section",
            div { class: "settings-section-head",
                h2 { class: "settings-section-title", "Invio" }
                if configured {
                    Badge { variant: BadgeVariant::Success, "Attivo" }
                } else {
                    Badge { variant: BadgeVariant::Warning, "Demo" }
                }
            }

            Input {
                label: "Indirizzo di invio (webhook)",
                input_type: "url",
                value: draft.webhook_url.read().clone(),
                on_input: move |e: FormEvent| draft.webhook_url.set(e.value()),
                placeholder: "https://",
                error: webhook_error,
            }
            p { class: "settings-hint",
                "Lascia vuoto per provare il modulo senza inviare nulla."
            }
        }
    }
}
