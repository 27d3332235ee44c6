use dioxus::prelude::*;
use shared_ui::theme::accent_style;
use shared_ui::Input;

use super::{BrandingDraft, DraftError};

/// Brand name, logo and accent color, with a live swatch.
#[component]
pub fn BrandingSection(draft: BrandingDraft, error: Option<DraftError>) -> Element {
    let mut draft = draft;
    let name_error = (error == Some(DraftError::MissingBrandName))
        .then(|| DraftError::MissingBrandName.message().to_string());
    let accent_error = (error == Some(DraftError::InvalidAccent))
        .then(|| DraftError::InvalidAccent.message().to_string());
    let swatch = accent_style(&draft.accent_color.read());

    rsx! {
        section { class: "settings-section",
            h2 { class: "settings-section-title", "Aspetto" }

            Input {
                label: "Nome dello studio",
                value: draft.brand_name.read().clone(),
                on_input: move |e: FormEvent| draft.brand_name.set(e.value()),
                required: true,
                error: name_error,
            }

            Input {
                label: "Logo (URL)",
                input_type: "url",
                value: draft.logo_url.read().clone(),
                on_input: move |e: FormEvent| draft.logo_url.set(e.value()),
                placeholder: "https://",
            }

            div { class: "settings-accent-row",
                Input {
                    label: "Colore principale",
                    value: draft.accent_color.read().clone(),
                    on_input: move |e: FormEvent| draft.accent_color.set(e.value()),
                    placeholder: "#0e7490",
                    error: accent_error,
                }
                span { class: "settings-accent-swatch", style: "{swatch}", "aria-hidden": "true" }
            }
        }
    }
}
