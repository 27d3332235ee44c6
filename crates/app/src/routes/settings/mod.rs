mod branding_section;
mod delivery_section;

use dioxus::prelude::*;
use shared_types::BrandingConfig;
use shared_ui::theme::is_hex_color;
use shared_ui::{use_toast, Button, ButtonType, ButtonVariant, Form, ToastOptions};

use crate::{BrandingState, Services};
use branding_section::BrandingSection;
use delivery_section::DeliverySection;

/// Editable copy of the four branding preferences.
#[derive(Clone, Copy, PartialEq)]
pub struct BrandingDraft {
    pub brand_name: Signal<String>,
    pub logo_url: Signal<String>,
    pub accent_color: Signal<String>,
    pub webhook_url: Signal<String>,
}

impl BrandingDraft {
    fn fill(&mut self, config: &BrandingConfig) {
        self.brand_name.set(config.brand_name.clone());
        self.logo_url.set(config.logo_url.clone().unwrap_or_default());
        self.accent_color.set(config.accent_color.clone());
        self.webhook_url.set(config.webhook_url.clone().unwrap_or_default());
    }
}

/// Why a draft cannot be saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    MissingBrandName,
    InvalidAccent,
    InvalidWebhook,
}

impl DraftError {
    pub fn message(&self) -> &'static str {
        match self {
            DraftError::MissingBrandName => "Indica il nome dello studio.",
            DraftError::InvalidAccent => "Il colore deve essere nel formato #rrggbb.",
            DraftError::InvalidWebhook => "L'indirizzo di invio deve iniziare con http:// o https://.",
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Turn the edited text fields into a config. Blank optional fields mean
/// "not set".
pub fn branding_from_draft(
    brand_name: &str,
    logo_url: &str,
    accent_color: &str,
    webhook_url: &str,
) -> Result<BrandingConfig, DraftError> {
    let brand_name = non_blank(brand_name).ok_or(DraftError::MissingBrandName)?;
    let accent_color = accent_color.trim();
    if !is_hex_color(accent_color) {
        return Err(DraftError::InvalidAccent);
    }
    let webhook_url = non_blank(webhook_url);
    if let Some(url) = &webhook_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DraftError::InvalidWebhook);
        }
    }
    Ok(BrandingConfig {
        brand_name,
        logo_url: non_blank(logo_url),
        accent_color: accent_color.to_string(),
        webhook_url,
    })
}

/// Branding settings: name, logo, accent color and delivery address.
#[component]
pub fn Settings() -> Element {
    let services: Services = use_context();
    let mut branding: BrandingState = use_context();
    let toast = use_toast();

    let mut draft = BrandingDraft {
        brand_name: use_signal(|| branding.current.peek().brand_name.clone()),
        logo_url: use_signal(|| branding.current.peek().logo_url.clone().unwrap_or_default()),
        accent_color: use_signal(|| branding.current.peek().accent_color.clone()),
        webhook_url: use_signal(|| branding.current.peek().webhook_url.clone().unwrap_or_default()),
    };
    let mut draft_error = use_signal(|| None::<DraftError>);

    let handle_save = move |_: FormEvent| {
        let parsed = branding_from_draft(
            &draft.brand_name.read(),
            &draft.logo_url.read(),
            &draft.accent_color.read(),
            &draft.webhook_url.read(),
        );
        let config = match parsed {
            Ok(config) => config,
            Err(e) => {
                draft_error.set(Some(e));
                toast.error(e.message().to_string(), ToastOptions::new());
                return;
            }
        };
        draft_error.set(None);

        match messenger::config::save_branding(services.store.as_ref(), &config) {
            Ok(()) => {
                branding.current.set(config);
                toast.success("Impostazioni salvate.".to_string(), ToastOptions::new());
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save branding");
                toast.error(
                    "Impossibile salvare le impostazioni su questo dispositivo.".to_string(),
                    ToastOptions::new(),
                );
            }
        }
    };

    let restore_defaults = move |_| {
        let defaults = branding.defaults.peek().clone();
        draft.fill(&defaults);
        draft_error.set(None);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        div { class: "settings-page",
            h1 { class: "settings-title", "Impostazioni" }
            p { class: "settings-subtitle",
                "Le impostazioni restano salvate su questo dispositivo."
            }

            Form {
                onsubmit: handle_save,

                BrandingSection { draft, error: draft_error() }

                hr { class: "settings-rule" }

                DeliverySection { draft, error: draft_error() }

                div { class: "settings-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: restore_defaults,
                        "Ripristina predefiniti"
                    }
                    Button { button_type: ButtonType::Submit, "Salva" }
                }
            }
        }
    }
}
