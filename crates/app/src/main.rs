use dioxus::prelude::*;
use messenger::config::{load_branding, load_defaults, prefs_path};
use messenger::{FileStore, ReqwestWebhook};
use shared_types::BrandingConfig;
use std::rc::Rc;

mod format_helpers;
mod routes;
mod submission;
use routes::Route;
pub use submission::SubmissionState;

/// Collaborators shared by every page.
#[derive(Clone)]
pub struct Services {
    pub store: Rc<FileStore>,
    pub webhook: ReqwestWebhook,
}

/// Effective branding, plus the config/env baseline it sits on.
///
/// `current` is what the pages render; the settings page writes it after a
/// successful save so the change shows immediately.
#[derive(Clone, Copy, PartialEq)]
pub struct BrandingState {
    pub current: Signal<BrandingConfig>,
    pub defaults: Signal<BrandingConfig>,
}

const APP_CSS: Asset = asset!("/assets/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let services = use_context_provider(|| Services {
        store: Rc::new(FileStore::open(prefs_path())),
        webhook: ReqwestWebhook::new(),
    });

    let branding = use_context_provider(|| {
        let defaults = load_defaults().branding;
        let current = load_branding(services.store.as_ref(), &defaults);
        BrandingState {
            current: Signal::new(current),
            defaults: Signal::new(defaults),
        }
    });

    submission::use_submission_provider(branding);

    let accent = branding.current.read().accent_color.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        shared_ui::theme::BrandTheme { accent,
            shared_ui::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
