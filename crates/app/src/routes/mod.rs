pub mod not_found;
pub mod report;
pub mod settings;

use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdSettings};
use dioxus_free_icons::Icon;

use crate::format_helpers::{footer_text, APP_VERSION};
use crate::BrandingState;
use not_found::NotFound;
use report::Report;
use settings::Settings;

/// Widget routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(WidgetLayout)]
    #[route("/")]
    Report {},
    #[route("/impostazioni")]
    Settings {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Brand header above the page and the copyright footer below it.
#[component]
fn WidgetLayout() -> Element {
    let route: Route = use_route();
    let branding: BrandingState = use_context();
    let current = branding.current.read().clone();
    let on_settings = matches!(route, Route::Settings {});
    let year = chrono::Local::now().year();
    let footer = footer_text(year, &current.brand_name);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        document::Title { "{current.brand_name}" }

        div { class: "widget-shell",
            header { class: "widget-header",
                div { class: "widget-brand",
                    if let Some(logo) = current.logo() {
                        img { class: "widget-logo", src: "{logo}", alt: "{current.brand_name}" }
                    }
                    span { class: "widget-brand-name", "{current.brand_name}" }
                }
                if on_settings {
                    Link { to: Route::Report {}, class: "widget-nav-link",
                        Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                        span { "Torna al modulo" }
                    }
                } else {
                    Link { to: Route::Settings {}, class: "widget-nav-link",
                        Icon::<LdSettings> { icon: LdSettings, width: 16, height: 16 }
                        span { "Impostazioni" }
                    }
                }
            }

            main { class: "widget-main", Outlet::<Route> {} }

            footer { class: "widget-footer",
                span { "{footer}" }
                span { class: "widget-version", "v{APP_VERSION}" }
            }
        }
    }
}
