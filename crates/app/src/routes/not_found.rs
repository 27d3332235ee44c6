use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-code", "404" }
            h1 { class: "not-found-title", "Pagina non trovata" }
            p { class: "not-found-message",
                "La pagina "
                code { "{path}" }
                " non esiste."
            }
            Link { to: Route::Report {}, class: "not-found-link", "Torna al modulo di segnalazione" }
        }
    }
}
