use dioxus::prelude::*;

/// Titled surface framing one page form.
///
/// `tag` is a short marker next to the title (e.g. "Demo"); `notice` is a
/// highlighted line under the description.
#[component]
pub fn Panel(
    title: String,
    #[props(default)] tag: Option<String>,
    #[props(default)] description: Option<String>,
    #[props(default)] notice: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section { class: "panel",
            header { class: "panel-header",
                div { class: "panel-title-row",
                    h2 { class: "panel-title", "{title}" }
                    if let Some(tag) = tag {
                        span { class: "panel-tag", "{tag}" }
                    }
                }
                if let Some(description) = description {
                    p { class: "panel-description", "{description}" }
                }
                if let Some(notice) = notice {
                    p { class: "panel-notice", role: "note", "{notice}" }
                }
            }
            div { class: "panel-body", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_shows_tag_and_notice_when_given() {
        fn app() -> Element {
            rsx! {
                Panel {
                    title: "Invia una segnalazione",
                    tag: "Demo".to_string(),
                    notice: "Nessun indirizzo di invio".to_string(),
                    p { "corpo" }
                }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Invia una segnalazione"), "{html}");
        assert!(html.contains("panel-tag"), "{html}");
        assert!(html.contains("Nessun indirizzo di invio"), "{html}");
        assert!(html.contains("corpo"), "{html}");
    }

    #[test]
    fn panel_without_extras_has_title_and_body_only() {
        fn app() -> Element {
            rsx! {
                Panel { title: "Impostazioni", p { "corpo" } }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("panel-tag"), "{html}");
        assert!(!html.contains("panel-notice"), "{html}");
        assert!(!html.contains("panel-description"), "{html}");
    }
}
