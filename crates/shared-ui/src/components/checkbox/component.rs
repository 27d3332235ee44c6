use dioxus::prelude::*;
use dioxus_primitives::checkbox as prim;

pub use prim::CheckboxState;

#[component]
pub fn Checkbox(mut props: prim::CheckboxProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "checkbox", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Checkbox { ..props }
    }
}

#[component]
pub fn CheckboxIndicator(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut attrs = attributes;
    attrs.push(Attribute::new("class", "checkbox-indicator", None, false));

    rsx! {
        prim::CheckboxIndicator {
            attributes: attrs,
            svg {
                class: "checkbox-icon",
                xmlns: "http://www.w3.org/2000/svg",
                width: "14",
                height: "14",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "3",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M20 6L9 17l-5-5" }
            }
        }
    }
}

/// A checkbox followed by its label text, reporting a plain `bool`.
#[component]
pub fn CheckboxField(
    checked: bool,
    on_change: EventHandler<bool>,
    #[props(default)] error: Option<String>,
    children: Element,
) -> Element {
    let state = if checked {
        CheckboxState::Checked
    } else {
        CheckboxState::Unchecked
    };

    rsx! {
        div { class: "checkbox-field",
            "data-invalid": error.is_some(),
            label { class: "checkbox-row",
                Checkbox {
                    checked: Some(state),
                    on_checked_change: move |state: CheckboxState| {
                        on_change.call(matches!(state, CheckboxState::Checked));
                    },
                    CheckboxIndicator {}
                }
                span { class: "checkbox-label", {children} }
            }
            if let Some(message) = error {
                span { class: "checkbox-error", "{message}" }
            }
        }
    }
}
