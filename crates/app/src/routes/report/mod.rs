mod result_banner;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSend;
use dioxus_free_icons::Icon;
use messenger::TokioSleeper;
use shared_types::{
    Category, MaintenanceTrade, Priority, SubmissionResult, ALL_CATEGORIES, ALL_PRIORITIES,
    ALL_TRADES,
};
use shared_ui::{
    use_toast, Button, ButtonType, CheckboxField, Form, FormRow, FormSelect, Input, Panel,
    Textarea, ToastOptions,
};

use crate::format_helpers::{field_error, submit_label, DEMO_NOTICE};
use crate::{Services, SubmissionState};
use result_banner::ResultBanner;

/// The report form. The draft and any send in flight belong to the app-level
/// [`SubmissionState`], so leaving this page loses neither.
#[component]
pub fn Report() -> Element {
    let services: Services = use_context();
    let submission: SubmissionState = use_context();
    let toast = use_toast();
    let mut controller = submission.controller;

    let handle_submit = move |_: FormEvent| {
        submission.submit(services.webhook.clone(), TokioSleeper, move |result| match result {
            SubmissionResult::Success { ticket } => {
                toast.success(format!("Segnalazione inviata: ticket {ticket}"), ToastOptions::new());
            }
            SubmissionResult::Failure { reason } => {
                toast.error(reason.clone(), ToastOptions::new());
            }
        });
    };

    let (view, is_demo) = {
        let c = controller.read();
        (c.view(), c.is_demo())
    };
    let form = view.form.clone();
    let locked = view.busy || view.cooldown > 0;
    let label = submit_label(view.busy, view.cooldown);
    let trade_value = form.trade.map(|t| t.label()).unwrap_or_default().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./report.css") }

        Panel {
            title: "Invia una segnalazione",
            tag: is_demo.then(|| "Demo".to_string()),
            description: "Compila il modulo: l'amministrazione riceverà la segnalazione e ti risponderà all'indirizzo indicato.".to_string(),
            notice: is_demo.then(|| DEMO_NOTICE.to_string()),

            Form {
                onsubmit: handle_submit,

                div { class: "report-fields",
                    div { class: "report-section",
                        h3 { class: "report-section-title", "Immobile" }
                        Input {
                            label: "Stabile",
                            value: form.building.clone(),
                            on_input: move |e: FormEvent| controller.write().form_mut().building = e.value(),
                            placeholder: "Via Roma 12",
                            required: true,
                            error: field_error(&view.violations, "building"),
                        }
                        FormRow {
                            Input {
                                label: "Scala",
                                value: form.entrance.clone(),
                                on_input: move |e: FormEvent| controller.write().form_mut().entrance = e.value(),
                                placeholder: "B",
                            }
                            Input {
                                label: "Interno",
                                value: form.unit.clone(),
                                on_input: move |e: FormEvent| controller.write().form_mut().unit = e.value(),
                                placeholder: "7",
                            }
                        }
                    }

                    hr { class: "report-rule" }

                    div { class: "report-section",
                        h3 { class: "report-section-title", "Contatti" }
                        Input {
                            label: "Nome e cognome",
                            value: form.full_name.clone(),
                            on_input: move |e: FormEvent| controller.write().form_mut().full_name = e.value(),
                            required: true,
                            error: field_error(&view.violations, "full_name"),
                        }
                        FormRow {
                            Input {
                                label: "Email",
                                input_type: "email",
                                value: form.email.clone(),
                                on_input: move |e: FormEvent| controller.write().form_mut().email = e.value(),
                                placeholder: "nome@esempio.it",
                                required: true,
                                error: field_error(&view.violations, "email"),
                            }
                            Input {
                                label: "Telefono",
                                input_type: "tel",
                                value: form.phone.clone(),
                                on_input: move |e: FormEvent| controller.write().form_mut().phone = e.value(),
                            }
                        }
                    }

                    hr { class: "report-rule" }

                    div { class: "report-section",
                        h3 { class: "report-section-title", "Segnalazione" }
                        FormRow {
                            FormSelect {
                                label: "Categoria",
                                value: form.category.as_str().to_string(),
                                onchange: move |e: Event<FormData>| {
                                    controller.write().form_mut().set_category(Category::from_key(&e.value()));
                                },
                                for c in ALL_CATEGORIES.iter() {
                                    option { value: c.as_str(), selected: *c == form.category, "{c.label()}" }
                                }
                            }
                            FormSelect {
                                label: "Priorità",
                                value: form.priority.as_str().to_string(),
                                onchange: move |e: Event<FormData>| {
                                    controller.write().form_mut().priority = Priority::from_key(&e.value());
                                },
                                for p in ALL_PRIORITIES.iter() {
                                    option { value: p.as_str(), selected: *p == form.priority, "{p.label()}" }
                                }
                            }
                        }

                        if form.category == Category::Technical {
                            FormSelect {
                                label: "Sottocategoria manutenzione",
                                value: trade_value.clone(),
                                onchange: move |e: Event<FormData>| {
                                    controller.write().form_mut().trade = MaintenanceTrade::from_label(&e.value());
                                },
                                option { value: "", selected: form.trade.is_none(), "Seleziona un intervento" }
                                for t in ALL_TRADES.iter() {
                                    option { value: t.label(), selected: Some(*t) == form.trade, "{t.label()}" }
                                }
                            }
                        }

                        Textarea {
                            label: "Messaggio",
                            value: form.message.clone(),
                            on_input: move |e: FormEvent| controller.write().form_mut().message = e.value(),
                            placeholder: "Descrivi il problema, dove si trova e da quando si presenta.",
                            required: true,
                            show_count: true,
                            error: field_error(&view.violations, "message"),
                        }

                        CheckboxField {
                            checked: form.consent,
                            on_change: move |accepted: bool| controller.write().form_mut().consent = accepted,
                            error: field_error(&view.violations, "consent"),
                            "Ho letto l'informativa privacy e acconsento al trattamento dei dati per la gestione della segnalazione."
                        }
                    }
                }

                div { class: "report-actions",
                    Button {
                        button_type: ButtonType::Submit,
                        disabled: locked,
                        busy: view.busy,
                        if !locked {
                            Icon::<LdSend> { icon: LdSend, width: 16, height: 16 }
                        }
                        span { "{label}" }
                    }
                }
            }
        }

        if let Some(result) = view.result.clone() {
            ResultBanner { result }
        }
    }
}
