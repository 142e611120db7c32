use dioxus::prelude::*;

use crate::{
    domain::{error_for, CalculatorForm, CargoType, DeliverySpeed, FormField, SiteState},
    ui::components::{
        estimate_panel::EstimatePanel,
        field::TextField,
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<SiteState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let panel = state.with(|st| st.calculator.clone());
    let form = panel.form.clone();
    let errors = panel.errors.clone();

    // Single entry point for every field edit.
    let mut edit = move |apply: fn(&mut CalculatorForm, String), value: String| {
        state.with_mut(|st| apply(&mut st.calculator.form, value));
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        state.with_mut(|st| st.calculator.submit());
    };

    let on_reset = move |_| {
        state.with_mut(|st| st.calculator.reset());
        push_toast(toasts, ToastKind::Info, "Calculator cleared.");
    };

    rsx! {
        section { id: "calculator", class: "calculator",
            div { class: "section-header",
                h2 { "Shipping Cost Calculator" }
                p { class: "section-subtitle", "Get an instant estimate for your global shipment" }
            }
            div { class: "calculator-container",
                form { class: "calculator-form", onsubmit: on_submit,
                    div { class: "form-row",
                        TextField {
                            id: "origin",
                            label: "📍 Origin Country",
                            value: form.origin.clone(),
                            placeholder: "e.g., Afghanistan",
                            error: error_for(&errors, FormField::Origin),
                            oninput: move |value| edit(|f, v| f.origin = v, value),
                        }
                        TextField {
                            id: "destination",
                            label: "🎯 Destination Country",
                            value: form.destination.clone(),
                            placeholder: "e.g., Germany",
                            error: error_for(&errors, FormField::Destination),
                            oninput: move |value| edit(|f, v| f.destination = v, value),
                        }
                    }
                    div { class: "form-row",
                        TextField {
                            id: "weight",
                            label: "⚖️ Weight (kg)",
                            value: form.weight.clone(),
                            placeholder: "e.g., 25",
                            input_type: "number",
                            error: error_for(&errors, FormField::Weight),
                            oninput: move |value| edit(|f, v| f.weight = v, value),
                        }
                        div { class: "form-group",
                            label { r#for: "cargo-type", "📦 Cargo Type" }
                            select {
                                id: "cargo-type",
                                value: form.cargo_type.key(),
                                onchange: move |evt| {
                                    if let Some(kind) = CargoType::from_key(&evt.value()) {
                                        state.with_mut(|st| st.calculator.form.cargo_type = kind);
                                    }
                                },
                                for kind in CargoType::ALL {
                                    option {
                                        value: kind.key(),
                                        selected: kind == form.cargo_type,
                                        "{kind.label()}"
                                    }
                                }
                            }
                        }
                    }
                    div { class: "form-section",
                        h4 { "Package Dimensions (cm) " span { class: "optional", "Optional" } }
                        div { class: "form-row",
                            TextField {
                                id: "length",
                                label: "Length",
                                value: form.length.clone(),
                                placeholder: "Length",
                                input_type: "number",
                                oninput: move |value| edit(|f, v| f.length = v, value),
                            }
                            TextField {
                                id: "width",
                                label: "Width",
                                value: form.width.clone(),
                                placeholder: "Width",
                                input_type: "number",
                                oninput: move |value| edit(|f, v| f.width = v, value),
                            }
                            TextField {
                                id: "height",
                                label: "Height",
                                value: form.height.clone(),
                                placeholder: "Height",
                                input_type: "number",
                                oninput: move |value| edit(|f, v| f.height = v, value),
                            }
                        }
                        if let Some(message) = error_for(&errors, FormField::Dimensions) {
                            div { class: "error-message", "{message}" }
                        }
                    }
                    div { class: "form-row",
                        div { class: "form-group",
                            label { r#for: "delivery-speed", "🚀 Delivery Speed" }
                            select {
                                id: "delivery-speed",
                                value: form.delivery_speed.key(),
                                onchange: move |evt| {
                                    if let Some(speed) = DeliverySpeed::from_key(&evt.value()) {
                                        state.with_mut(|st| st.calculator.form.delivery_speed = speed);
                                    }
                                },
                                for speed in DeliverySpeed::ALL {
                                    option {
                                        value: speed.key(),
                                        selected: speed == form.delivery_speed,
                                        "{speed.label()}"
                                    }
                                }
                            }
                        }
                        div { class: "form-group checkbox-group",
                            label { class: "checkbox-label",
                                input {
                                    r#type: "checkbox",
                                    checked: form.insured,
                                    onchange: move |evt| {
                                        let insured = evt.checked();
                                        state.with_mut(|st| st.calculator.form.insured = insured);
                                    },
                                }
                                "🛡️ Include Insurance"
                            }
                            span { class: "checkbox-description", "Protect your shipment (2% of value)" }
                        }
                    }
                    div { class: "form-actions",
                        button { class: "btn btn-primary", r#type: "submit", "🧮 Calculate Estimate" }
                        button { class: "btn btn-secondary", r#type: "button", onclick: on_reset, "🔄 Reset Form" }
                    }
                }
                EstimatePanel {
                    estimate: panel.estimate.clone(),
                    show_details: panel.show_details,
                    on_toggle: move |_| state.with_mut(|st| st.calculator.toggle_details()),
                }
            }
        }
    }
}
