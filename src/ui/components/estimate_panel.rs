use dioxus::prelude::*;

use crate::domain::EstimateResult;

#[component]
pub fn EstimatePanel(
    estimate: Option<EstimateResult>,
    show_details: bool,
    on_toggle: EventHandler<()>,
) -> Element {
    let toggle_label = if show_details { "Hide Details" } else { "Show Details" };
    let toggle_class = if show_details { "btn-details active" } else { "btn-details" };

    rsx! {
        div { class: "estimate-result",
            div { class: "result-header",
                h3 { "Shipping Estimate" }
                button {
                    class: "{toggle_class}",
                    r#type: "button",
                    onclick: move |_| on_toggle.call(()),
                    "{toggle_label}"
                }
            }
            match estimate {
                Some(result) => rsx! {
                    div { class: "total-cost",
                        span { class: "cost-label", "Total Estimated Cost" }
                        span { class: "cost-value", "{result.total_display()}" }
                    }
                    if show_details {
                        div { class: "cost-breakdown",
                            for line in result.breakdown() {
                                div { class: "breakdown-item",
                                    span { "{line.label}" }
                                    span { "{line.value}" }
                                }
                            }
                        }
                    }
                    p { class: "estimate-disclaimer",
                        "This is an approximate calculation. Final cost may vary based on actual measurements, customs fees, and fuel surcharges."
                    }
                },
                None => rsx! {
                    div { class: "no-estimate",
                        div { class: "placeholder-icon", "🧮" }
                        p { "Fill out the form to calculate your shipping cost" }
                    }
                },
            }
        }
    }
}
