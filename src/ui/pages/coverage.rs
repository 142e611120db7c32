use dioxus::prelude::*;

use crate::domain::{coverage::all_countries, RouteAvailability, SiteState, POPULAR_ROUTES, REGIONS};

#[component]
pub fn CoveragePage() -> Element {
    let mut state = use_context::<Signal<SiteState>>();
    let panel = state.with(|st| st.coverage.clone());
    let countries: Vec<&'static str> = all_countries().collect();
    let countries_to = countries.clone();

    let verdict = panel.availability.map(|availability| match availability {
        RouteAvailability::Available => (
            "availability-result available",
            format!("✅ We ship from {} to {}.", panel.from, panel.to),
        ),
        _ => (
            "availability-result unavailable",
            format!(
                "❌ {} → {} is not served yet. Contact sales for partner options.",
                panel.from, panel.to
            ),
        ),
    });

    let routes = POPULAR_ROUTES
        .iter()
        .map(|route| {
            let (class, status) = if route.available {
                ("route available", "Available")
            } else {
                ("route unavailable", "Coming soon")
            };
            (class, format!("{} → {}", route.from, route.to), status)
        })
        .collect::<Vec<_>>();
    let regions = REGIONS
        .iter()
        .map(|region| (region.name, region.countries.join(", ")))
        .collect::<Vec<_>>();

    rsx! {
        section { id: "coverage", class: "coverage",
            div { class: "section-header",
                h2 { "Global Network Coverage" }
                p { class: "section-subtitle", "Serving businesses across 150+ countries with reliable logistics solutions" }
            }
            div { class: "availability-checker",
                h3 { "Check Service Availability" }
                div { class: "form-row",
                    div { class: "form-group",
                        label { r#for: "coverage-from", "From" }
                        select {
                            id: "coverage-from",
                            onchange: move |evt| state.with_mut(|st| st.coverage.from = evt.value()),
                            option { value: "", "Select origin" }
                            for country in countries {
                                option { value: country, selected: panel.from == country, "{country}" }
                            }
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "coverage-to", "To" }
                        select {
                            id: "coverage-to",
                            onchange: move |evt| state.with_mut(|st| st.coverage.to = evt.value()),
                            option { value: "", "Select destination" }
                            for country in countries_to {
                                option { value: country, selected: panel.to == country, "{country}" }
                            }
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| state.with_mut(|st| st.coverage.check()),
                    "Check Availability"
                }
                if let Some((class, message)) = verdict {
                    div { class: "{class}", "{message}" }
                }
            }
            div { class: "popular-routes",
                h3 { "Popular Routes" }
                ul {
                    for (class, label, status) in routes {
                        li { class: "{class}",
                            "{label}"
                            span { class: "route-status", "{status}" }
                        }
                    }
                }
            }
            div { class: "regions",
                for (name, countries) in regions {
                    div { class: "region-card",
                        h4 { "{name}" }
                        p { "{countries}" }
                    }
                }
            }
        }
    }
}
