use dioxus::{core::spawn_forever, prelude::*};

use crate::{
    domain::{
        tracking::{long_date, long_date_time},
        LookupStatus, ShipmentSnapshot, SiteState,
    },
    infra::mock_desk::MockDesk,
    ui::components::{
        field::TextField,
        timeline::Timeline,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    util::clock,
};

#[component]
pub fn TrackingPage() -> Element {
    let mut state = use_context::<Signal<SiteState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let desk = use_context::<MockDesk>();

    let panel = state.with(|st| st.tracking.clone());
    let loading = panel.is_loading();
    let error = panel.error().map(str::to_string);

    let examples = {
        let policy = desk.policy();
        format!(
            "Example tracking numbers: GS123456789, EXP789123, {}123 (simulates error)",
            policy.unavailable_prefix
        )
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        launch_lookup(state, toasts, desk.clone());
    };

    rsx! {
        section { id: "tracking", class: "tracking",
            div { class: "section-header",
                h2 { "Track Your Shipment" }
                p { class: "section-subtitle", "Real-time updates for your peace of mind" }
            }
            div { class: "tracking-container",
                form { class: "tracking-card", onsubmit: on_submit,
                    h3 { "Enter Tracking Details" }
                    TextField {
                        id: "tracking-number",
                        label: "📦 Tracking Number",
                        value: panel.input.clone(),
                        placeholder: "e.g., GS123456789",
                        error: error,
                        disabled: loading,
                        oninput: move |value: String| state.with_mut(|st| st.tracking.edit(value)),
                    }
                    button {
                        class: "btn btn-primary track-btn",
                        r#type: "submit",
                        disabled: loading,
                        if loading { "⏳ Tracking..." } else { "🔍 Track Shipment" }
                    }
                    p { class: "tracking-examples", "{examples}" }
                }
                if let LookupStatus::Found(snapshot) = &panel.status {
                    ShipmentCard { snapshot: snapshot.clone() }
                }
            }
        }
    }
}

/// Starts a lookup for the number currently typed in the tracking panel.
///
/// Runs on the root scope, so it still reaches `finish` after the tracking
/// page unmounts.
pub fn launch_lookup(
    mut state: Signal<SiteState>,
    toasts: Signal<Vec<ToastMessage>>,
    desk: MockDesk,
) {
    let Ok(number) = state.with_mut(|st| st.tracking.begin()) else {
        return;
    };
    spawn_forever(async move {
        let outcome = desk.track(&number, clock::now()).await;
        match &outcome {
            Ok(_) => push_toast(toasts, ToastKind::Success, format!("Found shipment {number}.")),
            Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
        }
        state.with_mut(|st| st.tracking.finish(outcome));
    });
}

#[component]
fn ShipmentCard(snapshot: ShipmentSnapshot) -> Element {
    let now = clock::now();
    let progress = format!("{}%", snapshot.progress_pct);
    let overview = [
        ("Tracking Number", snapshot.id.clone()),
        ("Estimated Delivery", long_date(snapshot.estimated_delivery)),
        ("Last Update", long_date_time(snapshot.last_update)),
    ];
    let sections: [(&str, [(&str, &str); 3]); 3] = [
        (
            "Route Information",
            [
                ("📤 Origin", snapshot.origin),
                ("📥 Destination", snapshot.destination),
                ("📍 Current Location", snapshot.current_location),
            ],
        ),
        (
            "Shipment Details",
            [
                ("⚖️ Weight", snapshot.weight),
                ("📏 Dimensions", snapshot.dimensions),
                ("🚚 Service Type", snapshot.service_type),
            ],
        ),
        (
            "Additional Information",
            [
                ("🏢 Carrier", snapshot.carrier),
                ("📋 Reference", snapshot.reference),
                ("👤 Recipient", snapshot.recipient),
            ],
        ),
    ];

    rsx! {
        div { class: "tracking-results",
            div { class: "results-header",
                h3 { "Shipment Tracking Details" }
                div { class: "status-badge status-in-transit", "{snapshot.status}" }
            }
            div { class: "shipment-overview",
                for (label, value) in overview {
                    div { class: "overview-item",
                        div { class: "overview-label", "{label}" }
                        div { class: "overview-value", "{value}" }
                    }
                }
            }
            div { class: "progress-container",
                div { class: "progress-header",
                    span { "Shipment Progress" }
                    span { "{progress} Complete" }
                }
                div { class: "progress-bar",
                    div { class: "progress-fill", style: "width: {progress}" }
                }
                div { class: "progress-labels",
                    span { "{snapshot.origin}" }
                    span { "{snapshot.destination}" }
                }
            }
            div { class: "details-grid",
                for (title, rows) in sections {
                    div { class: "detail-section",
                        h4 { "{title}" }
                        for (label, value) in rows {
                            div { class: "detail-item",
                                span { class: "detail-label", "{label}" }
                                span { class: "detail-value", "{value}" }
                            }
                        }
                    }
                }
            }
            Timeline { events: snapshot.events.clone(), now: now }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, time::Duration};

    use dioxus::dioxus_core::NoOpMutations;

    use super::*;
    use crate::infra::mock_desk::SimulationPolicy;

    thread_local! {
        static HOST: Cell<Option<(Signal<SiteState>, Signal<bool>)>> = const { Cell::new(None) };
    }

    #[component]
    fn LookupHost() -> Element {
        use_context_provider(|| {
            MockDesk::new(SimulationPolicy {
                latency: Duration::from_millis(50),
                ..SimulationPolicy::default()
            })
        });
        let state = use_signal(|| {
            let mut state = SiteState::default();
            state.tracking.edit("GS123456789".to_string());
            state
        });
        use_context_provider(|| state);
        let toasts = use_signal(Vec::<ToastMessage>::new);
        use_context_provider(|| toasts);
        let page_open = use_signal(|| true);
        HOST.with(|slot| slot.set(Some((state, page_open))));

        let loading = state.read().tracking.is_loading();
        rsx! {
            p { "loading: {loading}" }
            if page_open() {
                SubmittingPage {}
            }
        }
    }

    // Stands in for the tracking page right after the user hits submit.
    #[component]
    fn SubmittingPage() -> Element {
        let state = use_context::<Signal<SiteState>>();
        let toasts = use_context::<Signal<Vec<ToastMessage>>>();
        let desk = use_context::<MockDesk>();
        use_hook(move || launch_lookup(state, toasts, desk));
        rsx! { p { "tracking" } }
    }

    #[tokio::test]
    async fn lookup_finishes_after_leaving_the_page() {
        let mut dom = VirtualDom::new(LookupHost);
        dom.rebuild_in_place();
        let (state, mut page_open) = HOST.with(|slot| slot.get()).expect("host mounted");
        assert!(dom.in_runtime(|| state.peek().tracking.is_loading()));

        dom.in_runtime(|| page_open.set(false));
        dom.render_immediate(&mut NoOpMutations);

        tokio::time::timeout(Duration::from_secs(2), async {
            while dom.in_runtime(|| state.peek().tracking.is_loading()) {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
            }
        })
        .await
        .expect("lookup should not stay in Loading");

        let status = dom.in_runtime(|| state.peek().tracking.status.clone());
        assert!(matches!(status, LookupStatus::Found(ref snapshot) if snapshot.id == "GS123456789"));
    }
}
