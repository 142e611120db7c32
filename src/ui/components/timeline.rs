use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::domain::{
    tracking::{describe_event_time, state_marker},
    EventState, TrackingEvent,
};

/// Shipment history. Step state is worked out against `now` on every render.
#[component]
pub fn Timeline(events: Vec<TrackingEvent>, now: OffsetDateTime) -> Element {
    let steps = events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let state = event.state_at(now);
            let (class, prefix) = match state {
                EventState::Completed => ("timeline-step completed", ""),
                EventState::Scheduled => ("timeline-step future", "Scheduled: "),
                EventState::Pending => ("timeline-step pending", ""),
            };
            StepView {
                class,
                marker: state_marker(state, index),
                status: event.status,
                time_label: format!("{prefix}{}", describe_event_time(event.timestamp, now)),
                description: event.description,
                location: event.location,
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "tracking-timeline",
            h4 { "Shipment History" }
            div { class: "timeline",
                for step in steps {
                    div { class: "{step.class}",
                        div { class: "step-marker", "{step.marker}" }
                        div { class: "step-content",
                            div { class: "step-header",
                                h5 { "{step.status}" }
                                span { class: "step-time", "{step.time_label}" }
                            }
                            p { "{step.description}" }
                            if let Some(location) = step.location {
                                div { class: "step-location", "📍 {location}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

struct StepView {
    class: &'static str,
    marker: String,
    status: &'static str,
    time_label: String,
    description: &'static str,
    location: Option<&'static str>,
}
