//! Mock shipment timeline. Every timestamp is derived from the `now` handed
//! in, so the same instant always yields the same seven events.

use time::{
    format_description::BorrowedFormatItem,
    macros::{format_description, time},
    Duration, OffsetDateTime, Time,
};

use super::entities::{EventState, ShipmentSnapshot, TrackingEvent};

const CLOCK_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour repr:12]:[minute] [period]");
const LONG_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");
const SHORT_DATE_TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[month repr:short] [day padding:none], [year], [hour repr:12]:[minute] [period]"
);

struct Milestone {
    status: &'static str,
    description: &'static str,
    day_offset: i64,
    at: Time,
    completed: bool,
    location: Option<&'static str>,
}

const MILESTONES: [Milestone; 7] = [
    Milestone {
        status: "Order Received",
        description: "We have received your shipment details",
        day_offset: -7,
        at: time!(9:30:45),
        completed: true,
        location: Some("New York, USA"),
    },
    Milestone {
        status: "Processing",
        description: "Your shipment is being processed at our facility",
        day_offset: -6,
        at: time!(14:15:22),
        completed: true,
        location: Some("New York, USA"),
    },
    Milestone {
        status: "Picked Up",
        description: "Your package has been collected by our courier",
        day_offset: -5,
        at: time!(10:45:18),
        completed: true,
        location: Some("New York, USA"),
    },
    Milestone {
        status: "In Transit",
        description: "Your shipment is on the way to destination",
        day_offset: -3,
        at: time!(8:20:33),
        completed: true,
        location: Some("In Transit"),
    },
    Milestone {
        status: "Customs Clearance",
        description: "Going through customs inspection",
        day_offset: 0,
        at: time!(11:30:00),
        completed: false,
        location: Some("London, UK"),
    },
    Milestone {
        status: "Out for Delivery",
        description: "Your shipment will arrive today",
        day_offset: 1,
        at: time!(9:00:00),
        completed: false,
        location: None,
    },
    Milestone {
        status: "Delivered",
        description: "Package has been delivered to recipient",
        day_offset: 2,
        at: time!(14:00:00),
        completed: false,
        location: None,
    },
];

/// Builds the seven-step history anchored on the calendar day of `now`.
pub fn generate_timeline(now: OffsetDateTime) -> Vec<TrackingEvent> {
    MILESTONES
        .iter()
        .map(|step| TrackingEvent {
            status: step.status,
            description: step.description,
            completed: step.completed,
            timestamp: now.replace_time(step.at) + Duration::days(step.day_offset),
            location: step.location,
        })
        .collect()
}

/// Canned shipment card returned for any tracking number that resolves.
pub fn mock_shipment(id: &str, now: OffsetDateTime) -> ShipmentSnapshot {
    ShipmentSnapshot {
        id: id.to_string(),
        origin: "New York, USA",
        destination: "London, UK",
        status: "In Transit",
        carrier: "GlobalShipp Express",
        weight: "25kg",
        dimensions: "40×30×20 cm",
        service_type: "Express International",
        reference: "ORD-789456",
        recipient: "John Smith",
        current_location: "Over the Atlantic Ocean",
        progress_pct: 65,
        estimated_delivery: now + Duration::days(2),
        last_update: now,
        events: generate_timeline(now),
    }
}

/// Relative label for an event time, by calendar day in `now`'s offset.
pub fn describe_event_time(timestamp: OffsetDateTime, now: OffsetDateTime) -> String {
    let local = timestamp.to_offset(now.offset());
    let days = (local.date() - now.date()).whole_days();
    let clock = format_with(local, CLOCK_FORMAT);

    match days {
        0 => format!("Today at {clock}"),
        -1 => format!("Yesterday at {clock}"),
        1 => format!("Tomorrow at {clock}"),
        -6..=-2 => format!("{} days ago at {clock}", -days),
        2..=6 => format!("In {days} days at {clock}"),
        _ => format_with(local, SHORT_DATE_TIME_FORMAT),
    }
}

/// `October 18, 2026`
pub fn long_date(value: OffsetDateTime) -> String {
    format_with(value, LONG_DATE_FORMAT)
}

/// `October 16, 2026, 12:00 PM`
pub fn long_date_time(value: OffsetDateTime) -> String {
    format!(
        "{}, {}",
        format_with(value, LONG_DATE_FORMAT),
        format_with(value, CLOCK_FORMAT)
    )
}

fn format_with(value: OffsetDateTime, items: &[BorrowedFormatItem<'_>]) -> String {
    value.format(items).unwrap_or_default()
}

/// Glyph shown in the timeline step bubble.
pub fn state_marker(state: EventState, index: usize) -> String {
    match state {
        EventState::Completed => "✓".to_string(),
        EventState::Scheduled => "→".to_string(),
        EventState::Pending => (index + 1).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    const NOW: OffsetDateTime = datetime!(2026-10-16 12:00:00 UTC);

    #[test]
    fn seven_events_in_chronological_order() {
        let events = generate_timeline(NOW);
        assert_eq!(events.len(), 7);
        assert!(events.windows(2).all(|pair| pair[0].timestamp < pair[1].timestamp));
        assert_eq!(events[0].status, "Order Received");
        assert_eq!(events[6].status, "Delivered");
    }

    #[test]
    fn offsets_follow_fixed_day_deltas() {
        let events = generate_timeline(NOW);
        assert_eq!(events[0].timestamp, datetime!(2026-10-09 9:30:45 UTC));
        assert_eq!(events[1].timestamp, datetime!(2026-10-10 14:15:22 UTC));
        assert_eq!(events[2].timestamp, datetime!(2026-10-11 10:45:18 UTC));
        assert_eq!(events[3].timestamp, datetime!(2026-10-13 8:20:33 UTC));
        assert_eq!(events[4].timestamp, datetime!(2026-10-16 11:30:00 UTC));
        assert_eq!(events[5].timestamp, datetime!(2026-10-17 9:00:00 UTC));
        assert_eq!(events[6].timestamp, datetime!(2026-10-18 14:00:00 UTC));
    }

    #[test]
    fn regenerating_later_shifts_every_event() {
        let first = generate_timeline(NOW);
        let later = generate_timeline(NOW + Duration::days(3));
        for (a, b) in first.iter().zip(&later) {
            assert_eq!(b.timestamp - a.timestamp, Duration::days(3));
        }
    }

    #[test]
    fn completion_is_derived_at_read_time() {
        let events = generate_timeline(NOW);
        let states: Vec<_> = events.iter().map(|event| event.state_at(NOW)).collect();
        assert_eq!(
            states,
            [
                EventState::Completed,
                EventState::Completed,
                EventState::Completed,
                EventState::Completed,
                EventState::Pending,
                EventState::Scheduled,
                EventState::Scheduled,
            ]
        );

        // Viewed before the event happened, a stored `completed` flag is not trusted.
        let earlier = datetime!(2026-10-12 0:00 UTC);
        assert_eq!(events[3].state_at(earlier), EventState::Scheduled);
    }

    #[test]
    fn customs_is_scheduled_before_its_time_of_day() {
        let morning = datetime!(2026-10-16 8:00 UTC);
        let events = generate_timeline(morning);
        assert_eq!(events[4].state_at(morning), EventState::Scheduled);
    }

    #[test]
    fn relative_labels() {
        let events = generate_timeline(NOW);
        assert_eq!(describe_event_time(events[4].timestamp, NOW), "Today at 11:30 AM");
        assert_eq!(describe_event_time(events[3].timestamp, NOW), "3 days ago at 08:20 AM");
        assert_eq!(describe_event_time(events[5].timestamp, NOW), "Tomorrow at 09:00 AM");
        assert_eq!(describe_event_time(events[6].timestamp, NOW), "In 2 days at 02:00 PM");
        assert_eq!(describe_event_time(events[0].timestamp, NOW), "Oct 9, 2026, 09:30 AM");
        assert_eq!(
            describe_event_time(datetime!(2026-10-15 23:59 UTC), NOW),
            "Yesterday at 11:59 PM"
        );
    }

    #[test]
    fn mock_shipment_is_anchored_on_now() {
        let shipment = mock_shipment("GS123456789", NOW);
        assert_eq!(shipment.id, "GS123456789");
        assert_eq!(long_date(shipment.estimated_delivery), "October 18, 2026");
        assert_eq!(long_date_time(shipment.last_update), "October 16, 2026, 12:00 PM");
        assert_eq!(shipment.events, generate_timeline(NOW));
    }

    #[test]
    fn markers() {
        assert_eq!(state_marker(EventState::Completed, 0), "✓");
        assert_eq!(state_marker(EventState::Scheduled, 5), "→");
        assert_eq!(state_marker(EventState::Pending, 4), "5");
    }
}
