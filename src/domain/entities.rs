use time::OffsetDateTime;

/// Cargo category picked on the calculator form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CargoType {
    #[default]
    General,
    Perishable,
    Hazardous,
    Fragile,
    Electronics,
}

impl CargoType {
    pub const ALL: [CargoType; 5] = [
        CargoType::General,
        CargoType::Perishable,
        CargoType::Hazardous,
        CargoType::Fragile,
        CargoType::Electronics,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CargoType::General => "general",
            CargoType::Perishable => "perishable",
            CargoType::Hazardous => "hazardous",
            CargoType::Fragile => "fragile",
            CargoType::Electronics => "electronics",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CargoType::General => "General Merchandise",
            CargoType::Perishable => "Perishable Goods",
            CargoType::Hazardous => "Hazardous Materials",
            CargoType::Fragile => "Fragile Items",
            CargoType::Electronics => "Electronics",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            CargoType::Hazardous => 2.8,
            CargoType::Perishable => 1.9,
            CargoType::Fragile => 1.6,
            CargoType::General | CargoType::Electronics => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeliverySpeed {
    Economy,
    #[default]
    Standard,
    Express,
    Priority,
}

impl DeliverySpeed {
    pub const ALL: [DeliverySpeed; 4] = [
        DeliverySpeed::Economy,
        DeliverySpeed::Standard,
        DeliverySpeed::Express,
        DeliverySpeed::Priority,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DeliverySpeed::Economy => "economy",
            DeliverySpeed::Standard => "standard",
            DeliverySpeed::Express => "express",
            DeliverySpeed::Priority => "priority",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliverySpeed::Economy => "Economy (10-15 days)",
            DeliverySpeed::Standard => "Standard (7-10 days)",
            DeliverySpeed::Express => "Express (3-5 days)",
            DeliverySpeed::Priority => "Priority (1-2 days)",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|speed| speed.key() == key)
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            DeliverySpeed::Express => 2.2,
            DeliverySpeed::Priority => 1.5,
            DeliverySpeed::Standard | DeliverySpeed::Economy => 1.0,
        }
    }
}

/// Package measurements in centimetres. Always complete; partial input is
/// rejected by the form before a `Dimensions` is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

impl Dimensions {
    /// Volumetric divisor used by carriers (cm³ per kg).
    pub const VOLUMETRIC_DIVISOR: f64 = 5000.0;

    pub fn volume_cm3(&self) -> f64 {
        self.length_cm * self.width_cm * self.height_cm
    }

    pub fn dimensional_weight_kg(&self) -> f64 {
        self.volume_cm3() / Self::VOLUMETRIC_DIVISOR
    }
}

/// A validated shipment description fed to the estimate engine.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipmentRequest {
    pub origin: String,
    pub destination: String,
    pub weight_kg: f64,
    pub dimensions: Option<Dimensions>,
    pub cargo_type: CargoType,
    pub delivery_speed: DeliverySpeed,
    pub insured: bool,
}

/// Price breakdown for one shipment. Values are kept unrounded; rounding
/// only happens when rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct EstimateResult {
    pub base_rate: f64,
    pub weight_charge: f64,
    pub dimensional_weight_charge: f64,
    pub distance_factor: f64,
    pub type_multiplier: f64,
    pub speed_multiplier: f64,
    pub insurance_cost: f64,
    pub subtotal: f64,
    pub total: f64,
}

/// One labelled row of the rendered estimate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakdownLine {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackingEvent {
    pub status: &'static str,
    pub description: &'static str,
    /// Stored flag only; use `state_at` for what to display.
    pub completed: bool,
    pub timestamp: OffsetDateTime,
    pub location: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventState {
    Completed,
    Pending,
    Scheduled,
}

impl TrackingEvent {
    pub fn state_at(&self, now: OffsetDateTime) -> EventState {
        if self.timestamp > now {
            EventState::Scheduled
        } else if self.completed {
            EventState::Completed
        } else {
            EventState::Pending
        }
    }
}

/// Everything shown on the tracking card after a successful lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipmentSnapshot {
    pub id: String,
    pub origin: &'static str,
    pub destination: &'static str,
    pub status: &'static str,
    pub carrier: &'static str,
    pub weight: &'static str,
    pub dimensions: &'static str,
    pub service_type: &'static str,
    pub reference: &'static str,
    pub recipient: &'static str,
    pub current_location: &'static str,
    pub progress_pct: u8,
    pub estimated_delivery: OffsetDateTime,
    pub last_update: OffsetDateTime,
    pub events: Vec<TrackingEvent>,
}
