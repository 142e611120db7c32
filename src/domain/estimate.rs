use tracing::debug;

use super::entities::{BreakdownLine, EstimateResult, ShipmentRequest};

pub const BASE_RATE: f64 = 75.0;
pub const RATE_PER_KG: f64 = 1.8;
pub const DIMENSIONAL_RATE_PER_KG: f64 = 0.5;
pub const INSURANCE_RATE: f64 = 0.02;
/// Flat stand-in for distance pricing; applied whenever both ends are filled in.
pub const DISTANCE_FACTOR: f64 = 1.7;

/// Prices a validated shipment. Never fails; callers validate first.
pub fn estimate(request: &ShipmentRequest) -> EstimateResult {
    let weight_charge = request.weight_kg * RATE_PER_KG;

    let dimensional_weight_charge = request
        .dimensions
        .map(|dims| (dims.dimensional_weight_kg() - request.weight_kg).max(0.0) * DIMENSIONAL_RATE_PER_KG)
        .unwrap_or(0.0);

    let distance_factor = if !request.origin.is_empty() && !request.destination.is_empty() {
        DISTANCE_FACTOR
    } else {
        1.0
    };

    let type_multiplier = request.cargo_type.multiplier();
    let speed_multiplier = request.delivery_speed.multiplier();

    let insurance_cost = if request.insured {
        (BASE_RATE + weight_charge) * INSURANCE_RATE
    } else {
        0.0
    };

    let subtotal = BASE_RATE + weight_charge + dimensional_weight_charge;
    let total = subtotal * distance_factor * type_multiplier * speed_multiplier + insurance_cost;

    debug!(
        weight_kg = request.weight_kg,
        cargo = request.cargo_type.key(),
        speed = request.delivery_speed.key(),
        insured = request.insured,
        total,
        "computed shipping estimate"
    );

    EstimateResult {
        base_rate: BASE_RATE,
        weight_charge,
        dimensional_weight_charge,
        distance_factor,
        type_multiplier,
        speed_multiplier,
        insurance_cost,
        subtotal,
        total,
    }
}

/// Rounds half-up to whole cents, on the binary `f64` value rather than its
/// decimal spelling: `1.005` is stored just below and renders as `$1.00`.
/// Every rendered amount goes through here.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format_money(value: f64) -> String {
    format!("${:.2}", round_cents(value))
}

pub fn format_factor(value: f64) -> String {
    format!("{value}x")
}

impl EstimateResult {
    pub fn total_display(&self) -> String {
        format_money(self.total)
    }

    /// Rows shown under "Show Details". Dimensional weight and insurance are
    /// only listed when they contribute something.
    pub fn breakdown(&self) -> Vec<BreakdownLine> {
        let mut lines = vec![
            BreakdownLine {
                label: "Base Rate",
                value: format_money(self.base_rate),
            },
            BreakdownLine {
                label: "Weight Charge",
                value: format_money(self.weight_charge),
            },
        ];

        if self.dimensional_weight_charge > 0.0 {
            lines.push(BreakdownLine {
                label: "Dimensional Weight",
                value: format_money(self.dimensional_weight_charge),
            });
        }

        lines.push(BreakdownLine {
            label: "Distance Factor",
            value: format_factor(self.distance_factor),
        });
        lines.push(BreakdownLine {
            label: "Cargo Type Multiplier",
            value: format_factor(self.type_multiplier),
        });
        lines.push(BreakdownLine {
            label: "Delivery Speed",
            value: format_factor(self.speed_multiplier),
        });

        if self.insurance_cost > 0.0 {
            lines.push(BreakdownLine {
                label: "Insurance",
                value: format_money(self.insurance_cost),
            });
        }

        lines
    }
}
