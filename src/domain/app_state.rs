use tracing::info;

use super::{
    coverage::{check_route, RouteAvailability},
    entities::{EstimateResult, ShipmentSnapshot},
    estimate::estimate,
    form::{validate_tracking_number, CalculatorForm, FormError},
};
use crate::infra::mock_desk::TrackingError;

/// UI state for the whole page; one flat block per section.
#[derive(Clone, Debug, Default)]
pub struct SiteState {
    pub calculator: CalculatorPanel,
    pub tracking: TrackingPanel,
    pub coverage: CoveragePanel,
}

#[derive(Clone, Debug, Default)]
pub struct CalculatorPanel {
    pub form: CalculatorForm,
    pub errors: Vec<FormError>,
    pub estimate: Option<EstimateResult>,
    pub show_details: bool,
}

impl CalculatorPanel {
    /// Validates the form and, if it passes, replaces the current estimate.
    /// A failed validation keeps the previous estimate on screen.
    pub fn submit(&mut self) -> bool {
        match self.form.validate() {
            Ok(request) => {
                let result = estimate(&request);
                info!(
                    origin = %request.origin,
                    destination = %request.destination,
                    total = %result.total_display(),
                    "estimate ready"
                );
                self.errors.clear();
                self.estimate = Some(result);
                true
            }
            Err(errors) => {
                info!(count = errors.len(), "calculator form rejected");
                self.errors = errors;
                false
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_details(&mut self) {
        self.show_details = !self.show_details;
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LookupStatus {
    #[default]
    Idle,
    Loading,
    Found(ShipmentSnapshot),
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct TrackingPanel {
    pub input: String,
    pub status: LookupStatus,
}

impl TrackingPanel {
    /// Editing the number drops whatever the last lookup showed.
    pub fn edit(&mut self, value: String) {
        self.input = value;
        self.status = LookupStatus::Idle;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LookupStatus::Loading)
    }

    /// Returns the trimmed number to look up, or records the validation error.
    pub fn begin(&mut self) -> Result<String, FormError> {
        match validate_tracking_number(&self.input) {
            Ok(number) => {
                let number = number.to_string();
                self.status = LookupStatus::Loading;
                Ok(number)
            }
            Err(err) => {
                self.status = LookupStatus::Failed(err.to_string());
                Err(err)
            }
        }
    }

    pub fn finish(&mut self, outcome: Result<ShipmentSnapshot, TrackingError>) {
        self.status = match outcome {
            Ok(snapshot) => LookupStatus::Found(snapshot),
            Err(err) => LookupStatus::Failed(err.to_string()),
        };
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LookupStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CoveragePanel {
    pub from: String,
    pub to: String,
    pub availability: Option<RouteAvailability>,
}

impl CoveragePanel {
    /// Only records a verdict once both ends are picked.
    pub fn check(&mut self) {
        match check_route(&self.from, &self.to) {
            RouteAvailability::Incomplete => {}
            verdict => self.availability = Some(verdict),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::domain::{form::FormField, tracking::mock_shipment};

    #[test]
    fn calculator_submit_and_reset() {
        let mut panel = CalculatorPanel::default();
        assert!(!panel.submit());
        assert_eq!(panel.errors.len(), 3);
        assert!(panel.estimate.is_none());

        panel.form.origin = "A".to_string();
        panel.form.destination = "B".to_string();
        panel.form.weight = "25".to_string();
        assert!(panel.submit());
        assert!(panel.errors.is_empty());
        assert_eq!(
            panel.estimate.as_ref().map(EstimateResult::total_display).as_deref(),
            Some("$204.00")
        );

        panel.toggle_details();
        assert!(panel.show_details);
        panel.reset();
        assert!(panel.estimate.is_none());
        assert!(!panel.show_details);
        assert_eq!(panel.form, CalculatorForm::default());
    }

    #[test]
    fn rejected_submit_keeps_previous_estimate() {
        let mut panel = CalculatorPanel::default();
        panel.form.origin = "A".to_string();
        panel.form.destination = "B".to_string();
        panel.form.weight = "25".to_string();
        assert!(panel.submit());

        panel.form.weight.clear();
        assert!(!panel.submit());
        assert!(panel.estimate.is_some());
        assert_eq!(panel.errors[0].field(), FormField::Weight);
    }

    #[test]
    fn tracking_flow() {
        let mut panel = TrackingPanel::default();
        assert_eq!(panel.begin(), Err(FormError::MissingTrackingNumber));
        assert_eq!(panel.error(), Some("Please enter a tracking number"));

        panel.edit(" GS1 ".to_string());
        assert_eq!(panel.error(), None);
        assert_eq!(panel.begin().as_deref(), Ok("GS1"));
        assert!(panel.is_loading());

        let now = datetime!(2026-10-16 12:00 UTC);
        panel.finish(Ok(mock_shipment("GS1", now)));
        assert!(matches!(panel.status, LookupStatus::Found(ref snap) if snap.id == "GS1"));

        panel.edit("ERROR1".to_string());
        assert_eq!(panel.status, LookupStatus::Idle);
        panel.finish(Err(TrackingError::NotFound));
        assert_eq!(panel.error(), Some("Tracking number not found in our system"));
    }

    #[test]
    fn coverage_waits_for_both_ends() {
        let mut panel = CoveragePanel::default();
        panel.from = "Afghanistan".to_string();
        panel.check();
        assert_eq!(panel.availability, None);

        panel.to = "Germany".to_string();
        panel.check();
        assert_eq!(panel.availability, Some(RouteAvailability::Available));

        panel.to = "Portugal".to_string();
        panel.check();
        assert_eq!(panel.availability, Some(RouteAvailability::Unavailable));
    }
}
