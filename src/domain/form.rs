//! Input validation for the calculator and tracking forms.
//!
//! Raw field text is kept as typed so the inputs can be re-rendered verbatim;
//! `validate` turns it into a typed request or a list of per-field errors.

use thiserror::Error;

use super::entities::{CargoType, DeliverySpeed, Dimensions, ShipmentRequest};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Origin,
    Destination,
    Weight,
    Dimensions,
    TrackingNumber,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Origin => "Origin",
            FormField::Destination => "Destination",
            FormField::Weight => "Weight",
            FormField::Dimensions => "Dimensions",
            FormField::TrackingNumber => "Tracking number",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Missing(FormField),
    #[error("Weight must be a positive number")]
    InvalidWeight,
    #[error("Dimensions must be positive numbers")]
    InvalidDimensions,
    #[error("Enter length, width and height together")]
    PartialDimensions,
    #[error("Please enter a tracking number")]
    MissingTrackingNumber,
}

impl FormError {
    pub fn field(&self) -> FormField {
        match self {
            FormError::Missing(field) => *field,
            FormError::InvalidWeight => FormField::Weight,
            FormError::InvalidDimensions | FormError::PartialDimensions => FormField::Dimensions,
            FormError::MissingTrackingNumber => FormField::TrackingNumber,
        }
    }
}

/// First error message for `field`, if any. Used to render inline hints.
pub fn error_for(errors: &[FormError], field: FormField) -> Option<String> {
    errors
        .iter()
        .find(|err| err.field() == field)
        .map(ToString::to_string)
}

/// Calculator inputs exactly as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalculatorForm {
    pub origin: String,
    pub destination: String,
    pub weight: String,
    pub length: String,
    pub width: String,
    pub height: String,
    pub cargo_type: CargoType,
    pub delivery_speed: DeliverySpeed,
    pub insured: bool,
}

impl CalculatorForm {
    /// Collects every field error at once so the form can flag them together.
    pub fn validate(&self) -> Result<ShipmentRequest, Vec<FormError>> {
        let mut errors = Vec::new();

        let origin = self.origin.trim();
        if origin.is_empty() {
            errors.push(FormError::Missing(FormField::Origin));
        }
        let destination = self.destination.trim();
        if destination.is_empty() {
            errors.push(FormError::Missing(FormField::Destination));
        }

        let weight_kg = match parse_positive(&self.weight) {
            Ok(value) => Some(value),
            Err(NumberInput::Blank) => {
                errors.push(FormError::Missing(FormField::Weight));
                None
            }
            Err(NumberInput::Invalid) => {
                errors.push(FormError::InvalidWeight);
                None
            }
        };

        let dimensions = self.dimensions().unwrap_or_else(|err| {
            errors.push(err);
            None
        });

        match weight_kg {
            Some(weight_kg) if errors.is_empty() => Ok(ShipmentRequest {
                origin: origin.to_string(),
                destination: destination.to_string(),
                weight_kg,
                dimensions,
                cargo_type: self.cargo_type,
                delivery_speed: self.delivery_speed,
                insured: self.insured,
            }),
            _ => Err(errors),
        }
    }

    fn dimensions(&self) -> Result<Option<Dimensions>, FormError> {
        let parts = [&self.length, &self.width, &self.height];
        let filled = parts.iter().filter(|raw| !raw.trim().is_empty()).count();
        if filled == 0 {
            return Ok(None);
        }
        if filled < parts.len() {
            return Err(FormError::PartialDimensions);
        }

        let mut values = [0.0_f64; 3];
        for (slot, raw) in values.iter_mut().zip(parts) {
            *slot = parse_positive(raw).map_err(|_| FormError::InvalidDimensions)?;
        }

        Ok(Some(Dimensions {
            length_cm: values[0],
            width_cm: values[1],
            height_cm: values[2],
        }))
    }
}

/// Trims the tracking number and rejects blank input.
pub fn validate_tracking_number(raw: &str) -> Result<&str, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(FormError::MissingTrackingNumber)
    } else {
        Ok(trimmed)
    }
}

enum NumberInput {
    Blank,
    Invalid,
}

fn parse_positive(raw: &str) -> Result<f64, NumberInput> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NumberInput::Blank);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(NumberInput::Invalid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CalculatorForm {
        CalculatorForm {
            origin: " Afghanistan ".to_string(),
            destination: "Germany".to_string(),
            weight: "25".to_string(),
            ..CalculatorForm::default()
        }
    }

    #[test]
    fn valid_form_builds_request() {
        let request = filled().validate().unwrap();
        assert_eq!(request.origin, "Afghanistan");
        assert_eq!(request.destination, "Germany");
        assert_eq!(request.weight_kg, 25.0);
        assert_eq!(request.dimensions, None);
        assert_eq!(request.cargo_type, CargoType::General);
        assert_eq!(request.delivery_speed, DeliverySpeed::Standard);
        assert!(!request.insured);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = CalculatorForm::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FormError::Missing(FormField::Origin),
                FormError::Missing(FormField::Destination),
                FormError::Missing(FormField::Weight),
            ]
        );
        assert_eq!(errors[0].to_string(), "Origin is required");
    }

    #[test]
    fn weight_must_be_positive() {
        for raw in ["0", "-3", "abc", "NaN", "inf"] {
            let mut form = filled();
            form.weight = raw.to_string();
            assert_eq!(form.validate().unwrap_err(), vec![FormError::InvalidWeight], "{raw}");
        }
    }

    #[test]
    fn dimensions_all_or_nothing() {
        let mut form = filled();
        form.length = "40".to_string();
        form.width = "30".to_string();
        assert_eq!(form.validate().unwrap_err(), vec![FormError::PartialDimensions]);

        form.height = "20".to_string();
        let dims = form.validate().unwrap().dimensions.unwrap();
        assert_eq!(dims.volume_cm3(), 24_000.0);
    }

    #[test]
    fn dimensions_must_be_positive() {
        let mut form = filled();
        form.length = "40".to_string();
        form.width = "0".to_string();
        form.height = "20".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, vec![FormError::InvalidDimensions]);
        assert_eq!(
            error_for(&errors, FormField::Dimensions).as_deref(),
            Some("Dimensions must be positive numbers")
        );
        assert_eq!(error_for(&errors, FormField::Weight), None);
    }

    #[test]
    fn tracking_number_is_trimmed() {
        assert_eq!(validate_tracking_number("  GS123456789 "), Ok("GS123456789"));
        assert_eq!(
            validate_tracking_number("   "),
            Err(FormError::MissingTrackingNumber)
        );
    }
}
