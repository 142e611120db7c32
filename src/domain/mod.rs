//! Pricing, validation and mock tracking logic for the storefront.

pub mod app_state;
pub mod coverage;
pub mod entities;
pub mod estimate;
pub mod form;
pub mod tracking;

#[allow(unused_imports)]
pub use app_state::{CalculatorPanel, CoveragePanel, LookupStatus, SiteState, TrackingPanel};
#[allow(unused_imports)]
pub use coverage::{check_route, RouteAvailability, POPULAR_ROUTES, REGIONS};
#[allow(unused_imports)]
pub use entities::{
    BreakdownLine, CargoType, DeliverySpeed, Dimensions, EstimateResult, EventState,
    ShipmentRequest, ShipmentSnapshot, TrackingEvent,
};
#[allow(unused_imports)]
pub use estimate::{estimate, format_money};
#[allow(unused_imports)]
pub use form::{error_for, CalculatorForm, FormError, FormField};
