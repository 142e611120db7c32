pub mod calculator;
pub mod coverage;
pub mod tracking;

pub use calculator::CalculatorPage;
pub use coverage::CoveragePage;
pub use tracking::TrackingPage;
