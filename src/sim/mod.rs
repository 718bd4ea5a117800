pub mod event;
pub mod runner;
pub mod stepper;

pub use event::SeparationEvent;
pub use runner::{simulate, simulate_with, FlightLog, Sample, TelemetrySink};
pub use stepper::step;
