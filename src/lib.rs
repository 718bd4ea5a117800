pub mod config;
pub mod io;
pub mod math;
pub mod physics;
pub mod sim;
pub mod state;
pub mod vehicle;

pub use config::{presets, Config, ConfigError, Planet};
pub use sim::{simulate, simulate_with, FlightLog, Sample, SeparationEvent, TelemetrySink};
pub use state::VehicleState;
pub use vehicle::{EngineStage, StageId};
