use crate::config::{Config, ConfigError};
use crate::state::VehicleState;

use super::event::SeparationEvent;
use super::stepper::step;

// ---------------------------------------------------------------------------
// Simulation driver
// ---------------------------------------------------------------------------

/// One sampled telemetry record.
///
/// Mass is kept in kilograms here; the CSV layer converts to metric tons
/// when writing the series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,     // s
    pub mass: f64,     // kg
    pub altitude: f64, // m
    pub speed: f64,    // m/s, relative to the local co-rotating frame
}

/// Receives samples and events as the run produces them.
pub trait TelemetrySink {
    fn sample(&mut self, sample: Sample);
    fn separation(&mut self, event: SeparationEvent);
}

/// Complete output of one run: the sampled series plus separation events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightLog {
    pub samples: Vec<Sample>,
    pub separations: Vec<SeparationEvent>,
}

impl FlightLog {
    pub fn final_sample(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn max_altitude(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.altitude)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

impl TelemetrySink for FlightLog {
    fn sample(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    fn separation(&mut self, event: SeparationEvent) {
        self.separations.push(event);
    }
}

/// Run the configured step budget, feeding every `sample_every`-th state and
/// every separation event to the sink.
///
/// The driver never branches on mission outcome: it always runs the full
/// budget. Identical configs produce bit-identical output.
pub fn simulate_with(cfg: &Config, sink: &mut dyn TelemetrySink) -> Result<(), ConfigError> {
    cfg.validate()?;

    let mut state = VehicleState::on_pad(cfg);
    for i in 1..=cfg.steps {
        if let Some(event) = step(&mut state, cfg) {
            sink.separation(event);
        }
        if i % cfg.sample_every == 0 {
            sink.sample(Sample {
                time: state.time,
                mass: state.total_mass(cfg),
                altitude: state.altitude(cfg),
                speed: state.relative_speed(cfg),
            });
        }
    }
    Ok(())
}

/// Run the configured step budget and collect everything into a `FlightLog`.
pub fn simulate(cfg: &Config) -> Result<FlightLog, ConfigError> {
    let mut log = FlightLog::default();
    simulate_with(cfg, &mut log)?;
    Ok(log)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
