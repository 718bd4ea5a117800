use thiserror::Error;

use crate::vehicle::EngineStage;

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

/// Central body the vehicle launches from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planet {
    pub mass: f64,             // kg
    pub radius: f64,           // m
    pub angular_velocity: f64, // rad/s
}

/// Every constant of the model in one record, all user-overridable.
///
/// The defaults of `presets::soyuz_fregat()` describe a Soyuz-2.1b first
/// stage with a Fregat upper stage carrying a Luna-25 class payload, on a
/// scaled planet.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Physical constants
    pub gravitational_constant: f64, // m^3/(kg*s^2)
    pub sea_level_pressure: f64,     // Pa
    pub sea_level_temperature: f64,  // K
    pub air_molar_mass: f64,         // kg/mol
    pub universal_gas_constant: f64, // J/(mol*K)
    pub specific_gas_constant: f64,  // J/(kg*K), dry air

    pub planet: Planet,

    // Vehicle
    pub first_stage: EngineStage,
    pub second_stage: EngineStage,
    pub payload_mass: f64, // kg
    pub drag_coefficient: f64,
    pub effective_area: f64, // m^2

    // Fixed control inputs (no guidance in this model)
    pub throttle: f64,     // [0, 1]
    pub steering_deg: f64, // degrees

    // Run parameters
    pub dt: f64,             // integration timestep, s
    pub steps: usize,        // total step budget
    pub sample_every: usize, // record one sample per this many steps
}

impl Config {
    /// Reject malformed configuration before any stepping happens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt > 0.0) {
            return Err(ConfigError::NonPositiveTimestep(self.dt));
        }
        if self.sample_every == 0 {
            return Err(ConfigError::ZeroSampleCadence);
        }
        if !(self.planet.mass > 0.0) || !(self.planet.radius > 0.0) {
            return Err(ConfigError::InvalidPlanet);
        }
        if !(self.sea_level_pressure > 0.0)
            || !(self.sea_level_temperature > 0.0)
            || !(self.universal_gas_constant > 0.0)
            || !(self.specific_gas_constant > 0.0)
        {
            return Err(ConfigError::InvalidAtmosphere);
        }
        if !(self.payload_mass > 0.0) {
            return Err(ConfigError::NonPositivePayload(self.payload_mass));
        }
        if !(self.throttle >= 0.0 && self.throttle <= 1.0) {
            return Err(ConfigError::ThrottleOutOfRange(self.throttle));
        }
        self.first_stage.validate("first")?;
        self.second_stage.validate("second")?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        presets::soyuz_fregat()
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("integration timestep must be positive")]
    NonPositiveTimestep(f64),

    #[error("sample cadence must be at least one step")]
    ZeroSampleCadence,

    #[error("planet mass and radius must be positive")]
    InvalidPlanet,

    #[error("sea-level pressure, temperature, and gas constants must be positive")]
    InvalidAtmosphere,

    #[error("payload mass must be positive")]
    NonPositivePayload(f64),

    #[error("throttle must lie in [0, 1]")]
    ThrottleOutOfRange(f64),

    #[error("{stage} stage: {reason}")]
    InvalidStage {
        stage: &'static str,
        reason: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Preset configurations
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// Soyuz-2.1b + Fregat + Luna-25 payload on a scaled planet.
    pub fn soyuz_fregat() -> Config {
        Config {
            gravitational_constant: 6.67e-11,
            sea_level_pressure: 101_325.0,
            sea_level_temperature: 288.2,
            air_molar_mass: 0.028_98,
            universal_gas_constant: 8.314,
            specific_gas_constant: 287.05,

            planet: Planet {
                mass: 5.29e22,
                radius: 600_000.0,
                angular_velocity: 2.91e-4,
            },

            // Four boosters plus the core block, lumped together
            first_stage: EngineStage {
                dry_mass: 30_000.0,
                propellant_mass: 268_800.0,
                nominal_flow: 572.0,
                thrust_sea_level: 813.0 * 4.0 * 1000.0,
                thrust_vacuum: 1000.0 * 4.0 * 1000.0,
                isp_sea_level: 256.0,
                isp_vacuum: 313.0,
            },

            // Fregat burns outside the atmosphere, so no pressure correction
            second_stage: EngineStage {
                dry_mass: 4000.0,
                propellant_mass: 8000.0,
                nominal_flow: 11.15,
                thrust_sea_level: 35_000.0,
                thrust_vacuum: 35_000.0,
                isp_sea_level: 320.0,
                isp_vacuum: 320.0,
            },

            payload_mass: 1200.0,
            drag_coefficient: 0.115,
            effective_area: 1.77,

            throttle: 1.0,
            steering_deg: 90.0,

            dt: 0.02,
            steps: 7000,
            sample_every: 50,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_passes_validation() {
        assert_eq!(presets::soyuz_fregat().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_timestep() {
        let mut cfg = presets::soyuz_fregat();
        cfg.dt = 0.0;
        assert_eq!(cfg.validate(), Err(ConfigError::NonPositiveTimestep(0.0)));
        cfg.dt = -0.5;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_sample_cadence() {
        let mut cfg = presets::soyuz_fregat();
        cfg.sample_every = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroSampleCadence));
    }

    #[test]
    fn rejects_bad_planet() {
        let mut cfg = presets::soyuz_fregat();
        cfg.planet.mass = 0.0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidPlanet));
    }

    #[test]
    fn rejects_zero_sea_level_pressure() {
        let mut cfg = presets::soyuz_fregat();
        cfg.sea_level_pressure = 0.0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidAtmosphere));
    }

    #[test]
    fn rejects_non_positive_payload() {
        let mut cfg = presets::soyuz_fregat();
        cfg.payload_mass = -1.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositivePayload(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_throttle() {
        let mut cfg = presets::soyuz_fregat();
        cfg.throttle = 1.5;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ThrottleOutOfRange(_))
        ));
    }

    #[test]
    fn rejects_bad_stage_parameters() {
        let mut cfg = presets::soyuz_fregat();
        cfg.first_stage.propellant_mass = -1.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidStage { .. })));

        let mut cfg = presets::soyuz_fregat();
        cfg.second_stage.isp_vacuum = 0.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidStage { .. })));
    }
}
