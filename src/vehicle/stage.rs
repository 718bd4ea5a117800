use crate::config::ConfigError;

// ---------------------------------------------------------------------------
// Staging
// ---------------------------------------------------------------------------

/// Propulsion stage currently flying the vehicle.
///
/// The transition is one-way: `First` separates into `Second` exactly once,
/// when the first-stage tank runs dry. `Second` is terminal, payload release
/// is not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageId {
    First,
    Second,
}

/// Constant parameters of one propulsion stage.
///
/// Thrust and specific impulse are given at both ends of the pressure range;
/// the propulsion model interpolates linearly between them on the ambient
/// pressure fraction. A stage that never flies in atmosphere carries equal
/// sea-level and vacuum values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineStage {
    pub dry_mass: f64,         // kg
    pub propellant_mass: f64,  // kg
    pub nominal_flow: f64,     // kg/s, at vacuum specific impulse
    pub thrust_sea_level: f64, // N
    pub thrust_vacuum: f64,    // N
    pub isp_sea_level: f64,    // s
    pub isp_vacuum: f64,       // s
}

impl EngineStage {
    /// Dry mass plus a full tank.
    pub fn wet_mass(&self) -> f64 {
        self.dry_mass + self.propellant_mass
    }

    /// Burn time at the nominal flow rate.
    pub fn nominal_burn_time(&self) -> f64 {
        if self.nominal_flow > 0.0 {
            self.propellant_mass / self.nominal_flow
        } else {
            0.0
        }
    }

    pub(crate) fn validate(&self, stage: &'static str) -> Result<(), ConfigError> {
        if !(self.dry_mass > 0.0) {
            return Err(ConfigError::InvalidStage {
                stage,
                reason: "dry mass must be positive",
            });
        }
        if !(self.propellant_mass >= 0.0) {
            return Err(ConfigError::InvalidStage {
                stage,
                reason: "propellant mass must not be negative",
            });
        }
        if !(self.nominal_flow > 0.0) {
            return Err(ConfigError::InvalidStage {
                stage,
                reason: "nominal flow rate must be positive",
            });
        }
        if !(self.isp_vacuum > 0.0) || !(self.isp_sea_level > 0.0) {
            return Err(ConfigError::InvalidStage {
                stage,
                reason: "specific impulse must be positive",
            });
        }
        Ok(())
    }
}
