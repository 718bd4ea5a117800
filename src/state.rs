use nalgebra::Vector3;

use crate::config::Config;
use crate::math;
use crate::physics::{atmosphere, gravity, propulsion};
use crate::vehicle::{EngineStage, StageId};

// ---------------------------------------------------------------------------
// Vehicle state
// ---------------------------------------------------------------------------

/// Full mutable state of the vehicle at one instant.
///
/// Owned by the driver and threaded through the stepper by reference; there
/// is exactly one writer for a run. Everything derived (altitude, mass,
/// engine output) is computed on demand against the [`Config`].
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleState {
    pub time: f64,               // s, mission elapsed
    pub position: Vector3<f64>,  // m, inertial frame
    pub velocity: Vector3<f64>,  // m/s, inertial frame
    pub stage: StageId,
    pub fuel_first: f64,         // kg, never negative
    pub fuel_second: f64,        // kg, never negative
    pub throttle: f64,           // [0, 1]
    pub steering: f64,           // degrees
}

impl VehicleState {
    /// Initial state on the pad: resting on the surface, co-rotating with
    /// the planet, full tanks, first stage attached.
    pub fn on_pad(cfg: &Config) -> Self {
        let r = cfg.planet.radius;
        VehicleState {
            time: 0.0,
            position: Vector3::new(r, 0.0, 0.0),
            velocity: Vector3::new(0.0, 0.0, cfg.planet.angular_velocity * r),
            stage: StageId::First,
            fuel_first: cfg.first_stage.propellant_mass,
            fuel_second: cfg.second_stage.propellant_mass,
            throttle: cfg.throttle,
            steering: cfg.steering_deg,
        }
    }

    // -- geometry ----------------------------------------------------------

    /// Height above the planet surface, m.
    pub fn altitude(&self, cfg: &Config) -> f64 {
        self.position.norm() - cfg.planet.radius
    }

    /// Local gravitational acceleration, m/s^2.
    pub fn gravity(&self, cfg: &Config) -> f64 {
        gravity::gravity_accel(cfg, self.altitude(cfg))
    }

    // -- atmosphere --------------------------------------------------------

    /// Ambient temperature at the current altitude, K.
    pub fn temperature(&self, cfg: &Config) -> f64 {
        atmosphere::temperature(cfg, self.altitude(cfg))
    }

    /// Ambient pressure at the current altitude, Pa.
    pub fn pressure(&self, cfg: &Config) -> f64 {
        let h = self.altitude(cfg);
        atmosphere::pressure(cfg, h, self.gravity(cfg), self.temperature(cfg))
    }

    /// Ambient air density at the current altitude, kg/m^3.
    pub fn density(&self, cfg: &Config) -> f64 {
        atmosphere::density(cfg, self.pressure(cfg), self.temperature(cfg))
    }

    /// Ambient pressure over sea-level pressure: 0 in vacuum, 1 on the pad.
    pub fn pressure_fraction(&self, cfg: &Config) -> f64 {
        self.pressure(cfg) / cfg.sea_level_pressure
    }

    // -- mass and propulsion -----------------------------------------------

    /// Stage constants for the currently attached engine.
    pub fn active_stage<'a>(&self, cfg: &'a Config) -> &'a EngineStage {
        match self.stage {
            StageId::First => &cfg.first_stage,
            StageId::Second => &cfg.second_stage,
        }
    }

    /// Total vehicle mass, kg.
    ///
    /// While the first stage is attached this counts both tanks and both dry
    /// masses; its dry mass drops off the instant the stage separates.
    pub fn total_mass(&self, cfg: &Config) -> f64 {
        match self.stage {
            StageId::First => {
                self.fuel_first
                    + self.fuel_second
                    + cfg.first_stage.dry_mass
                    + cfg.second_stage.dry_mass
                    + cfg.payload_mass
            }
            StageId::Second => {
                self.fuel_second + cfg.second_stage.dry_mass + cfg.payload_mass
            }
        }
    }

    /// Engine thrust at the current ambient pressure, N.
    pub fn thrust(&self, cfg: &Config) -> f64 {
        propulsion::thrust(self.active_stage(cfg), self.pressure_fraction(cfg))
    }

    /// Effective specific impulse at the current ambient pressure, s.
    pub fn effective_isp(&self, cfg: &Config) -> f64 {
        propulsion::effective_isp(self.active_stage(cfg), self.pressure_fraction(cfg))
    }

    /// Propellant flow rate at the current ambient pressure, kg/s.
    pub fn fuel_flow(&self, cfg: &Config) -> f64 {
        propulsion::fuel_flow(self.active_stage(cfg), self.pressure_fraction(cfg))
    }

    // -- reporting ---------------------------------------------------------

    /// Velocity a point co-rotating with the planet would have at the
    /// current position, m/s.
    pub fn orbital_velocity(&self, cfg: &Config) -> Vector3<f64> {
        let theta = math::polar_angle(self.position);
        let v = cfg.planet.angular_velocity * self.position.norm();
        Vector3::new(-theta.cos() * v, 0.0, theta.sin() * v)
    }

    /// Speed relative to the local co-rotating frame, m/s.
    ///
    /// Reporting only; the integration itself works in the inertial frame.
    pub fn relative_speed(&self, cfg: &Config) -> f64 {
        (self.velocity - self.orbital_velocity(cfg)).norm()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn pad_state_rests_on_the_surface() {
        let cfg = presets::soyuz_fregat();
        let s = VehicleState::on_pad(&cfg);
        assert_abs_diff_eq!(s.altitude(&cfg), 0.0);
        assert_eq!(s.stage, StageId::First);
    }

    #[test]
    fn pad_state_co_rotates_with_the_planet() {
        let cfg = presets::soyuz_fregat();
        let s = VehicleState::on_pad(&cfg);
        // The surface velocity is exactly the local co-rotation velocity.
        assert_abs_diff_eq!(s.relative_speed(&cfg), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn total_mass_drops_dry_mass_at_separation() {
        let cfg = presets::soyuz_fregat();
        let mut s = VehicleState::on_pad(&cfg);
        let full = s.total_mass(&cfg);
        assert_relative_eq!(full, 268_800.0 + 8000.0 + 30_000.0 + 4000.0 + 1200.0);

        s.fuel_first = 0.0;
        s.stage = StageId::Second;
        assert_relative_eq!(s.total_mass(&cfg), 8000.0 + 4000.0 + 1200.0);
    }

    #[test]
    fn pad_pressure_fraction_is_one() {
        let cfg = presets::soyuz_fregat();
        let s = VehicleState::on_pad(&cfg);
        assert_relative_eq!(s.pressure_fraction(&cfg), 1.0);
        // Sea-level thrust at sea level
        assert_relative_eq!(s.thrust(&cfg), cfg.first_stage.thrust_sea_level);
    }

    #[test]
    fn vacuum_thrust_above_the_atmosphere() {
        let cfg = presets::soyuz_fregat();
        let mut s = VehicleState::on_pad(&cfg);
        s.position = Vector3::new(cfg.planet.radius + 150_000.0, 0.0, 0.0);
        assert_relative_eq!(s.thrust(&cfg), cfg.first_stage.thrust_vacuum);
        assert_relative_eq!(s.fuel_flow(&cfg), cfg.first_stage.nominal_flow);
    }
}
