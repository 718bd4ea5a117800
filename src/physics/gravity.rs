use crate::config::Config;

/// Point-mass gravitational acceleration at a given altitude, m/s^2.
pub fn gravity_accel(cfg: &Config, altitude: f64) -> f64 {
    let r = cfg.planet.radius + altitude;
    cfg.gravitational_constant * cfg.planet.mass / (r * r)
}
