use crate::config::Config;

// ---------------------------------------------------------------------------
// Piecewise atmosphere model
// ---------------------------------------------------------------------------

/// Altitude above which the atmosphere is treated as hard vacuum, m.
pub const VACUUM_CEILING: f64 = 100_000.0;

/// Temperature the vacuum band reports, K.
///
/// A placeholder so the ratio formulas stay finite above the ceiling; it
/// never reaches pressure or density, both of which are forced to zero
/// there.
const VACUUM_TEMPERATURE: f64 = 1000.0;

/// Ambient temperature at a given altitude, K.
///
/// Piecewise-linear profile anchored at the configured sea-level
/// temperature: a -6.5 K/km troposphere to 11 km, an isothermal band to
/// 20 km, a warming ramp to 50 km, a cooling ramp to 80 km, then constant to
/// the vacuum ceiling.
pub fn temperature(cfg: &Config, altitude: f64) -> f64 {
    let t0 = cfg.sea_level_temperature;
    let h = altitude;
    if h <= 11_000.0 {
        t0 - 6.5 * h / 1000.0
    } else if h <= 20_000.0 {
        t0 - 71.5
    } else if h <= 50_000.0 {
        t0 - 71.5 + 54.0 * (h - 20_000.0) / 30_000.0
    } else if h <= 80_000.0 {
        t0 - 17.5 - 72.1 * (h - 50_000.0) / 30_000.0
    } else if h <= VACUUM_CEILING {
        t0 - 89.6
    } else {
        VACUUM_TEMPERATURE
    }
}

/// Barometric pressure at a given altitude, Pa.
///
/// `P0 * exp(-M*g*h / (R*T))` up to the vacuum ceiling, exactly zero above
/// it regardless of the proxy temperature.
pub fn pressure(cfg: &Config, altitude: f64, gravity: f64, temperature: f64) -> f64 {
    if altitude <= VACUUM_CEILING {
        cfg.sea_level_pressure
            * (-cfg.air_molar_mass * gravity * altitude
                / (cfg.universal_gas_constant * temperature))
                .exp()
    } else {
        0.0
    }
}

/// Air density from the ideal gas law, kg/m^3.
pub fn density(cfg: &Config, pressure: f64, temperature: f64) -> f64 {
    pressure / (cfg.specific_gas_constant * temperature)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
