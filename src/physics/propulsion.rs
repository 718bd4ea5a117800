use crate::vehicle::EngineStage;

// ---------------------------------------------------------------------------
// Engine curves, linear in the ambient pressure fraction
// ---------------------------------------------------------------------------
//
// `pressure_fraction` is ambient pressure over sea-level pressure: 0 in
// vacuum, 1 on the pad. A stage with equal sea-level and vacuum figures is
// unaffected by it.

/// Thrust at the given pressure fraction, N.
pub fn thrust(stage: &EngineStage, pressure_fraction: f64) -> f64 {
    stage.thrust_vacuum - (stage.thrust_vacuum - stage.thrust_sea_level) * pressure_fraction
}

/// Effective specific impulse at the given pressure fraction, s.
pub fn effective_isp(stage: &EngineStage, pressure_fraction: f64) -> f64 {
    stage.isp_vacuum - (stage.isp_vacuum - stage.isp_sea_level) * pressure_fraction
}

/// Propellant flow rate at the given pressure fraction, kg/s.
///
/// The nominal rate is referenced to vacuum Isp; as the effective Isp drops
/// in denser air, the engine burns faster for the same commanded output.
pub fn fuel_flow(stage: &EngineStage, pressure_fraction: f64) -> f64 {
    stage.nominal_flow * stage.isp_vacuum / effective_isp(stage, pressure_fraction)
}
