// ---------------------------------------------------------------------------
// Simulation events
// ---------------------------------------------------------------------------

/// Stage separation: the first-stage tank ran dry and its dry mass dropped.
///
/// Fires at most once per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparationEvent {
    pub time: f64,     // s
    pub altitude: f64, // m
}
