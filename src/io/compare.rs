use crate::sim::Sample;

// ---------------------------------------------------------------------------
// Series comparison
// ---------------------------------------------------------------------------
//
// Per-field relative error between a measured series and the reference
// series this crate produces. Chart rendering lives with the external
// reporting tool; only the alignment and error math is here.

/// Samples discarded at the start of the common axis to skip startup
/// transients.
pub const WARMUP_SAMPLES: usize = 10;

/// Percentage error of one aligned sample pair, per field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorPoint {
    pub time: f64, // s, from the reference axis
    pub mass_pct: f64,
    pub altitude_pct: f64,
    pub speed_pct: f64,
}

/// Align the two series on the shorter common length, skip the first
/// `warmup` samples, and compute absolute percentage errors against the
/// reference.
///
/// A field whose reference value is exactly zero reports 0% error instead
/// of dividing by it.
pub fn relative_errors(reference: &[Sample], measured: &[Sample], warmup: usize) -> Vec<ErrorPoint> {
    let common = reference.len().min(measured.len());
    (warmup..common)
        .map(|i| {
            let r = &reference[i];
            let m = &measured[i];
            ErrorPoint {
                time: r.time,
                mass_pct: pct_error(r.mass, m.mass),
                altitude_pct: pct_error(r.altitude, m.altitude),
                speed_pct: pct_error(r.speed, m.speed),
            }
        })
        .collect()
}

fn pct_error(reference: f64, measured: f64) -> f64 {
    if reference == 0.0 {
        0.0
    } else {
        ((measured - reference) / reference * 100.0).abs()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
