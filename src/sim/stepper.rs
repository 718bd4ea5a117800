use crate::config::Config;
use crate::math;
use crate::state::VehicleState;
use crate::vehicle::StageId;

use super::event::SeparationEvent;

// ---------------------------------------------------------------------------
// Fixed-timestep integration
// ---------------------------------------------------------------------------

/// Advance the state by one fixed timestep.
///
/// The phase order is load-bearing for the trapezoidal position update:
/// thrust, gravity, drag, ground contact, position, surface clamp,
/// propellant burn. Returns the separation event if the first stage ran dry
/// during this step.
///
/// Never panics and never aborts mid-run: every numeric edge case (zero
/// speed, zero-length vectors, out-of-range cosines) is clamped or skipped
/// at the boundary.
pub fn step(state: &mut VehicleState, cfg: &Config) -> Option<SeparationEvent> {
    let dt = cfg.dt;
    state.time += dt;
    let old_velocity = state.velocity;

    // Thrust along the position direction rotated by (90 - steering) degrees
    let direction = math::rotate_in_plane(state.position, 90.0 - state.steering);
    let accel = state.thrust(cfg) * state.throttle / state.total_mass(cfg);
    state.velocity += direction * (accel * dt);

    // Gravity, radially inward
    let g = state.gravity(cfg);
    state.velocity -= state.position * (g / state.position.norm() * dt);

    // Drag along the velocity's own direction; skipped at zero speed
    let speed = state.velocity.norm();
    if speed != 0.0 {
        let decel = 0.5 * state.density(cfg) * speed * speed * cfg.drag_coefficient
            * cfg.effective_area
            / state.total_mass(cfg);
        state.velocity -= state.velocity * (decel * dt / speed);
    }

    // Ground contact: with any radial velocity left at or below the surface,
    // keep only the horizontal component so the vehicle neither sinks nor
    // bounces.
    if state.altitude(cfg) <= 0.0 {
        let radial = math::project_onto_vector(state.velocity, state.position);
        if radial.norm() != 0.0 {
            state.velocity = math::project_onto_plane(state.velocity, state.position);
        }
    }

    // Trapezoidal position update
    state.position += (state.velocity + old_velocity) * (dt / 2.0);
    if state.altitude(cfg) < 0.0 {
        state.position *= cfg.planet.radius / state.position.norm();
    }

    // Propellant burn and staging; the stage that separates this step does
    // not start draining the next tank until the following step.
    let consumption = state.fuel_flow(cfg) * state.throttle * dt;
    match state.stage {
        StageId::First => {
            state.fuel_first -= consumption;
            if state.fuel_first < 0.0 {
                state.fuel_first = 0.0;
                state.stage = StageId::Second;
                return Some(SeparationEvent {
                    time: state.time,
                    altitude: state.altitude(cfg),
                });
            }
        }
        StageId::Second => {
            state.fuel_second = (state.fuel_second - consumption).max(0.0);
        }
    }

    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
