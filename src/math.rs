use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Planar 3D vector helpers
// ---------------------------------------------------------------------------
//
// The ascent model is planar: all steering happens in the x-z plane, with y
// structurally untouched. These helpers carry the quadrant handling that
// `atan(x/z)` needs in that plane.

/// Angle between two vectors, in radians.
///
/// The cosine is clamped to [-1, 1] before `acos` so accumulated rounding
/// never produces a domain error. Returns 0 when either vector has zero
/// length.
pub fn angle(v1: Vector3<f64>, v2: Vector3<f64>) -> f64 {
    let len1 = v1.norm();
    let len2 = v2.norm();
    if len1 == 0.0 || len2 == 0.0 {
        return 0.0;
    }
    (v1.dot(&v2) / (len1 * len2)).clamp(-1.0, 1.0).acos()
}

/// Projection of `v` onto `axis`.
pub fn project_onto_vector(v: Vector3<f64>, axis: Vector3<f64>) -> Vector3<f64> {
    axis * (v.dot(&axis) / axis.dot(&axis))
}

/// Projection of `v` onto the plane perpendicular to `normal`.
///
/// Computed as `v - normal * |v| * cos(angle(v, normal)) / |normal|`, going
/// through `angle` so the same clamping applies here.
pub fn project_onto_plane(v: Vector3<f64>, normal: Vector3<f64>) -> Vector3<f64> {
    v - normal * (v.norm() * angle(v, normal).cos() / normal.norm())
}

/// Unit direction at the x-z polar angle of `v` minus `angle_deg`.
///
/// This is direction-only: the result always has length 1, whatever the
/// magnitude of `v`. Thrust scaling downstream relies on that.
pub fn rotate_in_plane(v: Vector3<f64>, angle_deg: f64) -> Vector3<f64> {
    let a = angle_deg.to_radians();
    let alpha = if v.z < 0.0 {
        (v.x / v.z).atan() - a + PI
    } else if v.z > 0.0 {
        (v.x / v.z).atan() - a
    } else {
        -a
    };
    Vector3::new(alpha.sin(), 0.0, alpha.cos())
}

/// Angle of `v` in the x-z plane, measured from +z.
pub fn polar_angle(v: Vector3<f64>) -> f64 {
    if v.z < 0.0 {
        (v.x / v.z).atan() + PI
    } else if v.z > 0.0 {
        (v.x / v.z).atan()
    } else {
        FRAC_PI_2
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn angle_of_vector_with_itself_is_zero() {
        let v = Vector3::new(3.0, -1.0, 2.0);
        assert_abs_diff_eq!(angle(v, v), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn angle_of_opposite_vectors_is_pi() {
        let v = Vector3::new(3.0, -1.0, 2.0);
        assert_abs_diff_eq!(angle(v, -v), PI, epsilon = 1e-12);
    }

    #[test]
    fn angle_with_zero_vector_is_zero() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(angle(v, Vector3::zeros()), 0.0);
        assert_eq!(angle(Vector3::zeros(), v), 0.0);
    }

    #[test]
    fn vector_projection_is_idempotent() {
        let v = Vector3::new(4.0, 2.0, -7.0);
        let axis = Vector3::new(1.0, 3.0, 2.0);
        let once = project_onto_vector(v, axis);
        let twice = project_onto_vector(once, axis);
        assert_relative_eq!(once, twice, epsilon = 1e-12);
    }

    #[test]
    fn plane_projection_removes_normal_component() {
        let v = Vector3::new(5.0, 1.0, -3.0);
        let normal = Vector3::new(2.0, 0.0, 1.0);
        let flat = project_onto_plane(v, normal);
        assert_abs_diff_eq!(flat.dot(&normal), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn rotate_in_plane_returns_unit_direction() {
        let v = Vector3::new(600_000.0, 0.0, 12_345.0);
        for deg in 0..=180 {
            let dir = rotate_in_plane(v, f64::from(deg));
            assert_abs_diff_eq!(dir.norm(), 1.0, epsilon = 1e-12);
            assert_eq!(dir.y, 0.0);
        }
    }

    #[test]
    fn rotate_in_plane_ignores_input_magnitude() {
        let v = Vector3::new(1.0, 0.0, 2.0);
        assert_relative_eq!(rotate_in_plane(v, 30.0), rotate_in_plane(v * 1e6, 30.0));
    }

    #[test]
    fn polar_angle_axis_cases() {
        assert_abs_diff_eq!(polar_angle(Vector3::new(0.0, 0.0, 1.0)), 0.0);
        assert_abs_diff_eq!(polar_angle(Vector3::new(1.0, 0.0, 0.0)), FRAC_PI_2);
        assert_abs_diff_eq!(polar_angle(Vector3::new(0.0, 0.0, -1.0)), PI);
    }

    #[test]
    fn rotate_by_zero_recovers_polar_direction() {
        let v = Vector3::new(3.0, 0.0, 4.0);
        let dir = rotate_in_plane(v, 0.0);
        let theta = polar_angle(v);
        assert_abs_diff_eq!(dir.x, theta.sin(), epsilon = 1e-12);
        assert_abs_diff_eq!(dir.z, theta.cos(), epsilon = 1e-12);
    }
}
