//! Camera orientation readout for the status line.
//!
//! Converts the camera's direction of projection into azimuth and
//! elevation angles for display, alongside roll and distance which are
//! passed through unchanged. This is a pure computation: no state, no
//! side effects, bit-identical results for identical inputs.

use std::fmt;

use glam::DVec3;

/// Snapshot of the camera orientation in display units.
///
/// Produced fresh after every render pass from live camera state and
/// consumed immediately to build the status line. All angles are in
/// degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraReadout {
    /// Horizontal rotation angle of the camera direction.
    pub azimuth_deg: f64,
    /// Vertical tilt angle of the camera direction.
    pub elevation_deg: f64,
    /// Rotation of the camera about its own viewing axis (pass-through).
    pub roll_deg: f64,
    /// Camera-to-focal-point distance (pass-through).
    pub distance: f64,
}

impl CameraReadout {
    /// Compute the readout from a camera view.
    ///
    /// `direction` is the camera's direction of projection (the unit
    /// vector from eye toward the focal point); the caller guarantees it
    /// is normalized. `roll_deg` and `distance` pass through exactly.
    ///
    /// Near azimuth ±90° the elevation term divides by a vanishing
    /// cosine and the result is driven by floating-point error: with
    /// `direction.z == 0.0` the quotient collapses to zero and the
    /// elevation comes out ≈90°, while perturbed inputs can push the
    /// `acos` argument outside `[-1, 1]` and yield `NaN`. This edge is
    /// deliberately unguarded; callers that need a robust display must
    /// pre-filter near-gimbal-lock orientations. Non-normalized
    /// directions are a precondition violation and silently propagate
    /// as `NaN` or out-of-range angles.
    #[must_use]
    pub fn from_view(direction: DVec3, roll_deg: f64, distance: f64) -> Self {
        let azimuth_deg = (-direction.y).asin().to_degrees();
        let elevation_deg = (-direction.z
            / azimuth_deg.to_radians().cos())
        .acos()
        .to_degrees();

        Self {
            azimuth_deg,
            elevation_deg,
            roll_deg,
            distance,
        }
    }
}

impl fmt::Display for CameraReadout {
    /// Fixed-width status text: one decimal place, degree sign on the
    /// angles.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Camera azimuth: {:>6.1}\u{b0} / elevation: {:>6.1}\u{b0} \
             / roll: {:>6.1}\u{b0} / distance: {:>6.1}",
            self.azimuth_deg, self.elevation_deg, self.roll_deg, self.distance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn straight_on_view_reads_zero() {
        let r =
            CameraReadout::from_view(DVec3::new(0.0, 0.0, -1.0), 0.0, 10.0);
        assert_eq!(r.azimuth_deg, 0.0);
        assert_eq!(r.elevation_deg, 0.0);
        assert_eq!(r.roll_deg, 0.0);
        assert_eq!(r.distance, 10.0);
    }

    #[test]
    fn looking_straight_down_hits_the_gimbal_edge() {
        // direction (0, -1, 0): azimuth is exactly +90 and the elevation
        // divides zero by cos(90°) ≈ 6.1e-17. The quotient collapses to
        // zero, so elevation reads ≈90 rather than NaN. This pins the
        // unguarded behavior, not a claim of correctness.
        let r = CameraReadout::from_view(DVec3::new(0.0, -1.0, 0.0), 5.0, 3.0);
        assert!(approx(r.azimuth_deg, 90.0));
        assert!(approx(r.elevation_deg, 90.0));
        assert_eq!(r.roll_deg, 5.0);
        assert_eq!(r.distance, 3.0);
    }

    #[test]
    fn looking_straight_up_hits_the_gimbal_edge() {
        let r = CameraReadout::from_view(DVec3::new(0.0, 1.0, 0.0), 0.0, 1.0);
        assert!(approx(r.azimuth_deg, -90.0));
        assert!(approx(r.elevation_deg, 90.0));
    }

    #[test]
    fn identical_inputs_yield_bit_identical_outputs() {
        let dir = DVec3::new(-0.433_012_7, -0.5, -0.75).normalize();
        let a = CameraReadout::from_view(dir, 12.5, 42.0);
        let b = CameraReadout::from_view(dir, 12.5, 42.0);
        assert_eq!(a.azimuth_deg.to_bits(), b.azimuth_deg.to_bits());
        assert_eq!(a.elevation_deg.to_bits(), b.elevation_deg.to_bits());
        assert_eq!(a.roll_deg.to_bits(), b.roll_deg.to_bits());
        assert_eq!(a.distance.to_bits(), b.distance.to_bits());
    }

    #[test]
    fn roll_and_distance_pass_through_exactly() {
        let r = CameraReadout::from_view(
            DVec3::new(0.0, 0.0, -1.0),
            -273.15,
            0.0,
        );
        assert_eq!(r.roll_deg.to_bits(), (-273.15f64).to_bits());
        assert_eq!(r.distance.to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn thirty_thirty_orbit_pose_reads_thirty_thirty() {
        // The startup pose of the demo scene: azimuth 30°, elevation 30°
        // applied to a Y-up orbit produces this direction of projection.
        let dir = DVec3::new(
            -(30f64.to_radians().sin() * 30f64.to_radians().cos()),
            -30f64.to_radians().sin(),
            -(30f64.to_radians().cos() * 30f64.to_radians().cos()),
        );
        let r = CameraReadout::from_view(dir, 0.0, 10.0);
        assert!(approx(r.azimuth_deg, 30.0));
        assert!(approx(r.elevation_deg, 30.0));
    }

    #[test]
    fn non_normalized_direction_propagates_nan() {
        // Precondition violation, not a defect: asin leaves its domain.
        let r = CameraReadout::from_view(DVec3::new(0.0, -2.0, 0.0), 0.0, 1.0);
        assert!(r.azimuth_deg.is_nan());
        assert!(r.elevation_deg.is_nan());
    }

    #[test]
    fn status_line_formatting() {
        let r = CameraReadout {
            azimuth_deg: 30.0,
            elevation_deg: 30.0,
            roll_deg: 0.0,
            distance: 10.0,
        };
        assert_eq!(
            r.to_string(),
            "Camera azimuth:   30.0\u{b0} / elevation:   30.0\u{b0} \
             / roll:    0.0\u{b0} / distance:   10.0"
        );
    }
}
