use glam::Vec3;
use shared::{Axis, BoxDimensions};

use crate::error::{ExtrudeError, Result};

/// Components below this magnitude are treated as zero when classifying a face normal
pub const NORMAL_TOLERANCE: f32 = 1e-4;

// ── Face classification ─────────────────────────────────────

/// Map a face normal to the dimension it controls.
///
/// The normal must point along exactly one coordinate axis (either sign).
/// `(±1,0,0)` is width, `(0,±1,0)` is height, `(0,0,±1)` is depth.
pub fn face_axis(normal: Vec3) -> Result<Axis> {
    let components = normal.to_array();
    let mut found = None;

    for (axis, c) in Axis::ALL.iter().zip(components) {
        if !c.is_finite() {
            return Err(ExtrudeError::ObliqueFaceNormal(components));
        }
        if c.abs() <= NORMAL_TOLERANCE {
            continue;
        }
        if found.is_some() {
            return Err(ExtrudeError::ObliqueFaceNormal(components));
        }
        found = Some(*axis);
    }

    found.ok_or(ExtrudeError::ObliqueFaceNormal(components))
}

/// World-space unit vector for an axis
pub fn axis_vector(axis: Axis) -> Vec3 {
    match axis {
        Axis::X => Vec3::X,
        Axis::Y => Vec3::Y,
        Axis::Z => Vec3::Z,
    }
}

// ── Dimension update ────────────────────────────────────────

/// Dimensions after dragging the selected face to `point`.
///
/// Only the component along `axis` changes; it becomes the projected coordinate
/// on that axis, clamped to `min_dimension`. The box stays anchored at the
/// origin, so faces on the negative side also resize the far extent.
/// A non-finite coordinate keeps the committed value.
pub fn extruded_dimensions(
    committed: BoxDimensions,
    axis: Axis,
    point: Vec3,
    min_dimension: f64,
) -> BoxDimensions {
    let coord = point.to_array()[axis.index()] as f64;
    if !coord.is_finite() {
        return committed.clamped(min_dimension);
    }
    committed.with_axis(axis, coord).clamped(min_dimension)
}

/// Reject a minimum dimension that can never produce a visible box
pub fn validate_min_dimension(min_dimension: f64) -> Result<f64> {
    if min_dimension.is_finite() && min_dimension > 0.0 {
        Ok(min_dimension)
    } else {
        Err(ExtrudeError::InvalidDimension(format!(
            "minimum dimension must be positive, got {min_dimension}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_axis_all_six_normals() {
        assert_eq!(face_axis(Vec3::X), Ok(Axis::X));
        assert_eq!(face_axis(Vec3::NEG_X), Ok(Axis::X));
        assert_eq!(face_axis(Vec3::Y), Ok(Axis::Y));
        assert_eq!(face_axis(Vec3::NEG_Y), Ok(Axis::Y));
        assert_eq!(face_axis(Vec3::Z), Ok(Axis::Z));
        assert_eq!(face_axis(Vec3::NEG_Z), Ok(Axis::Z));
    }

    #[test]
    fn test_face_axis_tolerates_noise() {
        assert_eq!(face_axis(Vec3::new(1.0, 1e-6, -1e-6)), Ok(Axis::X));
    }

    #[test]
    fn test_face_axis_rejects_oblique() {
        let n = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!(matches!(face_axis(n), Err(ExtrudeError::ObliqueFaceNormal(_))));
    }

    #[test]
    fn test_face_axis_rejects_zero_and_nan() {
        assert!(face_axis(Vec3::ZERO).is_err());
        assert!(face_axis(Vec3::new(f32::NAN, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_extrude_width() {
        let d = extruded_dimensions(BoxDimensions::UNIT, Axis::X, Vec3::new(3.0, 0.5, 0.5), 0.01);
        assert_eq!(d, BoxDimensions::new(3.0, 1.0, 1.0));
    }

    #[test]
    fn test_extrude_only_touches_axis() {
        let base = BoxDimensions::new(2.0, 3.0, 4.0);
        let d = extruded_dimensions(base, Axis::Y, Vec3::new(9.0, 5.0, 9.0), 0.01);
        assert_eq!(d, BoxDimensions::new(2.0, 5.0, 4.0));
    }

    #[test]
    fn test_extrude_clamps_negative() {
        let d = extruded_dimensions(BoxDimensions::UNIT, Axis::Z, Vec3::new(0.5, 0.5, -2.0), 0.01);
        assert_eq!(d.depth, 0.01);
        assert!(d.is_valid());
    }

    #[test]
    fn test_extrude_non_finite_keeps_committed() {
        let base = BoxDimensions::new(2.0, 3.0, 4.0);
        let d = extruded_dimensions(base, Axis::X, Vec3::new(f32::INFINITY, 0.0, 0.0), 0.01);
        assert_eq!(d, base);
    }

    #[test]
    fn test_validate_min_dimension() {
        assert_eq!(validate_min_dimension(0.01), Ok(0.01));
        assert!(validate_min_dimension(0.0).is_err());
        assert!(validate_min_dimension(f64::NAN).is_err());
    }
}
