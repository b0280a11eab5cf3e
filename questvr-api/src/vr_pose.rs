use crate::utils;
use euclid::default::{Rotation3D, Vector3D};

// The VRPose struct represents the state of a tracked object (head or controller)
// at a given sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRPose {
    // Position of the tracked object as a 3D vector, in meters, world space.
    pub position: [f32; 3],

    // Orientation as [pitch, yaw, roll] Euler angles, in radians.
    pub orientation: [f32; 3],
}

impl VRPose {
    pub fn new(position: [f32; 3], orientation: [f32; 3]) -> Self {
        Self {
            position: position,
            orientation: orientation,
        }
    }

    /// A pose is only usable when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.position.iter().chain(self.orientation.iter()).all(|v| v.is_finite())
    }

    /// Orientation as a unit quaternion `[x, y, z, w]`.
    pub fn quaternion(&self) -> [f32; 4] {
        let o = &self.orientation;
        utils::euler_to_quat(o[0], o[1], o[2])
    }

    pub fn rotation(&self) -> Rotation3D<f32> {
        let q = self.quaternion();
        Rotation3D::quaternion(q[0], q[1], q[2], q[3])
    }

    /// Maps an offset expressed in the pose's local frame to a world space position.
    ///
    /// The pose must be finite.
    pub fn transform_offset(&self, offset: [f32; 3]) -> [f32; 3] {
        let rotated = self
            .rotation()
            .transform_vector3d(Vector3D::new(offset[0], offset[1], offset[2]));
        let p = &self.position;
        (Vector3D::new(p[0], p[1], p[2]) + rotated).to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_vec_eq(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-5, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_finite_check() {
        assert!(VRPose::default().is_finite());
        assert!(!VRPose::new([0.0, std::f32::NAN, 0.0], [0.0; 3]).is_finite());
        assert!(!VRPose::new([0.0; 3], [0.0, 0.0, std::f32::INFINITY]).is_finite());
    }

    #[test]
    fn test_identity_offset_is_translation() {
        let pose = VRPose::new([0.0, 1.6, 0.0], [0.0; 3]);
        assert_vec_eq(pose.transform_offset([-0.0315, 0.0, 0.0]), [-0.0315, 1.6, 0.0]);
    }

    #[test]
    fn test_yaw_turns_lateral_offset() {
        let pose = VRPose::new([1.0, 2.0, 3.0], [0.0, FRAC_PI_2, 0.0]);
        assert_vec_eq(pose.transform_offset([1.0, 0.0, 0.0]), [1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_pitch_keeps_lateral_axis() {
        let pose = VRPose::new([0.0; 3], [0.7, 0.0, 0.0]);
        assert_vec_eq(pose.transform_offset([0.5, 0.0, 0.0]), [0.5, 0.0, 0.0]);
    }

    #[test]
    fn test_roll_tilts_lateral_axis() {
        let pose = VRPose::new([0.0; 3], [0.0, 0.0, FRAC_PI_2]);
        assert_vec_eq(pose.transform_offset([1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
    }
}
