use crate::utils;
use crate::VRViewport;

// The VREyeState struct holds everything required to render the scene
// from one virtual camera.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VREyeState {
    // World space camera position, in meters.
    pub position: [f32; 3],

    // World space camera orientation as a unit quaternion [x, y, z, w].
    pub orientation: [f32; 4],

    // major order column matrix describing the projection to be used for this camera
    pub projection_matrix: [f32; 16],

    // Region of the output surface this camera renders to.
    pub viewport: VRViewport,
}

impl Default for VREyeState {
    fn default() -> VREyeState {
        VREyeState {
            position: [0.0, 0.0, 0.0],
            orientation: [0.0, 0.0, 0.0, 1.0],
            projection_matrix: identity_matrix!(),
            viewport: VRViewport::FULL,
        }
    }
}

impl VREyeState {
    /// World to camera transform, column-major. Inverse of the camera's rigid transform.
    pub fn view_matrix(&self) -> [f32; 16] {
        let r = utils::quat_to_matrix(&self.orientation);
        let p = &self.position;
        let mut view = identity_matrix!();
        for row in 0..3 {
            for col in 0..3 {
                // transpose of the rotation
                view[col * 4 + row] = r[row * 4 + col];
            }
            view[12 + row] = -(r[row * 4] * p[0] + r[row * 4 + 1] * p[1] + r[row * 4 + 2] * p[2]);
        }
        view
    }

    pub fn view_projection_matrix(&self) -> [f32; 16] {
        utils::multiply_matrix(&self.projection_matrix, &self.view_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_matrix_moves_camera_to_origin() {
        let eye = VREyeState {
            position: [1.0, 2.0, 3.0],
            orientation: utils::euler_to_quat(0.2, 0.9, -0.4),
            ..VREyeState::default()
        };
        let view = eye.view_matrix();
        let p = eye.position;
        for row in 0..3 {
            let v = view[row] * p[0] + view[4 + row] * p[1] + view[8 + row] * p[2] + view[12 + row];
            assert!(v.abs() < 1e-5, "row {} = {}", row, v);
        }
    }

    #[test]
    fn test_identity_orientation_view_is_translation() {
        let eye = VREyeState {
            position: [-0.0315, 1.6, 0.0],
            ..VREyeState::default()
        };
        let view = eye.view_matrix();
        assert_eq!(view[12], 0.0315);
        assert_eq!(view[13], -1.6);
        assert_eq!(view[0], 1.0);
        assert_eq!(view[5], 1.0);
        assert_eq!(view[10], 1.0);
        assert_eq!(eye.view_projection_matrix(), view);
    }
}
