//! Fixed values substituted for tracking queries when the runtime is
//! unavailable, not initialized, or a query fails.

use crate::utils;
use crate::{VRControllerState, VREye, VRHand, VRPose};
use euclid::Angle;

/// Average standing eye height.
pub const HEAD_POSITION: [f32; 3] = [0.0, 1.6, 0.0];

pub const LEFT_CONTROLLER_POSITION: [f32; 3] = [-0.3, 1.0, -0.5];

pub const RIGHT_CONTROLLER_POSITION: [f32; 3] = [0.3, 1.0, -0.5];

/// Population average interpupillary distance, in meters.
pub const IPD: f32 = 0.063;

/// Per eye render target of the target headset.
pub const EYE_RESOLUTION: (u32, u32) = (1680, 1760);

pub const FOV_Y_DEGREES: f32 = 90.0;

pub const ASPECT: f32 = 1.0;

pub fn head_pose() -> VRPose {
    VRPose::new(HEAD_POSITION, [0.0, 0.0, 0.0])
}

pub fn controller_position(hand: VRHand) -> [f32; 3] {
    match hand {
        VRHand::Left => LEFT_CONTROLLER_POSITION,
        VRHand::Right => RIGHT_CONTROLLER_POSITION,
    }
}

pub fn controller_state(hand: VRHand) -> VRControllerState {
    VRControllerState::at_rest(hand)
}

pub fn eye_offset(eye: VREye, ipd: f32) -> f32 {
    eye.sign() * ipd / 2.0
}

/// Symmetric 90 degree square projection.
pub fn projection_matrix(near: f32, far: f32) -> [f32; 16] {
    utils::perspective(Angle::degrees(FOV_Y_DEGREES), ASPECT, near, far)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_offsets() {
        assert_eq!(eye_offset(VREye::Left, IPD), -0.0315);
        assert_eq!(eye_offset(VREye::Right, IPD), 0.0315);
    }

    #[test]
    fn test_projection_contract() {
        let m = projection_matrix(0.1, 1000.0);
        assert_eq!(m[0], m[5]);
        assert_eq!(m[11], -1.0);
        let zeros = [1, 2, 3, 4, 6, 7, 8, 9, 12, 13, 15];
        for &i in zeros.iter() {
            assert_eq!(m[i], 0.0, "m[{}] should be zero", i);
        }
    }

    #[test]
    fn test_head_pose() {
        let pose = head_pose();
        assert_eq!(pose.position, [0.0, 1.6, 0.0]);
        assert_eq!(pose.orientation, [0.0, 0.0, 0.0]);
    }
}
