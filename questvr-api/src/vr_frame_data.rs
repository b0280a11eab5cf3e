use crate::{VRCameraState, VRControllerState, VRHand, VRPose};

// Represents all the information published to the scene for a single frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRFrameData {
    // Time the frame was produced, in milliseconds.
    pub timestamp: f64,

    // Monotonically increasing frame counter of the render loop.
    pub frame_index: u64,

    // Head pose the camera state was derived from.
    pub head_pose: VRPose,

    // Mono camera or per eye cameras.
    pub camera: VRCameraState,

    // Indexed by VRHand::index().
    pub controllers: [VRControllerState; 2],
}

impl Default for VRFrameData {
    fn default() -> VRFrameData {
        VRFrameData {
            timestamp: 0f64,
            frame_index: 0,
            head_pose: VRPose::default(),
            camera: VRCameraState::default(),
            controllers: [
                VRControllerState::at_rest(VRHand::Left),
                VRControllerState::at_rest(VRHand::Right),
            ],
        }
    }
}

impl VRFrameData {
    pub fn controller(&self, hand: VRHand) -> &VRControllerState {
        &self.controllers[hand.index()]
    }
}
