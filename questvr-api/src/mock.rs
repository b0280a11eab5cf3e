use crate::{VRHand, VRPose};

// Remote control of the simulated tracking runtime.
// Messages take effect at the runtime's next begin_frame.
#[derive(Debug, Clone, PartialEq)]
pub enum MockVRControlMsg {
    SetHeadPose(VRPose),
    SetControllerPosition(VRHand, [f32; 3]),
    SetTrigger(VRHand, bool),
    SetGrip(VRHand, bool),
    SetThumbstick(VRHand, [f32; 2]),
}
