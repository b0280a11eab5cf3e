use crate::{MockVRControlMsg, VRHand, VRPose};
use questvr_api::vr_fallback;

/// Snapshot of everything the simulated headset reports.
#[derive(Debug, Clone, PartialEq)]
pub struct MockVRState {
    pub head_pose: VRPose,
    pub controllers: [[f32; 3]; 2],
    pub triggers: [bool; 2],
    pub grips: [bool; 2],
    pub thumbsticks: [[f32; 2]; 2],
}

impl Default for MockVRState {
    fn default() -> MockVRState {
        MockVRState {
            head_pose: vr_fallback::head_pose(),
            controllers: [
                vr_fallback::controller_position(VRHand::Left),
                vr_fallback::controller_position(VRHand::Right),
            ],
            triggers: [false; 2],
            grips: [false; 2],
            thumbsticks: [[0.0; 2]; 2],
        }
    }
}

impl MockVRState {
    pub fn handle_msg(&mut self, msg: MockVRControlMsg) {
        match msg {
            MockVRControlMsg::SetHeadPose(pose) => {
                self.head_pose = pose;
            }
            MockVRControlMsg::SetControllerPosition(hand, position) => {
                self.controllers[hand.index()] = position;
            }
            MockVRControlMsg::SetTrigger(hand, pressed) => {
                self.triggers[hand.index()] = pressed;
            }
            MockVRControlMsg::SetGrip(hand, pressed) => {
                self.grips[hand.index()] = pressed;
            }
            MockVRControlMsg::SetThumbstick(hand, value) => {
                self.thumbsticks[hand.index()] = value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_update_single_hand() {
        let mut state = MockVRState::default();
        state.handle_msg(MockVRControlMsg::SetTrigger(VRHand::Right, true));
        state.handle_msg(MockVRControlMsg::SetThumbstick(VRHand::Left, [0.5, -0.5]));
        state.handle_msg(MockVRControlMsg::SetControllerPosition(VRHand::Left, [1.0, 2.0, 3.0]));

        assert_eq!(state.triggers, [false, true]);
        assert_eq!(state.thumbsticks[0], [0.5, -0.5]);
        assert_eq!(state.thumbsticks[1], [0.0, 0.0]);
        assert_eq!(state.controllers[0], [1.0, 2.0, 3.0]);
        assert_eq!(state.controllers[1], [0.3, 1.0, -0.5]);
    }
}
