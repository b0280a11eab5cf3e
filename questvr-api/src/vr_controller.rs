use crate::vr_fallback;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum VRHand {
    Left,
    Right,
}

impl VRHand {
    pub const ALL: [VRHand; 2] = [VRHand::Left, VRHand::Right];

    // Index used across the native boundary: 0 for left, 1 for right.
    pub fn index(self) -> usize {
        match self {
            VRHand::Left => 0,
            VRHand::Right => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<VRHand> {
        match index {
            0 => Some(VRHand::Left),
            1 => Some(VRHand::Right),
            _ => None,
        }
    }
}

// Per hand input and tracking state handed to the scene each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRControllerState {
    pub hand: VRHand,

    // World space position, in meters.
    pub position: [f32; 3],

    pub trigger_pressed: bool,

    pub grip_pressed: bool,

    // Thumbstick deflection, each axis within [-1, 1].
    pub thumbstick: [f32; 2],
}

impl VRControllerState {
    /// Controller resting beside the default head position with no input.
    pub fn at_rest(hand: VRHand) -> Self {
        Self {
            hand: hand,
            position: vr_fallback::controller_position(hand),
            trigger_pressed: false,
            grip_pressed: false,
            thumbstick: [0.0, 0.0],
        }
    }

    /// Clamps each axis to `[-1, 1]`. Non-finite axes read as centered.
    pub fn clamp_thumbstick(value: [f32; 2]) -> [f32; 2] {
        let clamp = |v: f32| if v.is_finite() { v.max(-1.0).min(1.0) } else { 0.0 };
        [clamp(value[0]), clamp(value[1])]
    }
}
