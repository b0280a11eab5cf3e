use crate::{VREye, VREyeState};

/// Whether the rig renders one camera or one camera per eye.
///
/// Chosen once at scene setup. Stereo needs a working tracking runtime to be
/// useful, so hosts without one keep the default `Mono`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum VRRenderMode {
    Mono,
    Stereo,
}

impl Default for VRRenderMode {
    fn default() -> VRRenderMode {
        VRRenderMode::Mono
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum VRCameraState {
    Mono(VREyeState),
    Stereo { left: VREyeState, right: VREyeState },
}

impl Default for VRCameraState {
    fn default() -> VRCameraState {
        VRCameraState::Mono(VREyeState::default())
    }
}

impl VRCameraState {
    pub fn mode(&self) -> VRRenderMode {
        match *self {
            VRCameraState::Mono(_) => VRRenderMode::Mono,
            VRCameraState::Stereo { .. } => VRRenderMode::Stereo,
        }
    }

    /// The camera of one eye. `None` in mono mode.
    pub fn eye(&self, eye: VREye) -> Option<&VREyeState> {
        match *self {
            VRCameraState::Mono(_) => None,
            VRCameraState::Stereo { ref left, ref right } => match eye {
                VREye::Left => Some(left),
                VREye::Right => Some(right),
            },
        }
    }

    /// Every camera to render this frame, in viewport order.
    pub fn views(&self) -> Vec<VREyeState> {
        match *self {
            VRCameraState::Mono(mono) => vec![mono],
            VRCameraState::Stereo { left, right } => vec![left, right],
        }
    }

    /// Mono camera position, or the midpoint between the eyes.
    pub fn center(&self) -> [f32; 3] {
        match *self {
            VRCameraState::Mono(ref mono) => mono.position,
            VRCameraState::Stereo { ref left, ref right } => [
                (left.position[0] + right.position[0]) / 2.0,
                (left.position[1] + right.position[1]) / 2.0,
                (left.position[2] + right.position[2]) / 2.0,
            ],
        }
    }
}
