#[macro_use]
macro_rules! identity_matrix {
    () => ([1.0, 0.0, 0.0, 0.0,  0.0, 1.0, 0.0, 0.0,  0.0, 0.0, 1.0, 0.0,  0.0, 0.0, 0.0, 1.0]);
}

#[cfg(feature = "utils")]
extern crate time;

#[cfg(feature = "serde-serialization")]
#[macro_use]
extern crate serde_derive;

pub mod utils;

pub mod mock;
pub mod vr_camera;
pub mod vr_controller;
pub mod vr_error;
pub mod vr_eye;
pub mod vr_eye_state;
pub mod vr_fallback;
pub mod vr_frame_data;
pub mod vr_pose;
pub mod vr_pose_source;
pub mod vr_scene_binding;
pub mod vr_scene_config;
pub mod vr_tracking_runtime;
pub mod vr_viewport;

pub use mock::MockVRControlMsg;
pub use vr_camera::{VRCameraState, VRRenderMode};
pub use vr_controller::{VRControllerState, VRHand};
pub use vr_error::VRError;
pub use vr_eye::VREye;
pub use vr_eye_state::VREyeState;
pub use vr_frame_data::VRFrameData;
pub use vr_pose::VRPose;
pub use vr_pose_source::VRPoseSource;
pub use vr_scene_binding::VRSceneBinding;
pub use vr_scene_config::VRSceneConfig;
pub use vr_tracking_runtime::{VRTrackingRuntime, VRTrackingRuntimeCreator};
pub use vr_viewport::VRViewport;
