use crate::{VREye, VRHand, VRPose};

/// Function-call boundary to a tracking runtime (native library, simulator...).
///
/// Any call may fail. Failures are reported as plain messages and are turned
/// into fallback values by the pose source that owns the runtime.
pub trait VRTrackingRuntime: Send {
    fn id(&self) -> u32;

    fn name(&self) -> &str;

    /// Returns Ok(false) when the runtime is present but declined to start.
    fn initialize(&mut self) -> Result<bool, String>;

    fn shutdown(&mut self);

    fn is_initialized(&self) -> bool;

    /// Synchronization point with the headset, returns whether the frame should be rendered.
    fn begin_frame(&mut self) -> Result<bool, String>;

    fn end_frame(&mut self) -> Result<(), String>;

    fn head_pose(&self) -> Result<VRPose, String>;

    fn controller_position(&self, hand: VRHand) -> Result<[f32; 3], String>;

    fn trigger_pressed(&self, hand: VRHand) -> Result<bool, String>;

    fn grip_pressed(&self, hand: VRHand) -> Result<bool, String>;

    fn thumbstick(&self, hand: VRHand) -> Result<[f32; 2], String>;

    fn ipd(&self) -> Result<f32, String>;

    fn eye_offset(&self, eye: VREye) -> Result<f32, String>;

    fn eye_resolution(&self) -> Result<(u32, u32), String>;

    fn projection_matrix(&self, eye: VREye, near: f32, far: f32) -> Result<[f32; 16], String>;

    fn update_head_pose(&mut self, pose: &VRPose) -> Result<(), String>;
}

pub trait VRTrackingRuntimeCreator {
    fn new_runtime(&self) -> Box<dyn VRTrackingRuntime>;
}
