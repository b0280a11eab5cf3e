use crate::{VRControllerState, VRError, VREye, VRHand, VRPose};

/// The VRPoseSource trait abstracts the tracking backend the render loop reads from.
///
/// Every query always returns a structurally valid value. While the backend
/// is not initialized, or when a backend call fails, implementations return
/// the fixed values of `vr_fallback` instead of failing. No method blocks or
/// retries: queries read the latest sample cached by the backend.
///
/// Values read outside an active frame are not guaranteed to reflect the
/// current frame.
pub trait VRPoseSource: Send {

    /// Short name of the backend, for logging.
    fn name(&self) -> &str;

    /// Brings up the backend. Idempotent: calling it again while initialized
    /// succeeds without side effects.
    /// Fails with `VRError::BackendUnavailable` when the backend cannot start;
    /// the source keeps answering with fallback values.
    fn initialize(&mut self) -> Result<(), VRError>;

    /// Releases backend resources. No-op when not initialized.
    fn shutdown(&mut self);

    fn is_initialized(&self) -> bool;

    /// Returns whether the frame should proceed. Always false when not initialized.
    fn begin_frame(&mut self) -> bool;

    /// No-op when not initialized.
    fn end_frame(&mut self);

    /// Latest head pose as one consistent sample.
    fn head_pose(&self) -> VRPose;

    /// Head position in meters.
    fn head_position(&self) -> [f32; 3] {
        self.head_pose().position
    }

    /// Head orientation as [pitch, yaw, roll] in radians.
    fn head_rotation(&self) -> [f32; 3] {
        self.head_pose().orientation
    }

    fn controller_position(&self, hand: VRHand) -> [f32; 3];

    fn trigger_pressed(&self, hand: VRHand) -> bool;

    fn grip_pressed(&self, hand: VRHand) -> bool;

    /// Thumbstick deflection, each axis within [-1, 1].
    fn thumbstick(&self, hand: VRHand) -> [f32; 2];

    fn controller_state(&self, hand: VRHand) -> VRControllerState {
        VRControllerState {
            hand: hand,
            position: self.controller_position(hand),
            trigger_pressed: self.trigger_pressed(hand),
            grip_pressed: self.grip_pressed(hand),
            thumbstick: self.thumbstick(hand),
        }
    }

    /// Interpupillary distance in meters.
    fn ipd(&self) -> f32;

    /// Signed lateral offset from the head center to the eye, in meters.
    fn eye_offset(&self, eye: VREye) -> f32;

    /// Recommended per eye render target size in pixels.
    fn eye_resolution(&self) -> (u32, u32);

    /// Column-major projection matrix for the eye.
    /// Callers must pass `0 < near < far`.
    fn projection_matrix(&self, eye: VREye, near: f32, far: f32) -> [f32; 16];

    /// Pushes a simulated head pose into the backend, for testing and simulation.
    /// No-op when not initialized.
    fn update_head_pose(&mut self, _pose: &VRPose) {}
}
