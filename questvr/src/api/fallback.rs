use questvr_api::vr_fallback;
use crate::{VRError, VREye, VRHand, VRPose, VRPoseSource};

/// Pose source used when no tracking runtime exists.
///
/// Never initializes and answers every query with the fixed fallback values,
/// so the scene renders from a still camera at standing eye height.
#[derive(Debug, Default)]
pub struct FallbackPoseSource;

impl FallbackPoseSource {
    pub fn new() -> FallbackPoseSource {
        FallbackPoseSource
    }
}

impl VRPoseSource for FallbackPoseSource {
    fn name(&self) -> &str {
        "fallback"
    }

    fn initialize(&mut self) -> Result<(), VRError> {
        warn!("No tracking runtime available, continuing with fallback poses");
        Err(VRError::BackendUnavailable("no tracking runtime configured".into()))
    }

    fn shutdown(&mut self) {
        // No op
    }

    fn is_initialized(&self) -> bool {
        false
    }

    fn begin_frame(&mut self) -> bool {
        false
    }

    fn end_frame(&mut self) {
        // No op
    }

    fn head_pose(&self) -> VRPose {
        vr_fallback::head_pose()
    }

    fn controller_position(&self, hand: VRHand) -> [f32; 3] {
        vr_fallback::controller_position(hand)
    }

    fn trigger_pressed(&self, _hand: VRHand) -> bool {
        false
    }

    fn grip_pressed(&self, _hand: VRHand) -> bool {
        false
    }

    fn thumbstick(&self, _hand: VRHand) -> [f32; 2] {
        [0.0, 0.0]
    }

    fn ipd(&self) -> f32 {
        vr_fallback::IPD
    }

    fn eye_offset(&self, eye: VREye) -> f32 {
        vr_fallback::eye_offset(eye, vr_fallback::IPD)
    }

    fn eye_resolution(&self) -> (u32, u32) {
        vr_fallback::EYE_RESOLUTION
    }

    fn projection_matrix(&self, _eye: VREye, near: f32, far: f32) -> [f32; 16] {
        vr_fallback::projection_matrix(near, far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_reports_backend_unavailable() {
        let mut source = FallbackPoseSource::new();
        match source.initialize() {
            Err(VRError::BackendUnavailable(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert!(!source.is_initialized());
        assert!(!source.begin_frame());
        source.end_frame();
        source.shutdown();
    }

    #[test]
    fn test_fallback_values() {
        let source = FallbackPoseSource::new();
        assert_eq!(source.head_position(), [0.0, 1.6, 0.0]);
        assert_eq!(source.head_rotation(), [0.0, 0.0, 0.0]);
        assert_eq!(source.controller_position(VRHand::Left), [-0.3, 1.0, -0.5]);
        assert_eq!(source.controller_position(VRHand::Right), [0.3, 1.0, -0.5]);
        assert_eq!(source.ipd(), 0.063);
        assert_eq!(source.eye_offset(VREye::Left), -0.0315);
        assert_eq!(source.eye_resolution(), (1680, 1760));
        assert_eq!(source.thumbstick(VRHand::Left), [0.0, 0.0]);
        assert!(!source.controller_state(VRHand::Right).trigger_pressed);
    }
}
