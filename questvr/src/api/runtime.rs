use questvr_api::vr_fallback;
use crate::{VRControllerState, VRError, VREye, VRHand, VRPose, VRPoseSource, VRTrackingRuntime};

/// Pose source backed by a tracking runtime.
///
/// Every failed runtime call degrades to the matching fallback value, so the
/// render loop never sees an error from a query.
pub struct RuntimePoseSource {
    runtime: Box<dyn VRTrackingRuntime>,
    initialized: bool,
}

impl RuntimePoseSource {
    pub fn new(runtime: Box<dyn VRTrackingRuntime>) -> RuntimePoseSource {
        RuntimePoseSource {
            runtime: runtime,
            initialized: false,
        }
    }

    pub fn runtime(&self) -> &dyn VRTrackingRuntime {
        &*self.runtime
    }

    fn query<T, F>(&self, what: &str, fallback: T, f: F) -> T
        where F: FnOnce(&dyn VRTrackingRuntime) -> Result<T, String>
    {
        if !self.initialized {
            return fallback;
        }
        match f(&*self.runtime) {
            Ok(value) => value,
            Err(msg) => {
                debug!("{}: {} query failed: {}", self.runtime.name(), what, msg);
                fallback
            }
        }
    }
}

impl VRPoseSource for RuntimePoseSource {
    fn name(&self) -> &str {
        self.runtime.name()
    }

    fn initialize(&mut self) -> Result<(), VRError> {
        if self.initialized {
            return Ok(());
        }

        match self.runtime.initialize() {
            Ok(true) => {
                info!("Tracking runtime '{}' ({}) initialized", self.runtime.name(), self.runtime.id());
                self.initialized = true;
                Ok(())
            }
            Ok(false) => {
                warn!("Tracking runtime '{}' declined to start", self.runtime.name());
                Err(VRError::BackendUnavailable(format!("{} declined to start", self.runtime.name())))
            }
            Err(msg) => {
                error!("Error initializing tracking runtime '{}': {}", self.runtime.name(), msg);
                Err(VRError::BackendUnavailable(msg))
            }
        }
    }

    fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }
        self.runtime.shutdown();
        self.initialized = false;
        info!("Tracking runtime '{}' ({}) shut down", self.runtime.name(), self.runtime.id());
    }

    fn is_initialized(&self) -> bool {
        self.initialized && self.runtime.is_initialized()
    }

    fn begin_frame(&mut self) -> bool {
        if !self.initialized {
            return false;
        }
        match self.runtime.begin_frame() {
            Ok(proceed) => proceed,
            Err(msg) => {
                warn!("{}: begin_frame failed: {}", self.runtime.name(), msg);
                false
            }
        }
    }

    fn end_frame(&mut self) {
        if !self.initialized {
            return;
        }
        if let Err(msg) = self.runtime.end_frame() {
            warn!("{}: end_frame failed: {}", self.runtime.name(), msg);
        }
    }

    fn head_pose(&self) -> VRPose {
        self.query("head pose", vr_fallback::head_pose(), |r| r.head_pose())
    }

    fn controller_position(&self, hand: VRHand) -> [f32; 3] {
        self.query("controller position", vr_fallback::controller_position(hand), |r| {
            r.controller_position(hand)
        })
    }

    fn trigger_pressed(&self, hand: VRHand) -> bool {
        self.query("trigger", false, |r| r.trigger_pressed(hand))
    }

    fn grip_pressed(&self, hand: VRHand) -> bool {
        self.query("grip", false, |r| r.grip_pressed(hand))
    }

    fn thumbstick(&self, hand: VRHand) -> [f32; 2] {
        let value = self.query("thumbstick", [0.0, 0.0], |r| r.thumbstick(hand));
        VRControllerState::clamp_thumbstick(value)
    }

    // Display characteristics are static, the runtime may answer them before initialization.

    fn ipd(&self) -> f32 {
        match self.runtime.ipd() {
            Ok(ipd) => ipd,
            Err(msg) => {
                debug!("{}: ipd query failed: {}", self.runtime.name(), msg);
                vr_fallback::IPD
            }
        }
    }

    fn eye_offset(&self, eye: VREye) -> f32 {
        match self.runtime.eye_offset(eye) {
            Ok(offset) => offset,
            Err(_) => vr_fallback::eye_offset(eye, self.ipd()),
        }
    }

    fn eye_resolution(&self) -> (u32, u32) {
        match self.runtime.eye_resolution() {
            Ok(size) => size,
            Err(msg) => {
                debug!("{}: eye resolution query failed: {}", self.runtime.name(), msg);
                vr_fallback::EYE_RESOLUTION
            }
        }
    }

    fn projection_matrix(&self, eye: VREye, near: f32, far: f32) -> [f32; 16] {
        match self.runtime.projection_matrix(eye, near, far) {
            Ok(matrix) => matrix,
            Err(msg) => {
                debug!("{}: projection query failed: {}", self.runtime.name(), msg);
                vr_fallback::projection_matrix(near, far)
            }
        }
    }

    fn update_head_pose(&mut self, pose: &VRPose) {
        if !self.initialized {
            return;
        }
        if let Err(msg) = self.runtime.update_head_pose(pose) {
            warn!("{}: update_head_pose failed: {}", self.runtime.name(), msg);
        }
    }
}
