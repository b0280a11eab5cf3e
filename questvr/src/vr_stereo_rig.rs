use questvr_api::vr_fallback;
use crate::{VRCameraState, VRControllerState, VRError, VREye, VREyeState, VRFrameData, VRHand, VRPose,
            VRPoseSource, VRRenderMode, VRViewport};

/// Rig settings, fixed once at scene setup.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRRigConfig {
    pub mode: VRRenderMode,

    // Clip planes passed to every projection query, in meters.
    pub near: f32,
    pub far: f32,
}

impl Default for VRRigConfig {
    fn default() -> VRRigConfig {
        VRRigConfig {
            mode: VRRenderMode::Mono,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl VRRigConfig {
    pub fn validate(&self) -> Result<(), VRError> {
        if !(self.near.is_finite() && self.far.is_finite() && 0.0 < self.near && self.near < self.far) {
            return Err(VRError::InvariantViolation(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                self.near, self.far
            )));
        }
        Ok(())
    }
}

/// World space position of one eye: the head position displaced by half
/// the IPD along the head's local lateral axis.
pub fn stereo_eye_position(head: &VRPose, eye: VREye, ipd: f32) -> [f32; 3] {
    head.transform_offset([eye.sign() * ipd / 2.0, 0.0, 0.0])
}

/// Derives the render cameras from the head pose.
///
/// Each `update` fully overwrites the cameras from the current head pose and
/// IPD; nothing is smoothed. A rejected sample keeps the previous cameras.
pub struct VRStereoRig {
    config: VRRigConfig,
    head_pose: VRPose,
    camera: VRCameraState,
    controllers: [VRControllerState; 2],
}

impl VRStereoRig {
    pub fn new(config: VRRigConfig) -> Result<VRStereoRig, VRError> {
        config.validate()?;
        let mut rig = VRStereoRig {
            config: config,
            head_pose: VRPose::default(),
            camera: VRCameraState::default(),
            controllers: [VRControllerState::at_rest(VRHand::Left), VRControllerState::at_rest(VRHand::Right)],
        };
        rig.reset();
        Ok(rig)
    }

    /// Back to the fallback camera and resting controllers.
    pub fn reset(&mut self) {
        let head = vr_fallback::head_pose();
        let projection = vr_fallback::projection_matrix(self.config.near, self.config.far);
        self.camera = self.compute_camera(&head, vr_fallback::IPD, |_| projection);
        self.head_pose = head;
        self.controllers = [vr_fallback::controller_state(VRHand::Left), vr_fallback::controller_state(VRHand::Right)];
    }

    /// Samples the pose source once and recomputes the cameras.
    ///
    /// Fails with `VRError::InvalidPose` on a non-finite head pose, or a
    /// non-finite or negative IPD in stereo mode; the previous cameras are
    /// kept. Controllers are updated independently of the head.
    pub fn update(&mut self, source: &dyn VRPoseSource, dt: f32) -> Result<(), VRError> {
        trace!("Rig update, dt {}", dt);
        self.update_controllers(source);

        let head = source.head_pose();
        if !head.is_finite() {
            warn!("Rejected non-finite head pose {:?}", head);
            return Err(VRError::InvalidPose(format!("non-finite head pose {:?}", head)));
        }

        let ipd = match self.config.mode {
            VRRenderMode::Mono => vr_fallback::IPD,
            VRRenderMode::Stereo => {
                let ipd = source.ipd();
                if !ipd.is_finite() || ipd < 0.0 {
                    warn!("Rejected invalid ipd {}", ipd);
                    return Err(VRError::InvalidPose(format!("invalid ipd {}", ipd)));
                }
                ipd
            }
        };

        let (near, far) = (self.config.near, self.config.far);
        self.camera = self.compute_camera(&head, ipd, |eye| {
            let projection = source.projection_matrix(eye, near, far);
            if projection.iter().all(|v| v.is_finite()) {
                projection
            } else {
                debug!("Non-finite {:?} projection, using fallback", eye);
                vr_fallback::projection_matrix(near, far)
            }
        });
        self.head_pose = head;
        Ok(())
    }

    fn update_controllers(&mut self, source: &dyn VRPoseSource) {
        for &hand in VRHand::ALL.iter() {
            let mut state = source.controller_state(hand);
            if !state.position.iter().all(|v| v.is_finite()) {
                debug!("Keeping previous {:?} controller, non-finite position", hand);
                continue;
            }
            state.thumbstick = VRControllerState::clamp_thumbstick(state.thumbstick);
            self.controllers[hand.index()] = state;
        }
    }

    fn compute_camera<F>(&self, head: &VRPose, ipd: f32, projection: F) -> VRCameraState
        where F: Fn(VREye) -> [f32; 16]
    {
        let orientation = head.quaternion();
        match self.config.mode {
            VRRenderMode::Mono => VRCameraState::Mono(VREyeState {
                position: head.position,
                orientation: orientation,
                projection_matrix: vr_fallback::projection_matrix(self.config.near, self.config.far),
                viewport: VRViewport::FULL,
            }),
            VRRenderMode::Stereo => {
                let eye_state = |eye: VREye| VREyeState {
                    position: stereo_eye_position(head, eye, ipd),
                    orientation: orientation,
                    projection_matrix: projection(eye),
                    viewport: eye.viewport(),
                };
                VRCameraState::Stereo {
                    left: eye_state(VREye::Left),
                    right: eye_state(VREye::Right),
                }
            }
        }
    }

    pub fn mode(&self) -> VRRenderMode {
        self.config.mode
    }

    pub fn config(&self) -> &VRRigConfig {
        &self.config
    }

    /// Head pose of the last accepted sample.
    pub fn head_pose(&self) -> VRPose {
        self.head_pose
    }

    pub fn camera(&self) -> &VRCameraState {
        &self.camera
    }

    pub fn controllers(&self) -> &[VRControllerState; 2] {
        &self.controllers
    }

    pub fn controller(&self, hand: VRHand) -> &VRControllerState {
        &self.controllers[hand.index()]
    }

    /// Copy of the current state for the scene.
    pub fn frame_data(&self, timestamp: f64, frame_index: u64) -> VRFrameData {
        VRFrameData {
            timestamp: timestamp,
            frame_index: frame_index,
            head_pose: self.head_pose,
            camera: self.camera,
            controllers: self.controllers,
        }
    }
}
