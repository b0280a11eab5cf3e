use crate::{VRError, VRFrameData, VRFrameSession, VRPoseSource, VRRigConfig, VRSceneBinding, VRSceneConfig,
            VRStereoRig};
use questvr_api::utils;

const STATUS_LOG_INTERVAL: u64 = 300;

/// Per frame driver connecting a tracking session, the stereo rig and the scene.
pub struct VRFrameLoop {
    session: VRFrameSession,
    rig: VRStereoRig,
    scene_config: VRSceneConfig,
    frame_index: u64,
}

impl VRFrameLoop {
    pub fn new(source: Box<dyn VRPoseSource>, rig_config: VRRigConfig, scene_config: VRSceneConfig)
               -> Result<VRFrameLoop, VRError> {
        Ok(VRFrameLoop {
            session: VRFrameSession::new(source),
            rig: VRStereoRig::new(rig_config)?,
            scene_config: scene_config,
            frame_index: 0,
        })
    }

    /// Host entry point at surface creation. No-op while the session runs.
    ///
    /// A `BackendUnavailable` error is not fatal: the loop keeps ticking
    /// with fallback poses.
    pub fn initialize(&mut self, binding: &mut dyn VRSceneBinding) -> Result<(), VRError> {
        if self.session.state().is_running() {
            return Ok(());
        }
        binding.configure(&self.scene_config);
        self.rig.reset();
        let result = self.session.initialize();
        if let Err(ref e) = result {
            info!("'{}' continuing without tracking: {}", self.scene_config.scene_name, e);
        }
        result
    }

    /// Host entry point at teardown.
    pub fn shutdown(&mut self) {
        self.session.shutdown();
    }

    /// Runs one frame and returns what was published to the scene.
    ///
    /// The rig is updated even when no frame could begin, so an untracked
    /// session still renders from the fallback camera.
    pub fn tick(&mut self, dt: f32, binding: &mut dyn VRSceneBinding) -> VRFrameData {
        let tracked = self.session.begin_frame();

        if let Err(e) = self.rig.update(self.session.source(), dt) {
            debug!("Frame {} keeps previous cameras: {}", self.frame_index, e);
        }

        let frame = self.rig.frame_data(utils::timestamp(), self.frame_index);
        binding.apply_frame(frame);

        if tracked {
            self.session.end_frame();
        }

        if self.frame_index % STATUS_LOG_INTERVAL == 0 {
            info!("Frame {} ({}): camera at {:?}",
                  self.frame_index,
                  if tracked { "tracked" } else { "fallback" },
                  frame.camera.center());
        }
        self.frame_index += 1;
        frame
    }

    pub fn session(&self) -> &VRFrameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut VRFrameSession {
        &mut self.session
    }

    pub fn rig(&self) -> &VRStereoRig {
        &self.rig
    }

    pub fn scene_config(&self) -> &VRSceneConfig {
        &self.scene_config
    }

    /// Number of ticks run so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FallbackPoseSource;
    use crate::VRSessionState;

    #[derive(Default)]
    struct RecordingScene {
        configured: Option<VRSceneConfig>,
        frames: Vec<VRFrameData>,
    }

    impl VRSceneBinding for RecordingScene {
        fn configure(&mut self, config: &VRSceneConfig) {
            self.configured = Some(config.clone());
        }

        fn apply_frame(&mut self, frame: VRFrameData) {
            self.frames.push(frame);
        }
    }

    #[test]
    fn test_untracked_loop_publishes_fallback_camera() {
        let mut frame_loop = VRFrameLoop::new(
            Box::new(FallbackPoseSource::new()),
            VRRigConfig::default(),
            VRSceneConfig::default(),
        ).unwrap();
        let mut scene = RecordingScene::default();

        assert!(frame_loop.initialize(&mut scene).is_err());
        assert_eq!(scene.configured.as_ref().map(|c| c.scene_name.as_str()), Some("VR Scene"));

        for _ in 0..3 {
            frame_loop.tick(0.016, &mut scene);
        }
        assert_eq!(scene.frames.len(), 3);
        assert_eq!(scene.frames[2].frame_index, 2);
        assert_eq!(scene.frames[2].camera.center(), [0.0, 1.6, 0.0]);
        assert_eq!(frame_loop.session().state(), VRSessionState::Uninitialized);
        assert_eq!(frame_loop.session().frame_count(), 0);
        assert_eq!(frame_loop.frame_index(), 3);
    }

    #[test]
    fn test_invalid_rig_config() {
        let result = VRFrameLoop::new(
            Box::new(FallbackPoseSource::new()),
            VRRigConfig { near: 10.0, far: 1.0, ..VRRigConfig::default() },
            VRSceneConfig::default(),
        );
        assert!(result.is_err());
    }
}
