use crate::{VRError, VRPoseSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VRSessionState {
    Uninitialized,
    Initialized,
    FrameActive,
    FrameIdle,
    ShutDown,
}

impl VRSessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            VRSessionState::Uninitialized => "uninitialized",
            VRSessionState::Initialized => "initialized",
            VRSessionState::FrameActive => "frame-active",
            VRSessionState::FrameIdle => "frame-idle",
            VRSessionState::ShutDown => "shut-down",
        }
    }

    /// Initialized, or inside or between frames.
    pub fn is_running(&self) -> bool {
        match *self {
            VRSessionState::Initialized | VRSessionState::FrameActive | VRSessionState::FrameIdle => true,
            VRSessionState::Uninitialized | VRSessionState::ShutDown => false,
        }
    }
}

/// Lifecycle of a tracking session over an owned pose source.
///
/// ```text
/// Uninitialized -> Initialized -> FrameActive <-> FrameIdle
///        any running state -> ShutDown -> Initialized
/// ```
///
/// The host drives `initialize` and `shutdown`; the session never
/// initializes itself.
pub struct VRFrameSession {
    source: Box<dyn VRPoseSource>,
    state: VRSessionState,
    frames: u64,
}

impl Drop for VRFrameSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl VRFrameSession {
    pub fn new(source: Box<dyn VRPoseSource>) -> VRFrameSession {
        VRFrameSession {
            source: source,
            state: VRSessionState::Uninitialized,
            frames: 0,
        }
    }

    pub fn state(&self) -> VRSessionState {
        self.state
    }

    /// Starts the pose source. A failure leaves the state untouched so the
    /// host may retry, while queries keep answering with fallback values.
    pub fn initialize(&mut self) -> Result<(), VRError> {
        if self.state.is_running() {
            return Ok(());
        }

        match self.source.initialize() {
            Ok(()) => {
                info!("VR session started on '{}'", self.source.name());
                self.state = VRSessionState::Initialized;
                Ok(())
            }
            Err(e) => {
                warn!("VR session could not start on '{}': {}", self.source.name(), e);
                Err(e)
            }
        }
    }

    /// Returns whether the frame should be rendered with tracked data.
    pub fn begin_frame(&mut self) -> bool {
        match self.state {
            VRSessionState::FrameActive => true,
            VRSessionState::Initialized | VRSessionState::FrameIdle => {
                if self.source.begin_frame() {
                    self.state = VRSessionState::FrameActive;
                    self.frames += 1;
                    trace!("Frame {} begun", self.frames);
                    true
                } else {
                    false
                }
            }
            VRSessionState::Uninitialized | VRSessionState::ShutDown => false,
        }
    }

    pub fn end_frame(&mut self) {
        if self.state != VRSessionState::FrameActive {
            return;
        }
        self.source.end_frame();
        self.state = VRSessionState::FrameIdle;
    }

    /// Releases the pose source. Idempotent.
    pub fn shutdown(&mut self) {
        if self.state == VRSessionState::ShutDown {
            return;
        }
        if self.state == VRSessionState::FrameActive {
            self.source.end_frame();
        }
        self.source.shutdown();
        info!("VR session on '{}' shut down after {} frames", self.source.name(), self.frames);
        self.state = VRSessionState::ShutDown;
    }

    // Reads outside an active frame are allowed but may see the previous frame.
    pub fn check_frame_active(&self) -> Result<(), VRError> {
        if self.state == VRSessionState::FrameActive {
            Ok(())
        } else {
            Err(VRError::InvalidFrameState(self.state.as_str()))
        }
    }

    pub fn source(&self) -> &dyn VRPoseSource {
        &*self.source
    }

    pub fn source_mut(&mut self) -> &mut dyn VRPoseSource {
        &mut *self.source
    }

    /// Number of frames successfully begun since creation.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
