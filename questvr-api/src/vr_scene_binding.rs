use crate::{VRFrameData, VRSceneConfig};

/// The renderable scene fed by the tracking pipeline.
///
/// Receives copies of the camera and controller state each frame and owns
/// no tracking logic itself.
pub trait VRSceneBinding {
    /// Called once when the pipeline is initialized.
    fn configure(&mut self, _config: &VRSceneConfig) {}

    fn apply_frame(&mut self, frame: VRFrameData);
}
