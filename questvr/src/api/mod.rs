mod fallback;
pub use self::fallback::FallbackPoseSource;

mod runtime;
pub use self::runtime::RuntimePoseSource;

#[cfg(feature = "mock")]
mod mock;
#[cfg(feature = "mock")]
pub use self::mock::{MockRuntimeCreator, MockTrackingRuntime, MockVRInit, MockVRState};

#[cfg(feature = "native")]
mod native;
#[cfg(feature = "native")]
pub use self::native::{NativeRuntimeCreator, NativeTrackingRuntime, DEFAULT_LIBRARY_NAME};

use crate::VRPoseSource;

// Pose source selected from the crate's features: the native runtime when it
// is compiled in, the deterministic fallback otherwise.
pub fn default_pose_source() -> Box<dyn VRPoseSource> {
    #[cfg(feature = "native")]
    {
        use crate::VRTrackingRuntimeCreator;
        let creator = NativeRuntimeCreator::new(DEFAULT_LIBRARY_NAME);
        info!("Using native tracking runtime '{}'", DEFAULT_LIBRARY_NAME);
        return Box::new(RuntimePoseSource::new(creator.new_runtime()));
    }

    #[cfg(not(feature = "native"))]
    {
        info!("No tracking runtime compiled in, using fallback pose source");
        Box::new(FallbackPoseSource::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "native"))]
    #[test]
    fn test_default_pose_source_is_fallback() {
        let mut source = default_pose_source();
        assert_eq!(source.name(), "fallback");
        assert!(source.initialize().is_err());
        assert_eq!(source.head_position(), [0.0, 1.6, 0.0]);
    }
}
