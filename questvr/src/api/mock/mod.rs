mod runtime;
mod state;

pub use self::runtime::MockTrackingRuntime;
pub use self::state::MockVRState;

use crate::{MockVRControlMsg, VRTrackingRuntime, VRTrackingRuntimeCreator};
use questvr_api::vr_fallback;
use std::sync::mpsc::{channel, Sender};

// Characteristics of the simulated headset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct MockVRInit {
    // Whether initialize() brings the runtime up.
    pub available: bool,
    // None makes the ipd query fail.
    pub ipd: Option<f32>,
    pub eye_resolution: Option<(u32, u32)>,
    // false makes projection queries fail.
    pub projection: bool,
}

impl Default for MockVRInit {
    fn default() -> MockVRInit {
        MockVRInit {
            available: true,
            ipd: Some(vr_fallback::IPD),
            eye_resolution: Some(vr_fallback::EYE_RESOLUTION),
            projection: true,
        }
    }
}

pub struct MockRuntimeCreator {
    init: MockVRInit,
}

impl MockRuntimeCreator {
    pub fn new(init: MockVRInit) -> MockRuntimeCreator {
        MockRuntimeCreator { init: init }
    }

    pub fn new_runtime_with_remote(init: MockVRInit) -> (Box<dyn VRTrackingRuntime>, Sender<MockVRControlMsg>) {
        let (send, rcv) = channel();
        let runtime = MockTrackingRuntime::new_with_receiver(rcv, init);
        (Box::new(runtime), send)
    }
}

impl VRTrackingRuntimeCreator for MockRuntimeCreator {
    fn new_runtime(&self) -> Box<dyn VRTrackingRuntime> {
        Box::new(MockTrackingRuntime::new(self.init.clone()))
    }
}
