#[cfg(feature = "native")]
extern crate libloading;
#[macro_use]
extern crate log;
extern crate questvr_api;
#[cfg(feature = "serde-serialization")]
#[macro_use]
extern crate serde_derive;

pub mod api;
mod vr_frame_loop;
mod vr_frame_session;
mod vr_stereo_rig;

pub use questvr_api::*;
pub use vr_frame_loop::VRFrameLoop;
pub use vr_frame_session::{VRFrameSession, VRSessionState};
pub use vr_stereo_rig::{stereo_eye_position, VRRigConfig, VRStereoRig};
