mod library;
mod runtime;

pub use self::runtime::NativeTrackingRuntime;

use crate::{VRTrackingRuntime, VRTrackingRuntimeCreator};

#[cfg(target_os = "windows")]
pub const DEFAULT_LIBRARY_NAME: &str = "questvr.dll";
#[cfg(target_os = "macos")]
pub const DEFAULT_LIBRARY_NAME: &str = "libquestvr.dylib";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const DEFAULT_LIBRARY_NAME: &str = "libquestvr.so";

pub struct NativeRuntimeCreator {
    library_name: String,
}

impl NativeRuntimeCreator {
    pub fn new(library_name: &str) -> NativeRuntimeCreator {
        NativeRuntimeCreator {
            library_name: library_name.into(),
        }
    }
}

impl VRTrackingRuntimeCreator for NativeRuntimeCreator {
    fn new_runtime(&self) -> Box<dyn VRTrackingRuntime> {
        Box::new(NativeTrackingRuntime::new(&self.library_name))
    }
}
