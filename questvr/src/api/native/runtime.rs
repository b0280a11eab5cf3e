use super::library::QuestVRLibrary;
use crate::{VREye, VRHand, VRPose, VRTrackingRuntime};
use questvr_api::utils;
use std::os::raw::c_int;

/// Tracking runtime implemented by the `questvr` native bridge library.
///
/// The library is loaded on the first `initialize` and kept for the
/// lifetime of the runtime.
pub struct NativeTrackingRuntime {
    runtime_id: u32,
    library_name: String,
    lib: Option<QuestVRLibrary>,
    initialized: bool,
}

unsafe impl Send for NativeTrackingRuntime {}

impl NativeTrackingRuntime {
    pub fn new(library_name: &str) -> NativeTrackingRuntime {
        NativeTrackingRuntime {
            runtime_id: utils::new_id(),
            library_name: library_name.into(),
            lib: None,
            initialized: false,
        }
    }

    fn lib(&self) -> Result<&QuestVRLibrary, String> {
        self.lib.as_ref().ok_or_else(|| format!("{} not loaded", self.library_name))
    }

    fn initialized_lib(&self) -> Result<&QuestVRLibrary, String> {
        if !self.initialized {
            return Err("native runtime not initialized".into());
        }
        self.lib()
    }
}

impl VRTrackingRuntime for NativeTrackingRuntime {
    fn id(&self) -> u32 {
        self.runtime_id
    }

    fn name(&self) -> &str {
        "native"
    }

    fn initialize(&mut self) -> Result<bool, String> {
        if self.initialized {
            return Ok(true);
        }

        if self.lib.is_none() {
            match unsafe { QuestVRLibrary::new(&self.library_name) } {
                Ok(lib) => self.lib = Some(lib),
                Err(msg) => {
                    return Err(format!("Error loading {}: {:?}", self.library_name, msg));
                }
            }
        }

        let lib = self.lib()?;
        let started = unsafe { (*lib.initialize)() && (*lib.is_initialized)() };
        self.initialized = started;
        Ok(started)
    }

    fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }
        if let Some(ref lib) = self.lib {
            unsafe { (*lib.shutdown)() };
        }
        self.initialized = false;
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn begin_frame(&mut self) -> Result<bool, String> {
        let lib = self.initialized_lib()?;
        Ok(unsafe { (*lib.begin_frame)() })
    }

    fn end_frame(&mut self) -> Result<(), String> {
        let lib = self.initialized_lib()?;
        unsafe { (*lib.end_frame)() };
        Ok(())
    }

    fn head_pose(&self) -> Result<VRPose, String> {
        let lib = self.initialized_lib()?;
        let mut raw = [0.0f32; 6];
        unsafe { (*lib.get_head_pose)(raw.as_mut_ptr()) };
        Ok(VRPose::new([raw[0], raw[1], raw[2]], [raw[3], raw[4], raw[5]]))
    }

    fn controller_position(&self, hand: VRHand) -> Result<[f32; 3], String> {
        let lib = self.initialized_lib()?;
        let mut position = [0.0f32; 3];
        unsafe { (*lib.get_controller_position)(hand.index() as c_int, position.as_mut_ptr()) };
        Ok(position)
    }

    fn trigger_pressed(&self, hand: VRHand) -> Result<bool, String> {
        let lib = self.initialized_lib()?;
        Ok(unsafe { (*lib.is_trigger_pressed)(hand.index() as c_int) })
    }

    fn grip_pressed(&self, _hand: VRHand) -> Result<bool, String> {
        Err("grip not exposed by the native bridge".into())
    }

    fn thumbstick(&self, hand: VRHand) -> Result<[f32; 2], String> {
        let lib = self.initialized_lib()?;
        let mut value = [0.0f32; 2];
        unsafe { (*lib.get_thumbstick)(hand.index() as c_int, value.as_mut_ptr()) };
        Ok(value)
    }

    fn ipd(&self) -> Result<f32, String> {
        let lib = self.lib()?;
        Ok(unsafe { (*lib.get_ipd)() })
    }

    fn eye_offset(&self, eye: VREye) -> Result<f32, String> {
        let lib = self.lib()?;
        Ok(unsafe { (*lib.get_eye_offset)(eye.index() as c_int) })
    }

    fn eye_resolution(&self) -> Result<(u32, u32), String> {
        let lib = self.lib()?;
        let mut width: c_int = 0;
        let mut height: c_int = 0;
        unsafe { (*lib.get_eye_size)(&mut width, &mut height) };
        if width <= 0 || height <= 0 {
            return Err(format!("invalid eye size {}x{}", width, height));
        }
        Ok((width as u32, height as u32))
    }

    fn projection_matrix(&self, eye: VREye, near: f32, far: f32) -> Result<[f32; 16], String> {
        let lib = self.lib()?;
        let mut matrix = [0.0f32; 16];
        unsafe { (*lib.get_projection_matrix)(eye.index() as c_int, near, far, matrix.as_mut_ptr()) };
        Ok(matrix)
    }

    fn update_head_pose(&mut self, pose: &VRPose) -> Result<(), String> {
        let lib = self.initialized_lib()?;
        let p = &pose.position;
        let o = &pose.orientation;
        let raw = [p[0], p[1], p[2], o[0], o[1], o[2]];
        unsafe { (*lib.update_head_pose)(raw.as_ptr()) };
        Ok(())
    }
}
