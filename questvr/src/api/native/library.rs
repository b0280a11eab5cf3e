use libloading as lib;
#[cfg(unix)]
use libloading::os::unix::Symbol as Symbol;
#[cfg(windows)]
use libloading::os::windows::Symbol as Symbol;

use std::os::raw::c_int;

// questvr bridge entry points
type Initialize = unsafe extern "C" fn() -> bool;
type Shutdown = unsafe extern "C" fn();
type IsInitialized = unsafe extern "C" fn() -> bool;
type BeginFrame = unsafe extern "C" fn() -> bool;
type EndFrame = unsafe extern "C" fn();
// Writes [x, y, z, pitch, yaw, roll].
type GetHeadPose = unsafe extern "C" fn(*mut f32);
type GetControllerPosition = unsafe extern "C" fn(c_int, *mut f32);
type IsTriggerPressed = unsafe extern "C" fn(c_int) -> bool;
type GetThumbstick = unsafe extern "C" fn(c_int, *mut f32);
type GetIpd = unsafe extern "C" fn() -> f32;
type GetEyeOffset = unsafe extern "C" fn(c_int) -> f32;
type GetEyeSize = unsafe extern "C" fn(*mut c_int, *mut c_int);
type GetProjectionMatrix = unsafe extern "C" fn(c_int, f32, f32, *mut f32);
type UpdateHeadPose = unsafe extern "C" fn(*const f32);

pub struct QuestVRLibrary {
    _lib: lib::Library,
    pub initialize: Symbol<Initialize>,
    pub shutdown: Symbol<Shutdown>,
    pub is_initialized: Symbol<IsInitialized>,
    pub begin_frame: Symbol<BeginFrame>,
    pub end_frame: Symbol<EndFrame>,
    pub get_head_pose: Symbol<GetHeadPose>,
    pub get_controller_position: Symbol<GetControllerPosition>,
    pub is_trigger_pressed: Symbol<IsTriggerPressed>,
    pub get_thumbstick: Symbol<GetThumbstick>,
    pub get_ipd: Symbol<GetIpd>,
    pub get_eye_offset: Symbol<GetEyeOffset>,
    pub get_eye_size: Symbol<GetEyeSize>,
    pub get_projection_matrix: Symbol<GetProjectionMatrix>,
    pub update_head_pose: Symbol<UpdateHeadPose>,
}

impl QuestVRLibrary {
    pub unsafe fn new(name: &str) -> lib::Result<QuestVRLibrary> {
        let lib = lib::Library::new(name)?;
        let initialize = lib.get::<Initialize>(b"questvr_initialize\0")?.into_raw();
        let shutdown = lib.get::<Shutdown>(b"questvr_shutdown\0")?.into_raw();
        let is_initialized = lib.get::<IsInitialized>(b"questvr_is_initialized\0")?.into_raw();
        let begin_frame = lib.get::<BeginFrame>(b"questvr_begin_frame\0")?.into_raw();
        let end_frame = lib.get::<EndFrame>(b"questvr_end_frame\0")?.into_raw();
        let get_head_pose = lib.get::<GetHeadPose>(b"questvr_get_head_pose\0")?.into_raw();
        let get_controller_position =
            lib.get::<GetControllerPosition>(b"questvr_get_controller_position\0")?.into_raw();
        let is_trigger_pressed = lib.get::<IsTriggerPressed>(b"questvr_is_trigger_pressed\0")?.into_raw();
        let get_thumbstick = lib.get::<GetThumbstick>(b"questvr_get_thumbstick\0")?.into_raw();
        let get_ipd = lib.get::<GetIpd>(b"questvr_get_ipd\0")?.into_raw();
        let get_eye_offset = lib.get::<GetEyeOffset>(b"questvr_get_eye_offset\0")?.into_raw();
        let get_eye_size = lib.get::<GetEyeSize>(b"questvr_get_eye_size\0")?.into_raw();
        let get_projection_matrix =
            lib.get::<GetProjectionMatrix>(b"questvr_get_projection_matrix\0")?.into_raw();
        let update_head_pose = lib.get::<UpdateHeadPose>(b"questvr_update_head_pose\0")?.into_raw();

        Ok(QuestVRLibrary {
            _lib: lib,
            initialize: initialize,
            shutdown: shutdown,
            is_initialized: is_initialized,
            begin_frame: begin_frame,
            end_frame: end_frame,
            get_head_pose: get_head_pose,
            get_controller_position: get_controller_position,
            is_trigger_pressed: is_trigger_pressed,
            get_thumbstick: get_thumbstick,
            get_ipd: get_ipd,
            get_eye_offset: get_eye_offset,
            get_eye_size: get_eye_size,
            get_projection_matrix: get_projection_matrix,
            update_head_pose: update_head_pose,
        })
    }
}
