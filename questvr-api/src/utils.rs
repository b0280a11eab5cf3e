use euclid::Angle;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering::SeqCst;

#[cfg(feature = "utils")]
use time;

static RUNTIME_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

// Generates a unique identifier for any VRTrackingRuntime
#[allow(dead_code)]
pub fn new_id() -> u32 {
    RUNTIME_ID_COUNTER.fetch_add(1, SeqCst) as u32
}

// Returns the current time in milliseconds
#[cfg(feature = "utils")]
pub fn timestamp() -> f64 {
    let timespec = time::get_time();
    timespec.sec as f64 * 1000.0 + (timespec.nsec as f64 * 1e-6)
}

/// Builds a unit quaternion `[x, y, z, w]` from Euler angles in radians.
///
/// Pitch rotates about X, yaw about Y and roll about Z. The rotations are
/// applied yaw first, then roll, then pitch.
pub fn euler_to_quat(pitch: f32, yaw: f32, roll: f32) -> [f32; 4] {
    let (sin_x, cos_x) = (pitch * 0.5).sin_cos();
    let (sin_y, cos_y) = (yaw * 0.5).sin_cos();
    let (sin_z, cos_z) = (roll * 0.5).sin_cos();

    let cos_y_cos_z = cos_y * cos_z;
    let sin_y_sin_z = sin_y * sin_z;
    let cos_y_sin_z = cos_y * sin_z;
    let sin_y_cos_z = sin_y * cos_z;

    let w = cos_y_cos_z * cos_x - sin_y_sin_z * sin_x;
    let x = cos_y_cos_z * sin_x + sin_y_sin_z * cos_x;
    let y = sin_y_cos_z * cos_x + cos_y_sin_z * sin_x;
    let z = cos_y_sin_z * cos_x - sin_y_cos_z * sin_x;

    let norm = (x * x + y * y + z * z + w * w).sqrt();
    [x / norm, y / norm, z / norm, w / norm]
}

// Column-major rotation matrix of a unit quaternion [x, y, z, w]
pub fn quat_to_matrix(q: &[f32; 4]) -> [f32; 16] {
    let (x, y, z, w) = (q[0], q[1], q[2], q[3]);
    [
        1.0 - 2.0 * (y * y + z * z), 2.0 * (x * y + w * z),       2.0 * (x * z - w * y),       0.0,
        2.0 * (x * y - w * z),       1.0 - 2.0 * (x * x + z * z), 2.0 * (y * z + w * x),       0.0,
        2.0 * (x * z + w * y),       2.0 * (y * z - w * x),       1.0 - 2.0 * (x * x + y * y), 0.0,
        0.0,                         0.0,                         0.0,                         1.0,
    ]
}

// Multiply 4x4 column-major matrices, returns a * b
pub fn multiply_matrix(a: &[f32; 16], b: &[f32; 16]) -> [f32; 16] {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            out[col * 4 + row] = (0..4).map(|k| a[k * 4 + row] * b[col * 4 + k]).sum();
        }
    }
    out
}

/// Symmetric perspective projection, column-major.
///
/// `near` and `far` must satisfy `0 < near < far`.
pub fn perspective(fov_y: Angle<f32>, aspect: f32, near: f32, far: f32) -> [f32; 16] {
    debug_assert!(0.0 < near && near < far, "invalid clip range {}..{}", near, far);
    let f = 1.0 / (fov_y.radians / 2.0).tan();
    let nf = 1.0 / (near - far);

    let mut matrix = [0.0f32; 16];
    matrix[0] = f / aspect;
    matrix[5] = f;
    matrix[10] = (far + near) * nf;
    matrix[11] = -1.0;
    matrix[14] = 2.0 * far * near * nf;
    matrix
}

/// Off-axis projection from the frustum extents at the near plane, column-major.
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> [f32; 16] {
    debug_assert!(0.0 < near && near < far, "invalid clip range {}..{}", near, far);
    let mut matrix = [0.0f32; 16];
    matrix[0] = (2.0 * near) / (right - left);
    matrix[5] = (2.0 * near) / (top - bottom);
    matrix[8] = (right + left) / (right - left);
    matrix[9] = (top + bottom) / (top - bottom);
    matrix[10] = -(far + near) / (far - near);
    matrix[11] = -1.0;
    matrix[14] = -(2.0 * far * near) / (far - near);
    matrix
}
