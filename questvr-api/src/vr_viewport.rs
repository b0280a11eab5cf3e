/// A rectangle of the output surface, in normalized coordinates.
///
/// `left..right` spans the horizontal range and `bottom..top` the vertical
/// range, both within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRViewport {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl VRViewport {
    pub const FULL: VRViewport = VRViewport {
        left: 0.0,
        right: 1.0,
        bottom: 0.0,
        top: 1.0,
    };

    pub fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            left: left,
            right: right,
            bottom: bottom,
            top: top,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Returns `[x, y, width, height]` in device pixels for a surface of the given size.
    pub fn to_pixels(&self, surface_width: u32, surface_height: u32) -> [i32; 4] {
        let w = surface_width as f32;
        let h = surface_height as f32;
        let x = (self.left * w).round() as i32;
        let y = (self.bottom * h).round() as i32;
        let right = (self.right * w).round() as i32;
        let top = (self.top * h).round() as i32;
        [x, y, right - x, top - y]
    }
}

impl Default for VRViewport {
    fn default() -> VRViewport {
        VRViewport::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_viewport_in_pixels() {
        let vp = VRViewport::new(0.5, 1.0, 0.0, 1.0);
        assert_eq!(vp.to_pixels(3360, 1760), [1680, 0, 1680, 1760]);
        assert_eq!(vp.width(), 0.5);
        assert_eq!(vp.height(), 1.0);
    }

    #[test]
    fn test_default_is_full_surface() {
        assert_eq!(VRViewport::default(), VRViewport::FULL);
        assert_eq!(VRViewport::FULL.to_pixels(100, 50), [0, 0, 100, 50]);
    }
}
