use crate::VRViewport;

// Identifies one of the two eyes of a head mounted display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum VREye {
    Left,
    Right,
}

impl VREye {
    pub const ALL: [VREye; 2] = [VREye::Left, VREye::Right];

    // Index used across the native boundary: 0 for left, 1 for right.
    pub fn index(self) -> u32 {
        match self {
            VREye::Left => 0,
            VREye::Right => 1,
        }
    }

    pub fn from_index(index: u32) -> Option<VREye> {
        match index {
            0 => Some(VREye::Left),
            1 => Some(VREye::Right),
            _ => None,
        }
    }

    /// Sign of the lateral eye offset along the head's local X axis.
    pub fn sign(self) -> f32 {
        match self {
            VREye::Left => -1.0,
            VREye::Right => 1.0,
        }
    }

    /// Side-by-side layout: each eye owns one horizontal half of the output surface.
    pub fn viewport(self) -> VRViewport {
        match self {
            VREye::Left => VRViewport::new(0.0, 0.5, 0.0, 1.0),
            VREye::Right => VRViewport::new(0.5, 1.0, 0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for eye in VREye::ALL.iter() {
            assert_eq!(VREye::from_index(eye.index()), Some(*eye));
        }
        assert_eq!(VREye::from_index(2), None);
    }

    #[test]
    fn test_viewports_split_surface_in_half() {
        let left = VREye::Left.viewport();
        let right = VREye::Right.viewport();
        assert_eq!(left.right, right.left);
        assert_eq!(left.left, 0.0);
        assert_eq!(right.right, 1.0);
        assert_eq!(left.bottom, 0.0);
        assert_eq!(left.top, 1.0);
    }
}
