// Display parameters of the scene. Pure presentation, not used by tracking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VRSceneConfig {
    pub scene_name: String,

    // RGBA, each channel within [0, 1].
    pub background_color: [f32; 4],

    pub text_scale: f32,

    // Distance of the floating text in front of the viewer, in meters.
    pub text_distance: f32,
}

impl Default for VRSceneConfig {
    fn default() -> VRSceneConfig {
        VRSceneConfig {
            scene_name: "VR Scene".into(),
            background_color: [0.1, 0.1, 0.2, 1.0],
            text_scale: 1.0,
            text_distance: 2.0,
        }
    }
}
