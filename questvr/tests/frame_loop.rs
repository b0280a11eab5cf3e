#![cfg(feature = "mock")]

extern crate questvr;

use questvr::api::{MockRuntimeCreator, MockVRInit, RuntimePoseSource};
use questvr::{MockVRControlMsg, VRCameraState, VREye, VRFrameData, VRFrameLoop, VRHand, VRPose,
              VRPoseSource, VRRenderMode, VRRigConfig, VRSceneBinding, VRSceneConfig, VRSessionState,
              VRTrackingRuntimeCreator};
use std::sync::mpsc::Sender;
use std::thread;

#[derive(Default)]
struct Scene {
    configures: usize,
    frames: Vec<VRFrameData>,
}

impl VRSceneBinding for Scene {
    fn configure(&mut self, _config: &VRSceneConfig) {
        self.configures += 1;
    }

    fn apply_frame(&mut self, frame: VRFrameData) {
        self.frames.push(frame);
    }
}

fn stereo_config() -> VRRigConfig {
    VRRigConfig {
        mode: VRRenderMode::Stereo,
        ..VRRigConfig::default()
    }
}

fn mock_loop(init: MockVRInit, config: VRRigConfig) -> (VRFrameLoop, Sender<MockVRControlMsg>) {
    let (runtime, remote) = MockRuntimeCreator::new_runtime_with_remote(init);
    let source = Box::new(RuntimePoseSource::new(runtime));
    let frame_loop = VRFrameLoop::new(source, config, VRSceneConfig::default()).unwrap();
    (frame_loop, remote)
}

fn assert_vec_eq(a: [f32; 3], b: [f32; 3]) {
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() < 1e-5, "{:?} != {:?}", a, b);
    }
}

#[test]
fn test_stereo_frames_from_mock_runtime() {
    let (mut frame_loop, _remote) = mock_loop(MockVRInit::default(), stereo_config());
    let mut scene = Scene::default();
    frame_loop.initialize(&mut scene).unwrap();

    let frame = frame_loop.tick(0.016, &mut scene);
    assert_eq!(frame_loop.session().state(), VRSessionState::FrameIdle);
    assert_eq!(frame_loop.session().frame_count(), 1);

    match frame.camera {
        VRCameraState::Stereo { left, right } => {
            assert_vec_eq(left.position, [-0.0315, 1.6, 0.0]);
            assert_vec_eq(right.position, [0.0315, 1.6, 0.0]);
            assert_eq!(left.orientation, right.orientation);
            // Asymmetric lens frusta lean outwards.
            assert!(left.projection_matrix[8] < 0.0);
            assert!(right.projection_matrix[8] > 0.0);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(scene.frames, vec![frame]);
}

#[test]
fn test_control_messages_from_another_thread() {
    let (mut frame_loop, remote) = mock_loop(MockVRInit::default(), stereo_config());
    let mut scene = Scene::default();
    frame_loop.initialize(&mut scene).unwrap();
    frame_loop.tick(0.016, &mut scene);

    let head = VRPose::new([1.0, 1.8, -1.0], [0.0, 0.0, 0.0]);
    thread::spawn(move || {
        remote.send(MockVRControlMsg::SetHeadPose(head)).unwrap();
        remote.send(MockVRControlMsg::SetTrigger(VRHand::Left, true)).unwrap();
        remote.send(MockVRControlMsg::SetThumbstick(VRHand::Right, [0.2, -4.0])).unwrap();
    }).join().unwrap();

    let frame = frame_loop.tick(0.016, &mut scene);
    assert_eq!(frame.head_pose, head);
    assert_vec_eq(frame.camera.center(), [1.0, 1.8, -1.0]);
    assert!(frame.controller(VRHand::Left).trigger_pressed);
    assert!(!frame.controller(VRHand::Right).trigger_pressed);
    assert_eq!(frame.controller(VRHand::Right).thumbstick, [0.2, -1.0]);
}

#[test]
fn test_non_finite_sample_keeps_previous_frame() {
    let (mut frame_loop, remote) = mock_loop(MockVRInit::default(), stereo_config());
    let mut scene = Scene::default();
    frame_loop.initialize(&mut scene).unwrap();

    remote.send(MockVRControlMsg::SetHeadPose(VRPose::new([0.5, 1.5, 0.5], [0.0; 3]))).unwrap();
    let good = frame_loop.tick(0.016, &mut scene);

    remote.send(MockVRControlMsg::SetHeadPose(VRPose::new([0.0, std::f32::NAN, 0.0], [0.0; 3]))).unwrap();
    let bad = frame_loop.tick(0.016, &mut scene);

    assert_eq!(bad.camera, good.camera);
    assert_eq!(bad.head_pose, good.head_pose);
    assert_eq!(bad.frame_index, good.frame_index + 1);
}

#[test]
fn test_reinitialize_uses_current_pose() {
    let (mut frame_loop, remote) = mock_loop(MockVRInit::default(), VRRigConfig::default());
    let mut scene = Scene::default();
    frame_loop.initialize(&mut scene).unwrap();

    remote.send(MockVRControlMsg::SetHeadPose(VRPose::new([3.0, 1.0, 3.0], [0.0; 3]))).unwrap();
    let before = frame_loop.tick(0.016, &mut scene);
    assert_eq!(before.camera.center(), [3.0, 1.0, 3.0]);

    frame_loop.shutdown();
    assert_eq!(frame_loop.session().state(), VRSessionState::ShutDown);
    frame_loop.initialize(&mut scene).unwrap();
    assert_eq!(frame_loop.session().state(), VRSessionState::Initialized);
    assert_eq!(frame_loop.rig().head_pose().position, [0.0, 1.6, 0.0]);

    // The first frame after re-init reads the live pose, not a cached one.
    remote.send(MockVRControlMsg::SetHeadPose(VRPose::new([2.0, 1.2, -1.0], [0.0; 3]))).unwrap();
    let after = frame_loop.tick(0.016, &mut scene);
    assert_eq!(after.camera.center(), [2.0, 1.2, -1.0]);
    assert_eq!(after.head_pose.position, [2.0, 1.2, -1.0]);
    assert_eq!(after.camera.mode(), VRRenderMode::Mono);
}

#[test]
fn test_initialize_while_running_keeps_cameras() {
    let (mut frame_loop, remote) = mock_loop(MockVRInit::default(), VRRigConfig::default());
    let mut scene = Scene::default();
    frame_loop.initialize(&mut scene).unwrap();

    remote.send(MockVRControlMsg::SetHeadPose(VRPose::new([3.0, 1.0, 3.0], [0.0; 3]))).unwrap();
    let good = frame_loop.tick(0.016, &mut scene);

    assert_eq!(frame_loop.initialize(&mut scene), Ok(()));
    assert_eq!(scene.configures, 1);
    assert_eq!(frame_loop.rig().head_pose().position, [3.0, 1.0, 3.0]);

    remote.send(MockVRControlMsg::SetHeadPose(VRPose::new([std::f32::NAN, 1.0, 3.0], [0.0; 3]))).unwrap();
    let bad = frame_loop.tick(0.016, &mut scene);
    assert_eq!(bad.camera, good.camera);
    assert_eq!(bad.camera.center(), [3.0, 1.0, 3.0]);
}

#[test]
fn test_unavailable_runtime_falls_back() {
    let init = MockVRInit {
        available: false,
        ..MockVRInit::default()
    };
    let (mut frame_loop, _remote) = mock_loop(init, stereo_config());
    let mut scene = Scene::default();
    assert!(frame_loop.initialize(&mut scene).is_err());

    let frame = frame_loop.tick(0.016, &mut scene);
    assert_eq!(frame_loop.session().state(), VRSessionState::Uninitialized);
    assert_vec_eq(frame.camera.eye(VREye::Left).unwrap().position, [-0.0315, 1.6, 0.0]);
    assert_eq!(frame.controller(VRHand::Right).position, [0.3, 1.0, -0.5]);
}

#[test]
fn test_runtime_creator_and_missing_characteristics() {
    let creator = MockRuntimeCreator::new(MockVRInit {
        ipd: None,
        eye_resolution: None,
        projection: false,
        ..MockVRInit::default()
    });
    let mut source = RuntimePoseSource::new(creator.new_runtime());
    assert_eq!(source.name(), "mock");
    assert_eq!(source.ipd(), 0.063);
    assert_eq!(source.eye_resolution(), (1680, 1760));
    source.initialize().unwrap();
    assert!(source.begin_frame());
    assert_eq!(source.eye_offset(VREye::Left), -0.0315);

    source.update_head_pose(&VRPose::new([0.0, 2.0, 0.0], [0.0; 3]));
    assert_eq!(source.head_position(), [0.0, 2.0, 0.0]);
    source.end_frame();
    source.shutdown();
    assert_eq!(source.head_position(), [0.0, 1.6, 0.0]);
}
