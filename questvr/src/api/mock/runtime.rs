use super::{MockVRInit, MockVRState};
use euclid::Angle;
use crate::{MockVRControlMsg, VREye, VRHand, VRPose, VRTrackingRuntime};
use questvr_api::utils;
use std::sync::mpsc::{Receiver, TryRecvError};

// Half angles of the simulated lenses, in degrees.
const FOV_SIDE_DEGREES: f32 = 45.0;
const FOV_UP_DEGREES: f32 = 50.0;
const FOV_DOWN_DEGREES: f32 = 55.0;
// The nasal side of each lens sees less than the temporal side.
const INNER_SIDE_SCALE: f32 = 0.9;

// Extent at unit distance of a half angle given in degrees.
fn half_extent(degrees: f32) -> f32 {
    Angle::degrees(degrees).radians.tan()
}

/// Simulated tracking runtime.
///
/// Control messages posted from other threads are latched at `begin_frame`,
/// so queries between two frames always read the same snapshot.
pub struct MockTrackingRuntime {
    runtime_id: u32,
    init: MockVRInit,
    initialized: bool,
    state: MockVRState,
    receiver: Option<Receiver<MockVRControlMsg>>,
}

impl MockTrackingRuntime {
    pub fn new(init: MockVRInit) -> MockTrackingRuntime {
        MockTrackingRuntime {
            runtime_id: utils::new_id(),
            init: init,
            initialized: false,
            state: MockVRState::default(),
            receiver: None,
        }
    }

    pub fn new_with_receiver(rcv: Receiver<MockVRControlMsg>, init: MockVRInit) -> MockTrackingRuntime {
        let mut runtime = MockTrackingRuntime::new(init);
        runtime.receiver = Some(rcv);
        runtime
    }

    pub fn state(&self) -> &MockVRState {
        &self.state
    }

    fn latch_messages(&mut self) {
        let receiver = match self.receiver {
            Some(ref receiver) => receiver,
            None => return,
        };
        loop {
            match receiver.try_recv() {
                Ok(msg) => self.state.handle_msg(msg),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!("Mock control channel closed");
                    self.receiver = None;
                    break;
                }
            }
        }
    }

    fn check_initialized(&self) -> Result<(), String> {
        if self.initialized {
            Ok(())
        } else {
            Err("mock runtime not initialized".into())
        }
    }
}

impl VRTrackingRuntime for MockTrackingRuntime {
    fn id(&self) -> u32 {
        self.runtime_id
    }

    fn name(&self) -> &str {
        "mock"
    }

    fn initialize(&mut self) -> Result<bool, String> {
        if !self.init.available {
            return Ok(false);
        }
        if !self.initialized {
            self.state = MockVRState::default();
            self.initialized = true;
        }
        Ok(true)
    }

    fn shutdown(&mut self) {
        self.initialized = false;
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn begin_frame(&mut self) -> Result<bool, String> {
        self.check_initialized()?;
        self.latch_messages();
        Ok(true)
    }

    fn end_frame(&mut self) -> Result<(), String> {
        self.check_initialized()
    }

    fn head_pose(&self) -> Result<VRPose, String> {
        self.check_initialized()?;
        Ok(self.state.head_pose)
    }

    fn controller_position(&self, hand: VRHand) -> Result<[f32; 3], String> {
        self.check_initialized()?;
        Ok(self.state.controllers[hand.index()])
    }

    fn trigger_pressed(&self, hand: VRHand) -> Result<bool, String> {
        self.check_initialized()?;
        Ok(self.state.triggers[hand.index()])
    }

    fn grip_pressed(&self, hand: VRHand) -> Result<bool, String> {
        self.check_initialized()?;
        Ok(self.state.grips[hand.index()])
    }

    fn thumbstick(&self, hand: VRHand) -> Result<[f32; 2], String> {
        self.check_initialized()?;
        Ok(self.state.thumbsticks[hand.index()])
    }

    fn ipd(&self) -> Result<f32, String> {
        self.init.ipd.ok_or_else(|| "ipd not reported".to_string())
    }

    fn eye_offset(&self, eye: VREye) -> Result<f32, String> {
        Ok(eye.sign() * self.ipd()? / 2.0)
    }

    fn eye_resolution(&self) -> Result<(u32, u32), String> {
        self.init.eye_resolution.ok_or_else(|| "eye resolution not reported".to_string())
    }

    fn projection_matrix(&self, eye: VREye, near: f32, far: f32) -> Result<[f32; 16], String> {
        if !self.init.projection {
            return Err("projection not supported".into());
        }

        let side = half_extent(FOV_SIDE_DEGREES) * near;
        let inner = side * INNER_SIDE_SCALE;
        let (left, right) = match eye {
            VREye::Left => (-side, inner),
            VREye::Right => (-inner, side),
        };
        let top = half_extent(FOV_UP_DEGREES) * near;
        let bottom = -half_extent(FOV_DOWN_DEGREES) * near;

        Ok(utils::frustum(left, right, bottom, top, near, far))
    }

    fn update_head_pose(&mut self, pose: &VRPose) -> Result<(), String> {
        self.check_initialized()?;
        self.state.head_pose = *pose;
        Ok(())
    }
}
