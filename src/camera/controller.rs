use glam::{Vec2, Vec3};

use super::core::{CameraSlot, Pose, SlotId, SLOT_COUNT};
use super::motion;
use super::path::PathFollower;
use super::targets::{activate, RenderTargets};
use super::transition::Transition;
use crate::input::FrameInput;
use crate::options::{RigOptions, SceneSetup};

/// Mutable state of the rig's state machine.
///
/// Only the owning [`CameraRig`] writes it; callers get a shared reference.
#[derive(Debug, Clone, PartialEq)]
pub struct RigState {
    active: SlotId,
    zooming: bool,
    transition: Option<Transition>,
}

impl RigState {
    /// Slot whose render target is (or, mid-blend, was last) enabled.
    #[must_use]
    pub fn active_slot(&self) -> SlotId {
        self.active
    }

    /// Whether zoom was held on the last mid-shot frame.
    #[must_use]
    pub fn is_zooming(&self) -> bool {
        self.zooming
    }

    /// Whether a blend is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// The in-flight blend, if any.
    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Progress of the in-flight blend, or 0 when idle.
    #[must_use]
    pub fn transition_progress(&self) -> f32 {
        self.transition.as_ref().map_or(0.0, Transition::progress)
    }
}

/// Four-slot camera rig.
///
/// Slot 0 orbits a target, slot 1 zooms while a key is held, slot 2 is a
/// first-person look camera and slot 3 tours a waypoint path. Switching
/// slots blends the outgoing camera onto the incoming camera's pose before
/// the incoming render target is enabled.
///
/// Drive it by calling [`update`](Self::update) once per frame.
pub struct CameraRig {
    slots: [CameraSlot; SLOT_COUNT],
    options: RigOptions,
    orbit_target: Option<Vec3>,
    path: PathFollower,
    state: RigState,
}

impl CameraRig {
    /// Build the rig from a scene setup and enable slot 0's render target.
    pub fn new(
        scene: &SceneSetup,
        options: RigOptions,
        targets: &mut dyn RenderTargets,
    ) -> Self {
        let slots = SlotId::ALL.map(|id| {
            let setup = scene.slot(id);
            CameraSlot::new(id, setup.pose, setup.fovy, options.znear, options.zfar)
        });
        let points = scene
            .path
            .as_ref()
            .map(|path| path.sample())
            .unwrap_or_default();
        if points.is_empty() {
            log::debug!("no waypoints, path-follower camera is inert");
        }
        if scene.orbit_target.is_none() {
            log::debug!("no orbit target, orbital camera is inert");
        }
        let path = PathFollower::new(points, options.path_arrival_threshold);
        let options = options.with_usable_rates();

        let rig = Self {
            slots,
            options,
            orbit_target: scene.orbit_target,
            path,
            state: RigState {
                active: SlotId::Orbital,
                zooming: false,
                transition: None,
            },
        };
        activate(targets, rig.state.active);
        rig
    }

    /// Current state machine state.
    #[must_use]
    pub fn state(&self) -> &RigState {
        &self.state
    }

    /// Currently active slot.
    #[must_use]
    pub fn active_slot(&self) -> SlotId {
        self.state.active
    }

    /// The camera in `slot`.
    #[must_use]
    pub fn slot(&self, slot: SlotId) -> &CameraSlot {
        &self.slots[slot.index()]
    }

    /// Pose the given slot would blend toward if selected now.
    #[must_use]
    pub fn pose_of(&self, slot: SlotId) -> Pose {
        self.slot(slot).pose
    }

    /// The camera in the active slot.
    #[must_use]
    pub fn active_camera(&self) -> &CameraSlot {
        self.slot(self.state.active)
    }

    /// All four cameras, in slot order.
    #[must_use]
    pub fn slots(&self) -> &[CameraSlot; SLOT_COUNT] {
        &self.slots
    }

    /// Motion tuning in effect.
    #[must_use]
    pub fn options(&self) -> &RigOptions {
        &self.options
    }

    /// Orbit pivot, if the scene supplied one.
    #[must_use]
    pub fn orbit_target(&self) -> Option<Vec3> {
        self.orbit_target
    }

    /// Waypoint tour of the path-follower slot.
    #[must_use]
    pub fn path(&self) -> &PathFollower {
        &self.path
    }

    /// Request a blend to `target`.
    ///
    /// Dropped (returns `false`) when `target` is already active or another
    /// blend is in flight. Requests are never queued.
    pub fn select_camera(&mut self, target: SlotId) -> bool {
        if let Some(transition) = &self.state.transition {
            log::debug!(
                "dropping switch to {} camera, blend to {} in progress",
                target.name(),
                transition.target().name()
            );
            return false;
        }
        let from = self.state.active;
        if target == from {
            return false;
        }

        let start = self.pose_of(from);
        let end = self.pose_of(target);
        self.state.transition = Some(Transition::new(from, target, start, end));
        log::debug!("blending {} camera to {} camera", from.name(), target.name());
        true
    }

    /// Like [`select_camera`](Self::select_camera), with out-of-range
    /// indices mapped to slot 0.
    pub fn select_camera_index(&mut self, index: usize) -> bool {
        self.select_camera(SlotId::from_index(index))
    }

    /// Advance the rig by one frame of `dt` seconds.
    ///
    /// The active slot's motion model runs before the blend step, so while a
    /// blend is in flight the blended pose is what the slot ends the frame
    /// with. A slot that becomes active this frame starts moving next frame.
    pub fn update(
        &mut self,
        dt: f32,
        input: &FrameInput,
        targets: &mut dyn RenderTargets,
    ) {
        if !self.state.is_transitioning() {
            if let Some(slot) = input.selection() {
                let _ = self.select_camera(slot);
            }
        }

        match self.state.active {
            SlotId::Orbital => self.orbit(dt),
            SlotId::MidShot => self.zoom(dt, input.zoom_held),
            SlotId::FirstPerson => self.look(dt, input.pointer_delta),
            SlotId::PathFollower => self.follow_path(dt),
        }

        self.advance_transition(dt, targets);
    }

    /// Move the outgoing camera along the blend; swap render targets once
    /// the blend completes.
    fn advance_transition(&mut self, dt: f32, targets: &mut dyn RenderTargets) {
        let speed = self.options.transition_speed;
        let Some(transition) = self.state.transition.as_mut() else {
            return;
        };
        let pose = transition.advance(dt, speed);
        let done = transition.is_complete();
        let origin = transition.origin();
        let target = transition.target();

        self.slots[origin.index()].pose = pose;

        if done {
            log::debug!(
                "blend from {} camera to {} camera complete",
                origin.name(),
                target.name()
            );
            self.state.transition = None;
            self.state.active = target;
            activate(targets, target);
        }
    }

    /// Ease toward the zoom fov while held. Releasing takes a single step
    /// back toward the default fov, on the first frame after the hold.
    fn zoom(&mut self, dt: f32, held: bool) {
        let goal = if held {
            self.state.zooming = true;
            self.options.zoom_fov
        } else if self.state.zooming {
            self.state.zooming = false;
            self.options.default_fov
        } else {
            return;
        };
        let slot = &mut self.slots[SlotId::MidShot.index()];
        slot.fovy = motion::approach(slot.fovy, goal, self.options.zoom_rate, dt);
    }

    fn follow_path(&mut self, dt: f32) {
        let slot = &mut self.slots[SlotId::PathFollower.index()];
        slot.pose.position = self.path.step(slot.pose.position, dt);
    }

    fn look(&mut self, dt: f32, pointer_delta: Vec2) {
        let degrees = pointer_delta * self.options.look_sensitivity * dt;
        let slot = &mut self.slots[SlotId::FirstPerson.index()];
        slot.pose.orientation = motion::look(slot.pose.orientation, degrees);
    }

    fn orbit(&mut self, dt: f32) {
        let Some(pivot) = self.orbit_target else {
            return;
        };
        let degrees = self.options.orbit_speed * dt;
        let slot = &mut self.slots[SlotId::Orbital.index()];
        slot.pose = motion::orbit(&slot.pose, pivot, degrees);
        log::trace!("orbital camera at {}", slot.pose.position);
    }
}
